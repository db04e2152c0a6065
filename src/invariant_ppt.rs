//! Runtime invariant checks with contract-test support
//!
//! Model constructors assert their invariants through [`assert_invariant!`].
//! Each checked invariant is recorded per thread, so a test can prove that a
//! code path actually exercised the checks it relies on.
//!
//! ```rust,ignore
//! use camera_personality::invariant_ppt::*;
//!
//! assert_invariant!(
//!     width % 8 == 0,
//!     "Resolution dimensions are positive multiples of 8",
//!     "types::Resolution"
//! );
//!
//! #[test]
//! fn contract_resolution() {
//!     let _ = parse_resolution("640", "480");
//!     contract_test("resolution", &["Resolution dimensions are positive multiples of 8"]);
//! }
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::thread_local;

thread_local! {
    static CHECKED_INVARIANTS: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Assert an invariant and record that it was checked.
///
/// # Panics
/// Panics if the condition is false.
#[macro_export]
macro_rules! assert_invariant {
    ($condition:expr, $message:expr) => {
        $crate::invariant_ppt::__check_invariant($condition, $message, None)
    };
    ($condition:expr, $message:expr, $context:expr) => {
        $crate::invariant_ppt::__check_invariant($condition, $message, Some($context))
    };
}

#[doc(hidden)]
pub fn __check_invariant(condition: bool, message: &str, context: Option<&str>) {
    CHECKED_INVARIANTS.with(|checked| {
        checked.borrow_mut().insert(message.to_string());
    });

    if !condition {
        panic!(
            "invariant violated [{}]: {}",
            context.unwrap_or("unknown"),
            message
        );
    }
}

/// Whether `message` has been checked on this thread.
pub fn was_checked(message: &str) -> bool {
    CHECKED_INVARIANTS.with(|checked| checked.borrow().contains(message))
}

/// Panic unless every invariant in `required` was checked on this thread.
pub fn contract_test(name: &str, required: &[&str]) {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|invariant| !was_checked(invariant))
        .collect();

    if !missing.is_empty() {
        panic!(
            "contract '{}' not exercised; unchecked invariants:\n  - {}",
            name,
            missing.join("\n  - ")
        );
    }
}

/// Forget every recorded check on this thread.
pub fn clear_invariant_log() {
    CHECKED_INVARIANTS.with(|checked| checked.borrow_mut().clear());
}
