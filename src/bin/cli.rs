use anyhow::{bail, Context, Result};
use camera_personality::*;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: personality-cli <resolve|check|legacy> [args]");
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "resolve" => cmd_resolve(&args),
        "check" => cmd_check(&args),
        "legacy" => cmd_legacy(&args),
        _ => {
            eprintln!("Unknown command: {}", command);
            std::process::exit(1);
        }
    }
}

fn wants_json(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}

fn print_cameras(cameras: &[Camera], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cameras)?);
    } else if cameras.is_empty() {
        println!("No cameras");
    } else {
        for (index, camera) in cameras.iter().enumerate() {
            println!("{}: {}", index, camera);
        }
    }
    Ok(())
}

fn cmd_resolve(args: &[String]) -> Result<()> {
    // resolve [--metadata <file.json>] [--config <file.toml>] [--json]
    let mut metadata_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--metadata" => {
                i += 1;
                let path = args.get(i).context("--metadata needs a path")?;
                metadata_path = Some(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => {}
            other => bail!("Unexpected argument: {}", other),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => ResolverConfig::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ResolverConfig::load_or_default(),
    };

    let resolver = match metadata_path {
        Some(path) => {
            let metadata = FileMetadata::load(&path)
                .with_context(|| format!("loading metadata {}", path.display()))?;
            PersonalityResolver::with_directory(metadata, config)
        }
        None => PersonalityResolver::with_directory(EnvMetadata::new(), config),
    };

    let personality = global_personality(&resolver);
    if wants_json(args) {
        println!("{}", serde_json::to_string_pretty(&*personality)?);
    } else {
        println!("Source: {}", personality.source());
        print_cameras(personality.cameras(), false)?;
    }
    Ok(())
}

fn cmd_check(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        eprintln!("Usage: personality-cli check <file.json> [--json]");
        std::process::exit(1);
    }
    let path = &args[2];
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let metadata =
        StaticMetadata::new().with(metadata::keys::DEVICE_PERSONALITY_DEFINITION, text);
    let resolver = PersonalityResolver::with_directory(metadata, ResolverConfig::default());
    let cameras = resolver
        .resolve_source(&PersonalitySource::InlineDefinition)
        .with_context(|| format!("rejected {}", path))?;
    print_cameras(&cameras, wants_json(args))
}

fn cmd_legacy(args: &[String]) -> Result<()> {
    if args.len() < 4 {
        eprintln!("Usage: personality-cli legacy <front|back> <hal,width,height,style> [--json]");
        std::process::exit(1);
    }
    let orientation: Orientation = args[2]
        .parse()
        .with_context(|| format!("invalid orientation {:?}", args[2]))?;
    let camera = parse_legacy_camera(&args[3], orientation)
        .with_context(|| format!("rejected legacy setting {:?}", args[3]))?;
    print_cameras(std::slice::from_ref(&camera), wants_json(args))
}
