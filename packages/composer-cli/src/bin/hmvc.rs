/**
 * HMVC Composer CLI - hmvc
 *
 * Compose or check a page manifest
 */
use clap::{Arg, ArgAction, ArgMatches, Command};
use hmvc_composer_cli::config::ComposerConfig;
use hmvc_composer_cli::logging;
use hmvc_composer_cli::manifest::ManifestElement;
use hmvc_composer_cli::perform_compose::{perform_check, perform_compose};
use std::path::Path;
use std::process;

fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .required(true)
        .help("Path to the page manifest (JSON)")
}

fn main() {
    let matches = Command::new("hmvc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("HMVC page composer")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to hmvc.json"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log every compiled element"),
        )
        .subcommand(
            Command::new("compose")
                .about("Compose and render a page")
                .arg(manifest_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate naming and views without rendering")
                .arg(manifest_arg()),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = ComposerConfig::discover(
        matches.get_one::<String>("config").map(Path::new),
        &cwd,
    )?;

    let output = match matches.subcommand() {
        Some(("compose", sub)) => {
            let page = load_manifest(sub)?;
            serde_json::to_string_pretty(&perform_compose(&config, page)?)?
        }
        Some(("check", sub)) => {
            let page = load_manifest(sub)?;
            serde_json::to_string_pretty(&perform_check(&config, page)?)?
        }
        _ => anyhow::bail!("unknown command"),
    };
    println!("{}", output);
    Ok(())
}

fn load_manifest(matches: &ArgMatches) -> anyhow::Result<ManifestElement> {
    let path = matches
        .get_one::<String>("manifest")
        .ok_or_else(|| anyhow::anyhow!("missing manifest path"))?;
    ManifestElement::load(Path::new(path))
}
