use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use miette::IntoDiagnostic;
use scaffolder::logging::LogConfig;
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .help("Directory the skeleton is created in")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the skeleton as a tree without touching the disk")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    LogConfig::from_verbosity(matches.get_flag("verbose"))
        .init()
        .into_diagnostic()?;

    run(&matches)
}

fn run(matches: &ArgMatches) -> miette::Result<()> {
    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    if matches.get_flag("dry-run") {
        scaffolder::api::preview(&root)?;
    } else {
        scaffolder::api::scaffold(&root)?;
    }

    Ok(())
}
