use blocks::cli::{Cli, Commands};
use blocks::config::Manifest;
use blocks::logging::{init_logging, LoggingConfig};
use blocks::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    let printer = Printer::new();

    match cli.command {
        Commands::Run(args) => blocks::cli::run::run(args)?,
        Commands::Build(args) => {
            let manifest = Manifest::discover(cli.config.as_deref())?;
            blocks::cli::build::run(args, &manifest, &printer)?
        }
        Commands::Check(args) => {
            let manifest = Manifest::discover(cli.config.as_deref())?;
            blocks::cli::check::run(args, &manifest, &printer)?
        }
        Commands::Colours(args) => blocks::cli::colours::run(args, &printer)?,
        Commands::Init(args) => blocks::cli::init::run(args, &printer)?,
        Commands::Watch(args) => blocks::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => blocks::cli::completions::run(args)?,
    }

    Ok(())
}
