mod cli;
mod commands;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, ColorMode, Commands};
use output::{OutputMode, Reporter};

fn main() {
    let cli = Cli::parse();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };

    match cli.color {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Auto => {}
    }

    let mut reporter = Reporter::new(mode);

    let success = match cli.command {
        Commands::Run {
            python,
            linter,
            lint_config,
        } => commands::run::run_checks(python, linter, lint_config, &mut reporter),
        Commands::Install { force } => commands::install::run_install(force, &mut reporter),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "pushgate",
                &mut std::io::stdout(),
            );
            true
        }
    };

    reporter.finish();

    if !success {
        std::process::exit(1);
    }
}
