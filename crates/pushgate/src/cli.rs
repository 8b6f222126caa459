use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pushgate", version, about = "Pre-push build and lint gate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Color mode
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pre-push checks against the current repository
    Run {
        /// Python interpreter used for the distribution builds
        #[arg(long, default_value = "python")]
        python: String,

        /// Lint executable to look up and run
        #[arg(long, default_value = "flake8")]
        linter: String,

        /// Lint configuration file, relative to the repository root
        #[arg(long, default_value = "setup.cfg")]
        lint_config: PathBuf,
    },

    /// Install the pre-push git hook
    Install {
        /// Overwrite an existing pre-push hook without asking
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
