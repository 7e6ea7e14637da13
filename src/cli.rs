use clap::{Args, Parser, Subcommand, ValueEnum};

/// Address used when none is given on the command line
pub const DEFAULT_ADDRESS: &str = "file:///report.html";

#[derive(Parser)]
#[command(name = "flowrep")]
#[command(
    author,
    version,
    about = "Render and inspect multi-step user flow performance reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the report view for an address
    Render {
        #[clap(flatten)]
        input: InputArgs,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write the rendered report to this file instead of stdout
        #[clap(short, long)]
        output: Option<String>,
    },

    /// List sidebar links and mark the current one
    Links {
        #[clap(flatten)]
        input: InputArgs,
    },

    /// Print which step an address selects
    Resolve {
        #[clap(flatten)]
        input: InputArgs,
    },
}

impl Commands {
    pub fn input(&self) -> &InputArgs {
        match self {
            Self::Render { input, .. } | Self::Links { input } | Self::Resolve { input } => input,
        }
    }
}

/// Options shared by every command
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Flow result JSON file
    #[clap(long)]
    pub flow: String,

    /// Document address the report is viewed at
    #[clap(short, long, default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Configuration file path (defaults to flow-report.toml when present)
    #[clap(short, long)]
    pub config: Option<String>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Self-contained HTML page
    Html,

    /// Serialized view model
    Json,

    /// Terminal tables
    Table,
}
