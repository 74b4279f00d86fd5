use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skello-extract")]
#[command(about = "Extract revenue / labor-cost figures from Skello weekly report screenshots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract data from a folder of screenshots and save the raw reports as JSON
    Extract {
        /// Folder containing the Skello screenshots
        #[arg(required = true)]
        folder: PathBuf,

        /// Output JSON file (default: <folder>/reports.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a saved reports JSON as a table and export it as CSV
    Export {
        /// Input reports JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Output CSV file (default: rapport_skello_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract, display and export in one pass
    Run {
        /// Folder containing the Skello screenshots
        #[arg(required = true)]
        folder: PathBuf,

        /// Output CSV file (default: rapport_skello_<date>.csv in the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit the configuration
    Config {
        /// Set the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}
