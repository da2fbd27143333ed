use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-toc")]
#[command(about = "Generates tables of contents for rendered HTML and markdown pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site directory holding the configuration file (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Insert tables of contents into a page or every page of a directory
    #[command(alias = "r")]
    Render {
        /// Page file, or directory of pages
        input: PathBuf,

        /// Output file or directory (a file prints to stdout when omitted,
        /// a directory defaults to ./_site)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Liquid template wrapping each page, receives `content` and `toc`
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },

    /// Print the table of contents of a page as a markdown list
    Toc {
        /// Page file
        input: PathBuf,

        /// Print the nested list as JSON instead
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the resolved table of contents options
    Config {
        /// Page whose front matter is layered over the site configuration
        #[arg(long, value_name = "FILE")]
        page: Option<PathBuf>,
    },
}
