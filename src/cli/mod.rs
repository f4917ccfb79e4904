use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "hplrv",
    about = "Dashboard client for HPL runtime monitors",
    version,
    author,
    long_about = None
)]
pub struct HplrvCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the dashboard server, overrides the configuration
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight HPL property text
    Highlight {
        /// Property to highlight
        property: Option<String>,

        /// File with one property per line ('#' starts a comment line)
        #[arg(short, long, conflicts_with = "property")]
        file: Option<PathBuf>,

        /// Output format (ansi, html, plain)
        #[arg(long, default_value = "ansi")]
        format: String,
    },

    /// Ask the dashboard server to connect to a live monitoring server
    Connect {
        /// Host of the live monitoring server
        #[arg(long)]
        host: Option<String>,

        /// Port of the live monitoring server
        #[arg(short, long)]
        port: Option<u16>,

        /// Prompt for host and port
        #[arg(short, long, default_value = "false")]
        interactive: bool,
    },

    /// Follow live monitor updates
    Watch {
        /// Connect to a live monitoring server (HOST:PORT) before watching
        #[arg(long)]
        connect: Option<String>,

        /// Print the witness of monitors that have one
        #[arg(short, long, default_value = "false")]
        witness: bool,

        /// Output format for properties (ansi, html, plain)
        #[arg(long, default_value = "ansi")]
        format: String,
    },
}
