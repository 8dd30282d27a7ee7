use crate::core::render::Format;
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Global command line arguments for introspect-cli.
///
/// Collection subcommands are generated from their descriptors, see
/// [`crate::cli::generate`].
#[derive(Parser, Debug, Default)]
#[command(
    name = "introspect-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "CLI on introspect pages of vrouter agents and controllers",
    long_about = "Fetch introspect XML pages of vrouter agents and controllers, then search and format routes, interfaces, peers and other collections from a terminal."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Host file to do DNS resolution
    #[arg(long, global = true, value_name = "FILE")]
    pub hosts: Option<String>,
}

/// Flags shared by every collection subcommand
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Long format
    #[arg(short, long, conflicts_with_all = ["xml", "json"])]
    pub long: bool,

    /// XML output format
    #[arg(short, long, conflicts_with = "json")]
    pub xml: bool,

    /// JSON output format
    #[arg(short, long)]
    pub json: bool,

    /// Load file instead of URL (for debugging)
    #[arg(long)]
    pub from_file: bool,

    /// Just show the used URL
    #[arg(short, long)]
    pub url: bool,

    /// Fuzzy search by the primary field
    #[arg(short, long, value_name = "PATTERN", conflicts_with = "strict_search")]
    pub search: Option<String>,

    /// Strict search by the primary field
    #[arg(short = 'S', long, value_name = "PATTERN")]
    pub strict_search: Option<String>,

    /// Page arguments, or the file path with --from-file
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl QueryArgs {
    /// Requested output format; xml wins over json, json over long
    pub fn format(&self) -> Format {
        if self.xml {
            Format::Xml
        } else if self.json {
            Format::Json
        } else if self.long {
            Format::Long
        } else {
            Format::Short
        }
    }
}

/// Subcommands that are not bound to a collection
#[derive(Subcommand, Debug)]
pub enum AuxCommand {
    /// List routes with multiple nexthops
    AgentMultiple(MultipleArgs),
    /// Configuration management commands
    Config(ConfigArgs),
    /// List host names known from the hosts file
    Hosts,
    /// Display version information
    Version,
}

/// Arguments of `agent-multiple`
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct MultipleArgs {
    /// Only print the number of routes
    #[arg(long)]
    pub count: bool,

    /// Load file instead of URL (for debugging)
    #[arg(long)]
    pub from_file: bool,

    /// Just show the used URL
    #[arg(short, long)]
    pub url: bool,

    /// vrouter-fqdn vrf-name, or the file path with --from-file
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration
    Validate {
        /// Configuration file path
        file: Option<String>,
    },
    /// Create default configuration
    Init {
        /// Directory receiving the project configuration
        #[arg(short, long)]
        output: Option<String>,
        /// Global configuration
        #[arg(short, long)]
        global: bool,
    },
}
