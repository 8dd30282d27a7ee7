// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod generate;
pub mod output;

pub use args::{Args, AuxCommand, QueryArgs};
pub use commands::execute_command;
pub use generate::{build_cli, gen_command};
pub use output::ConsoleWriter;
