// Subcommand generation from collection descriptors
use crate::cli::args::{Args, AuxCommand, QueryArgs};
use crate::core::catalog::{collection_commands, CollectionCommand};
use clap::{Args as ClapArgs, Command, CommandFactory, Subcommand};

/// Bind a collection descriptor to a subcommand carrying the standard flags
pub fn gen_command(command: &CollectionCommand) -> Command {
    let desc = (command.desc)();
    let page_args: Vec<String> = desc.page_args.iter().map(|a| format!("<{}>", a)).collect();

    let cmd = Command::new(command.name)
        .about(command.about)
        .override_usage(format!(
            "introspect-cli {} [OPTIONS] {}",
            command.name,
            page_args.join(" ")
        ));

    QueryArgs::augment_args(cmd)
        .mut_arg("search", |a| {
            a.help(format!("Fuzzy search by {}", desc.primary_field))
        })
        .mut_arg("strict_search", |a| {
            a.help(format!("Strict search by {}", desc.primary_field))
        })
        .mut_arg("args", |a| {
            a.help(format!(
                "{}, or the file path with --from-file",
                desc.page_args.join(" ")
            ))
        })
}

/// The complete command line interface
pub fn build_cli() -> Command {
    let cmd = Args::command()
        .subcommands(collection_commands().iter().map(gen_command))
        .subcommand_required(true)
        .arg_required_else_help(true);

    AuxCommand::augment_subcommands(cmd)
}
