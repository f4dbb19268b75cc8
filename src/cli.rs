use crate::commands::{
    get_cat_file_command, get_clone_command, get_commit_tree_command, get_hash_object_command,
    get_init_command, get_ls_tree_command, get_write_tree_command,
};
use clap::Command;

pub fn cli() -> Command {
    Command::new("mingit")
        .about("A minimal content-addressable object store, git style")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .allow_external_subcommands(false)
        .subcommand(get_init_command())
        .subcommand(get_cat_file_command())
        .subcommand(get_hash_object_command())
        .subcommand(get_ls_tree_command())
        .subcommand(get_write_tree_command())
        .subcommand(get_commit_tree_command())
        .subcommand(get_clone_command())
}
