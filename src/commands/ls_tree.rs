use crate::utils::{GIT_DIR, ObjectId, ObjectStore, Result, read_tree};
use clap::{Arg, ArgAction, Command};
use std::env;

pub fn get_ls_tree_command() -> Command {
    Command::new("ls-tree")
        .about("List the entries of a tree object")
        .arg(
            Arg::new("name-only")
                .long("name-only")
                .action(ArgAction::SetTrue)
                .required(true)
                .help("Print only entry names"),
        )
        .arg(
            Arg::new("tree")
                .required(true)
                .value_name("TREE")
                .help("Hex digest of the tree to list"),
        )
}

pub fn ls_tree(tree: &str) -> Result<()> {
    let id = ObjectId::from_hex(tree)?;
    let store = ObjectStore::open(&env::current_dir()?.join(GIT_DIR));

    let mut names: Vec<String> = read_tree(&store, &id)?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    names.sort();

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
