use crate::utils::{self, GIT_DIR, ObjectStore, Result};
use clap::Command;
use std::env;

pub fn get_write_tree_command() -> Command {
    Command::new("write-tree").about("Snapshot the current directory as a tree object")
}

pub fn write_tree() -> Result<()> {
    let current_dir = env::current_dir()?;
    let store = ObjectStore::open(&current_dir.join(GIT_DIR));

    let tree_id = utils::write_tree(&store, &current_dir)?;
    println!("{}", tree_id);

    Ok(())
}
