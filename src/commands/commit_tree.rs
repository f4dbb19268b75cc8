use crate::utils::{self, CommitEntry, GIT_DIR, ObjectId, ObjectStore, Result};
use chrono::Local;
use clap::{Arg, Command};
use std::env;

const AUTHOR: &str = "Author Name <author@example.com>";

pub fn get_commit_tree_command() -> Command {
    Command::new("commit-tree")
        .about("Create a commit object from a tree digest")
        .arg(
            Arg::new("tree")
                .required(true)
                .value_name("TREE")
                .help("Hex digest of the root tree"),
        )
        .arg(
            Arg::new("parent")
                .short('p')
                .value_name("PARENT")
                .help("Hex digest of the parent commit"),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .required(true)
                .value_name("MESSAGE")
                .help("Commit message"),
        )
}

pub fn commit_tree(tree: &str, parent: Option<&String>, message: &str) -> Result<()> {
    let store = ObjectStore::open(&env::current_dir()?.join(GIT_DIR));

    let parent = match parent {
        Some(hex) => Some(ObjectId::from_hex(hex)?),
        None => None,
    };

    let now = Local::now();
    let offset = now.offset().local_minus_utc();
    let hours = offset / 3600;
    let minutes = (offset % 3600) / 60;
    let timezone = format!("{:+03}{:02}", hours, minutes.abs());

    let entry = CommitEntry {
        tree: ObjectId::from_hex(tree)?,
        parent,
        author: AUTHOR.to_string(),
        timestamp: now.timestamp(),
        timezone,
        message: message.to_string(),
    };

    let commit_id = utils::commit_tree(&store, &entry)?;
    println!("{}", commit_id);

    Ok(())
}
