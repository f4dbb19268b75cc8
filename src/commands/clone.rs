use crate::utils::Result;
use clap::{Command, arg};
use git2::Repository;

pub fn get_clone_command() -> Command {
    Command::new("clone")
        .about("Clone a remote repository")
        .arg(arg!(<REMOTE> "The remote to clone"))
        .arg(arg!(<DIRECTORY> "Directory to clone into"))
        .arg_required_else_help(true)
}

// Transport and checkout are delegated entirely to libgit2; the resulting
// object store uses the same on-disk layout this crate writes.
pub fn clone(remote: &str, directory: &str) -> Result<()> {
    Repository::clone(remote, directory)?;
    println!("Cloned into '{}'", directory);
    Ok(())
}
