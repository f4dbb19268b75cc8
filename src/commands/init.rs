use crate::utils::{GIT_DIR, Result};
use clap::Command;
use std::{env, fs, path::PathBuf};

pub fn get_init_command() -> Command {
    Command::new("init").about("Initialize an empty repository")
}

pub fn init() -> Result<()> {
    let git_dir: PathBuf = env::current_dir()?.join(GIT_DIR);

    if git_dir.exists() {
        println!("Repository already initialized!");
        return Ok(());
    }

    // Create Required Directories
    fs::create_dir_all(git_dir.join("objects"))?;
    fs::create_dir_all(git_dir.join("refs/heads"))?;

    // Create Required Files
    fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n")?;

    println!("Initialized empty repository in {}", git_dir.display());

    Ok(())
}
