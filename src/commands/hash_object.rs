use crate::utils::{GIT_DIR, ObjectId, ObjectKind, ObjectStore, Result, encode_object};
use clap::{Arg, ArgAction, Command};
use std::{env, fs};

pub fn get_hash_object_command() -> Command {
    Command::new("hash-object")
        .about("Compute a file's blob digest and optionally store it")
        .arg(
            Arg::new("write")
                .short('w')
                .action(ArgAction::SetTrue)
                .help("Write the blob into the object store"),
        )
        .arg(
            Arg::new("file")
                .required(true)
                .value_name("FILE")
                .help("File whose contents to hash"),
        )
}

pub fn hash_object(file: &str, write: bool) -> Result<()> {
    let content = fs::read(file)?;
    let encoded = encode_object(ObjectKind::Blob, &content);
    let id = ObjectId::hash(&encoded);

    if write {
        let store = ObjectStore::open(&env::current_dir()?.join(GIT_DIR));
        store.put(&id, &encoded)?;
    }

    println!("{}", id);
    Ok(())
}
