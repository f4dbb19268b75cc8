use crate::utils::{GIT_DIR, ObjectId, ObjectStore, Result, decode_object};
use clap::{Arg, ArgAction, Command};
use std::{
    env,
    io::{self, Write},
};

pub fn get_cat_file_command() -> Command {
    Command::new("cat-file")
        .about("Print the contents of a stored object")
        .arg(
            Arg::new("pretty")
                .short('p')
                .action(ArgAction::SetTrue)
                .required(true)
                .help("Pretty-print the object's payload"),
        )
        .arg(
            Arg::new("object")
                .required(true)
                .value_name("OBJECT")
                .help("Hex digest of the object to print"),
        )
}

pub fn cat_file(object: &str) -> Result<()> {
    let id = ObjectId::from_hex(object)?;
    let store = ObjectStore::open(&env::current_dir()?.join(GIT_DIR));

    let encoded = store.get(&id)?;
    let (_kind, payload) = decode_object(&encoded)?;

    // Payloads are arbitrary bytes, so skip the String detour.
    io::stdout().write_all(payload)?;
    Ok(())
}
