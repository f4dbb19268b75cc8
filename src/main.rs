use mingit::cli;
use mingit::commands::{cat_file, clone, commit_tree, hash_object, init, ls_tree, write_tree};
use mingit::utils::Result;

fn main() {
    let matches = cli().get_matches();

    let result: Result<()> = match matches.subcommand() {
        Some(("init", _sub_matches)) => init(),
        Some(("cat-file", sub_matches)) => {
            let object = sub_matches.get_one::<String>("object").unwrap();
            cat_file(object)
        }
        Some(("hash-object", sub_matches)) => {
            let file = sub_matches.get_one::<String>("file").unwrap();
            let write = sub_matches.get_flag("write");
            hash_object(file, write)
        }
        Some(("ls-tree", sub_matches)) => {
            let tree = sub_matches.get_one::<String>("tree").unwrap();
            ls_tree(tree)
        }
        Some(("write-tree", _sub_matches)) => write_tree(),
        Some(("commit-tree", sub_matches)) => {
            let tree = sub_matches.get_one::<String>("tree").unwrap();
            let parent = sub_matches.get_one::<String>("parent");
            let message = sub_matches.get_one::<String>("message").unwrap();
            commit_tree(tree, parent, message)
        }
        Some(("clone", sub_matches)) => {
            let remote = sub_matches.get_one::<String>("REMOTE").unwrap();
            let directory = sub_matches.get_one::<String>("DIRECTORY").unwrap();
            clone(remote, directory)
        }
        _ => unreachable!("Unknown subcommand!"),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
