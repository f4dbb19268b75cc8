pub mod cat_file;
pub mod clone;
pub mod commit_tree;
pub mod hash_object;
pub mod init;
pub mod ls_tree;
pub mod write_tree;

pub use cat_file::*;
pub use clone::*;
pub use commit_tree::*;
pub use hash_object::*;
pub use init::*;
pub use ls_tree::*;
pub use write_tree::*;
