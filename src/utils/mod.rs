pub mod commit;
pub mod digest;
pub mod error;
pub mod object;
pub mod store;
pub mod tree;

pub use commit::*;
pub use digest::*;
pub use error::*;
pub use object::*;
pub use store::*;
pub use tree::*;
