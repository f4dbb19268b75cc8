pub mod cli;
pub mod commands;
pub mod utils;

pub use cli::cli;
