pub mod args;
pub mod config;
pub mod errors;
pub mod generator;
pub mod utils;

pub use args::*;
pub use config::*;
pub use errors::*;
pub use generator::*;
pub use utils::*;
