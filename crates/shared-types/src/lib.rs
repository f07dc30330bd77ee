pub mod config;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod search;

pub use config::*;
pub use error::*;
pub use filter::*;
pub use hierarchy::*;
pub use search::*;
