pub mod config;
pub mod error;
pub mod options;
pub mod types;

pub use config::Config;
pub use error::CampusqError;
pub use options::{extract_answer, parse_options};
pub use types::*;
