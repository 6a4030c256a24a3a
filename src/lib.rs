pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::SearchEngine, pipeline::CareersPipeline};
pub use utils::error::{Result, SearchError};
