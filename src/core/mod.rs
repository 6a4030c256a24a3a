pub mod engine;
pub mod extract;
pub mod filter;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{JobRecord, JobSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
