use crate::domain::model::{JobRecord, JobSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<JobRecord>>;
    async fn transform(&self, data: Vec<JobRecord>) -> Result<Vec<JobSummary>>;
    async fn load(&self, jobs: Vec<JobSummary>) -> Result<String>;
}
