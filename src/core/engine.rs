use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract -> transform -> load 並回傳報告
    pub async fn run(&self) -> Result<String> {
        tracing::info!("🔍 Starting job search...");

        let raw_records = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} job records", raw_records.len());

        let jobs = self.pipeline.transform(raw_records).await?;
        tracing::info!("🔄 {} jobs after filtering", jobs.len());

        let report = self.pipeline.load(jobs).await?;
        tracing::info!("✅ Job search completed");

        Ok(report)
    }
}
