use crate::core::extract::extract_embedded_jobs;
use crate::core::filter::filter_jobs;
use crate::core::report::render_report;
use crate::core::{ConfigProvider, JobRecord, JobSummary, Pipeline};
use crate::utils::error::{Result, SearchError};
use reqwest::Client;

/// 職缺搜尋頁的固定查詢參數
pub const SEARCH_PARAMS: [(&str, &str); 5] = [
    ("search", ""),
    ("remote", "false"),
    ("ts", "Product Support"),
    ("regions", "Asia Pacific"),
    ("office_locations", ""),
];

pub struct CareersPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> CareersPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// 抓取職缺頁面並回傳解碼後的 HTML
    async fn fetch_page(&self) -> Result<String> {
        tracing::debug!("📡 Requesting careers page: {}", self.config.endpoint());

        let response = self
            .client
            .get(self.config.endpoint())
            .header(reqwest::header::USER_AGENT, self.config.user_agent())
            .query(&SEARCH_PARAMS)
            .send()
            .await?;

        tracing::debug!("📡 Careers page response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SearchError::HttpStatusError {
                status: response.status(),
            });
        }

        // gzip 由 reqwest 透明解壓；無法解碼的位元組直接忽略
        let body = response.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for CareersPipeline<C> {
    async fn extract(&self) -> Result<Vec<JobRecord>> {
        let html = self.fetch_page().await?;
        tracing::debug!("📡 Fetched {} bytes of HTML", html.len());

        // 頁面格式變動與零筆職缺同樣以空清單處理
        let records = match extract_embedded_jobs(&html) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("⚠️ Failed to extract embedded job data: {}", e);
                Vec::new()
            }
        };

        Ok(records)
    }

    async fn transform(&self, data: Vec<JobRecord>) -> Result<Vec<JobSummary>> {
        Ok(filter_jobs(&data))
    }

    async fn load(&self, jobs: Vec<JobSummary>) -> Result<String> {
        Ok(render_report(&jobs))
    }
}
