use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Veeva 職缺搜尋頁
pub const CAREERS_ENDPOINT: &str = "https://careers.veeva.com/job-search-results/";

/// 行動版瀏覽器識別，與原始應用送出的字串一致
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; SM-G975F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Mobile Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "veeva-jobs")]
#[command(about = "Searches Veeva careers for Asia Pacific Product Support jobs")]
pub struct CliConfig {
    #[arg(long, default_value = CAREERS_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn user_agent(&self) -> &str {
        MOBILE_USER_AGENT
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}
