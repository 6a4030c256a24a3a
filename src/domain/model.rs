use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 頁面內嵌 JSON 陣列中的一筆原始職缺，欄位不固定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl JobRecord {
    /// 以字串讀取欄位，缺少或非字串時回傳預設值
    pub fn field_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.data
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// 過濾後的職缺投影，欄位缺少時以 "N/A" 補上
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_title: String,
    pub team: String,
    pub location: String,
    pub region: String,
    /// 原始值不做正規化，"1" 代表可遠端
    pub remote: String,
}

impl JobSummary {
    pub fn is_remote(&self) -> bool {
        self.remote == "1"
    }

    /// location 的城市部分（逗號前），分組顯示用
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }
}
