use crate::domain::model::JobRecord;
use crate::utils::error::Result;
use regex::Regex;
use std::collections::HashMap;

/// 頁面腳本中職缺陣列的固定標記，陣列可跨多行
const ALL_JOBS_PATTERN: &str = r"(?s)let allJobs = (\[.*?\]);";

/// 從 HTML 中提取內嵌的職缺陣列
///
/// 找不到標記時回傳空清單；標記存在但 JSON 解析失敗時回傳錯誤，
/// 由呼叫端決定如何處理（管道一律視為零筆職缺）。
pub fn extract_embedded_jobs(html: &str) -> Result<Vec<JobRecord>> {
    let re = Regex::new(ALL_JOBS_PATTERN).unwrap();

    let caps = match re.captures(html) {
        Some(caps) => caps,
        None => return Ok(Vec::new()),
    };

    let json_data: serde_json::Value = serde_json::from_str(&caps[1])?;

    let mut records = Vec::new();
    if let serde_json::Value::Array(items) = json_data {
        for item in items {
            if let serde_json::Value::Object(obj) = item {
                let mut data = HashMap::new();
                for (key, value) in obj {
                    data.insert(key, value);
                }
                records.push(JobRecord { data });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_returns_all_parsed_records_unfiltered() {
        let html = r#"<html><body><script>
            let allJobs = [
                {"job_title": "QA Engineer", "team": "product support", "region": "asia pacific"},
                {"job_title": "Sales Rep", "team": "sales", "region": "europe"}
            ];
        </script></body></html>"#;

        let records = extract_embedded_jobs(html).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field_or("job_title", ""), "QA Engineer");
        assert_eq!(records[1].field_or("team", ""), "sales");
    }

    #[test]
    fn test_extract_array_spanning_multiple_lines() {
        let html = "let allJobs = [\n{\"job_title\":\n\"QA Engineer\"}\n];";

        let records = extract_embedded_jobs(html).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field_or("job_title", ""), "QA Engineer");
    }

    #[test]
    fn test_extract_without_marker_returns_empty() {
        let html = "<html><body><p>No script here</p></body></html>";

        let records = extract_embedded_jobs(html).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_similar_but_different_variable_returns_empty() {
        let html = "let otherJobs = [{\"job_title\": \"QA Engineer\"}];";

        let records = extract_embedded_jobs(html).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_invalid_json_is_an_error() {
        let html = "let allJobs = [this is not json];";

        let result = extract_embedded_jobs(html);

        assert!(result.is_err());
    }

    #[test]
    fn test_extract_uses_first_occurrence() {
        let html = concat!(
            "let allJobs = [{\"job_title\": \"First\"}];\n",
            "let allJobs = [{\"job_title\": \"Second\"}];"
        );

        let records = extract_embedded_jobs(html).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field_or("job_title", ""), "First");
    }

    #[test]
    fn test_extract_skips_non_object_entries() {
        let html = r#"let allJobs = [{"job_title": "QA Engineer"}, "stray", 42];"#;

        let records = extract_embedded_jobs(html).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_extract_empty_array() {
        let html = "let allJobs = [];";

        let records = extract_embedded_jobs(html).unwrap();

        assert!(records.is_empty());
    }
}
