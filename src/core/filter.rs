use crate::domain::model::{JobRecord, JobSummary};

/// 兩個固定的過濾條件，比對時不分大小寫
pub const TARGET_TEAM: &str = "product support";
pub const TARGET_REGION: &str = "asia pacific";

const MISSING_FIELD: &str = "N/A";

/// 過濾出 Asia Pacific 地區的 Product Support 職缺並投影成摘要
///
/// 欄位缺少時視為空字串，空字串不會命中任一條件，所以缺欄位等同不符合。
pub fn filter_jobs(records: &[JobRecord]) -> Vec<JobSummary> {
    let mut jobs = Vec::new();

    for record in records {
        let team = record.field_or("team", "").to_lowercase();
        let region = record.field_or("region", "").to_lowercase();

        if team != TARGET_TEAM || region != TARGET_REGION {
            continue;
        }

        jobs.push(JobSummary {
            job_title: record.field_or("job_title", MISSING_FIELD).to_string(),
            team: record.field_or("team", MISSING_FIELD).to_string(),
            location: format!(
                "{}, {}",
                record.field_or("city", MISSING_FIELD),
                record.field_or("country", MISSING_FIELD)
            ),
            region: record.field_or("region", MISSING_FIELD).to_string(),
            remote: record.field_or("remote", MISSING_FIELD).to_string(),
        });
    }

    jobs
}
