use crate::domain::model::JobSummary;
use std::collections::BTreeMap;

const EMPTY_REPORT: &str = "No matching jobs found.";

/// 按城市分組，BTreeMap 讓城市依名稱排序
pub fn group_by_city(jobs: &[JobSummary]) -> BTreeMap<String, Vec<&JobSummary>> {
    let mut cities: BTreeMap<String, Vec<&JobSummary>> = BTreeMap::new();

    for job in jobs {
        let city = job.city();
        let key = if city.is_empty() { "Unknown" } else { city };
        cities.entry(key.to_string()).or_default().push(job);
    }

    cities
}

/// 將過濾後的職缺整理成按城市分組的文字報告
pub fn render_report(jobs: &[JobSummary]) -> String {
    if jobs.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut lines = Vec::new();

    for (city, city_jobs) in group_by_city(jobs) {
        lines.push(format!("🏙️ {} ({} jobs)", city, city_jobs.len()));

        for (i, job) in city_jobs.iter().enumerate() {
            lines.push(format!("Job {}:", i + 1));
            lines.push(format!("  Title: {}", job.job_title));
            lines.push(format!("  Team: {}", job.team));
            lines.push(format!("  Location: {}", job.location));
            lines.push(format!("  Region: {}", job.region));
            lines.push(format!(
                "  Remote: {}",
                if job.is_remote() { "yes" } else { "no" }
            ));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
