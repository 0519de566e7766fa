use crate::format::DateFormatter;
use crate::keys::camelize_keys;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum JobType {
    #[serde(rename = "정규직")]
    FullTime,
    #[serde(rename = "계약직")]
    Contract,
    #[serde(rename = "인턴")]
    Intern,
    /// Any label outside the known three, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl From<String> for JobType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "정규직" => JobType::FullTime,
            "계약직" => JobType::Contract,
            "인턴" => JobType::Intern,
            _ => JobType::Other(label),
        }
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.map(JobType::from))
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Some(flag),
        _ => None,
    })
}

/// A row of the `jobs` table, keys as stored.
/// Every column may be missing or null, only a non-object row fails to decode
#[derive(Deserialize, Debug, Clone)]
pub struct RawJob {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "job_type")]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_always: Option<bool>,
    #[serde(default, deserialize_with = "text")]
    pub url: Option<String>,
    /// Columns this crate does not know about, passed through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A job posting ready for display
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Value,
    /// formatted as e.g. `2024년 3월 5일`
    pub created_at: Option<String>,
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub job_type: Option<JobType>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_always: bool,
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawJob {
    pub fn into_job(self, formatter: &DateFormatter) -> Job {
        let format = |date: Option<String>| date.map(|date| formatter.format(&date));
        Job {
            id: self.id,
            created_at: format(self.created_at),
            company_name: self.company_name,
            position: self.position,
            job_type: self.job_type,
            image_url: self.image_url,
            title: self.title,
            description: self.description,
            experience: self.experience,
            start_date: format(self.start_date),
            end_date: format(self.end_date),
            is_always: self.is_always.unwrap_or(false),
            url: self.url,
            extra: camelize_keys(self.extra),
        }
    }
}

/// One page of job postings plus what a pager needs to render
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn raw_row() -> Value {
        json!({
            "id": "7f1c",
            "created_at": "2024-03-05T02:11:09.52+00:00",
            "company_name": "당근",
            "position": "Backend",
            "job_type": "정규직",
            "image_url": "https://cdn.example.com/logo.png",
            "title": "Rust 백엔드 개발자",
            "description": "결제 시스템 개발",
            "experience": "3년 이상",
            "start_date": "2024-03-05",
            "end_date": "2024-04-30",
            "is_always": true,
            "url": "https://example.com/apply",
            "view_count": 42
        })
    }

    #[test]
    fn test_raw_job_into_display_job() {
        let raw: RawJob = serde_json::from_value(raw_row()).expect("Row should decode");
        let job = raw.into_job(&DateFormatter::default());
        assert_eq!(job.created_at.as_deref(), Some("2024년 3월 5일"));
        assert_eq!(job.start_date.as_deref(), Some("2024년 3월 5일"));
        assert_eq!(job.end_date.as_deref(), Some("2024년 4월 30일"));
        assert!(job.is_always);
        assert_eq!(job.job_type, Some(JobType::FullTime));
        assert_eq!(job.id, "7f1c");
    }

    #[test]
    fn test_display_keys_map_one_to_one() {
        let raw: RawJob = serde_json::from_value(raw_row()).expect("Row should decode");
        let job = serde_json::to_value(raw.into_job(&DateFormatter::default())).unwrap();
        let mut keys = job.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "companyName",
                "createdAt",
                "description",
                "endDate",
                "experience",
                "id",
                "imageUrl",
                "isAlways",
                "jobType",
                "position",
                "startDate",
                "title",
                "url",
                "viewCount",
            ]
        );
        assert_eq!(job["jobType"], "정규직");
        assert_eq!(job["viewCount"], 42);
    }

    #[test]
    fn test_is_always_defaults_to_false() {
        let mut row = raw_row();
        row.as_object_mut().unwrap().remove("is_always");
        let raw: RawJob = serde_json::from_value(row).unwrap();
        assert!(!raw.into_job(&DateFormatter::default()).is_always);

        let mut row = raw_row();
        row["is_always"] = Value::Null;
        let raw: RawJob = serde_json::from_value(row).unwrap();
        assert!(!raw.into_job(&DateFormatter::default()).is_always);
    }

    #[test]
    fn test_missing_end_date_stays_empty() {
        let mut row = raw_row();
        row["end_date"] = Value::Null;
        let raw: RawJob = serde_json::from_value(row).unwrap();
        let job = raw.into_job(&DateFormatter::default());
        assert_eq!(job.end_date, None);
        assert_eq!(serde_json::to_value(&job).unwrap()["endDate"], Value::Null);
    }

    #[test]
    fn test_unknown_job_type_is_kept_verbatim() {
        let mut row = raw_row();
        row["job_type"] = json!("프리랜서");
        let raw: RawJob = serde_json::from_value(row).expect("Row should decode");
        let job = raw.into_job(&DateFormatter::default());
        assert_eq!(job.job_type, Some(JobType::Other("프리랜서".to_owned())));
        assert_eq!(serde_json::to_value(&job).unwrap()["jobType"], "프리랜서");
    }

    #[test]
    fn test_null_and_missing_columns_decode() {
        let mut row = raw_row();
        row["image_url"] = Value::Null;
        row["id"] = json!(17);
        row.as_object_mut().unwrap().remove("experience");
        let raw: RawJob = serde_json::from_value(row).expect("Row should decode");
        let job = serde_json::to_value(raw.into_job(&DateFormatter::default())).unwrap();
        assert_eq!(job["imageUrl"], Value::Null);
        assert_eq!(job["experience"], Value::Null);
        assert_eq!(job["id"], 17);
        assert_eq!(job["title"], "Rust 백엔드 개발자");
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        assert!(serde_json::from_value::<RawJob>(json!("not a row")).is_err());
    }

    #[test]
    fn test_page_envelope_keys() {
        let page = JobPage {
            jobs: vec![],
            total_count: 0,
            total_pages: 0,
            current_page: 1,
        };
        assert_eq!(
            serde_json::to_value(page).unwrap(),
            json!({ "jobs": [], "totalCount": 0, "totalPages": 0, "currentPage": 1 })
        );
    }
}
