use job_board::{DateFormatter, JobBoard, JobPage, PageParams};
use persistence::StoreConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Store error: '{0}'")]
    Store(#[from] persistence::Error),
    #[error("{0}")]
    Jobs(#[from] job_board::Error),
    #[error("Failed to serialize page: '{0}'")]
    Json(#[from] serde_json::Error),
    #[error("UTC offset out of range: '{0}' hours")]
    Offset(i32),
}

impl Error {
    /// The service has already logged the cause of a failed fetch
    pub fn already_logged(&self) -> bool {
        matches!(self, Error::Jobs(job_board::Error::FetchJobs))
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = job_board::jobs::DEFAULT_PAGE)]
    pub page: u32,
    /// Postings per page
    #[arg(long, default_value_t = job_board::jobs::DEFAULT_SIZE)]
    pub size: u32,
    /// Matched against title, company and description
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
    /// Offset used when turning timestamps into calendar dates
    #[arg(long, env = "JOBS_UTC_OFFSET_HOURS", default_value_t = 9, allow_hyphen_values = true)]
    pub utc_offset_hours: i32,
}

impl From<&ListArgs> for PageParams {
    fn from(args: &ListArgs) -> Self {
        PageParams {
            page: args.page,
            size: args.size,
            search: args.search.clone(),
            company_name: args.company_name.clone(),
        }
    }
}

pub async fn fetch_page(config: &StoreConfig, args: &ListArgs) -> Result<JobPage, Error> {
    let formatter = DateFormatter::from_utc_offset_hours(args.utc_offset_hours)
        .ok_or(Error::Offset(args.utc_offset_hours))?;
    let client = persistence::connect(config)?;
    log::info!("Listing jobs from {}", client.rest_url());
    let board = JobBoard::new(client).with_formatter(formatter);
    Ok(board.get_jobs(PageParams::from(args)).await?)
}

pub async fn list(args: ListArgs) -> Result<(), Error> {
    let config = StoreConfig::from_env()?;
    let page = fetch_page(&config, &args).await?;
    log::info!(
        "Page {}/{}, {} jobs in total",
        page.current_page,
        page.total_pages,
        page.total_count
    );
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ListArgs,
    }

    #[test]
    fn test_defaults_match_service_defaults() {
        let harness = Harness::parse_from(["list"]);
        let params = PageParams::from(&harness.args);
        assert_eq!(params.page, 1);
        assert_eq!(params.size, 12);
        assert_eq!(params.search, None);
    }

    #[test]
    fn test_negative_offset_parses() {
        let harness = Harness::parse_from(["list", "--utc-offset-hours", "-5", "--search", "50% off"]);
        assert_eq!(harness.args.utc_offset_hours, -5);
        assert_eq!(harness.args.search.as_deref(), Some("50% off"));
    }

    #[tokio::test]
    async fn test_out_of_range_offset_is_rejected_before_connecting() {
        let harness = Harness::parse_from(["list", "--utc-offset-hours", "30"]);
        let config = StoreConfig::new("https://example.supabase.co", "anon-key");
        let result = fetch_page(&config, &harness.args).await;
        assert!(matches!(result, Err(Error::Offset(30))));
    }

    #[test]
    fn test_only_fetch_failures_count_as_logged() {
        assert!(Error::Jobs(job_board::Error::FetchJobs).already_logged());
        assert!(!Error::Jobs(job_board::Error::InvalidParams("page starts at 1")).already_logged());
        assert!(!Error::Offset(30).already_logged());
    }
}
