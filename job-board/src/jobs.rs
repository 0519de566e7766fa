use crate::format::DateFormatter;
use crate::models::{JobPage, RawJob};
use crate::{Error, Result};
use persistence::{Count, Filter, Order, RowSource, Select};

pub const JOBS_TABLE: &str = "jobs";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SIZE: u32 = 12;

/// Columns matched by a free-text search
const SEARCH_COLUMNS: [&str; 3] = ["title", "company", "description"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// 1-indexed
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
    /// Accepted but not used for filtering yet
    pub company_name: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            search: None,
            company_name: None,
        }
    }
}

/// Zero-based row offsets of a page, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

impl PageRange {
    pub fn new(page: u32, size: u32) -> Self {
        let start = u64::from(page).saturating_sub(1) * u64::from(size);
        let end = (start + u64::from(size)).saturating_sub(1);
        Self { start, end }
    }
}

pub fn total_pages(total_count: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(size))
}

/// Backslash-escapes the LIKE wildcards so the term matches literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn search_filters(term: &str) -> Vec<Filter> {
    let term = escape_like(term);
    SEARCH_COLUMNS
        .iter()
        .map(|column| Filter::ilike(*column, format!("*{}*", term)))
        .collect()
}

pub fn build_select(params: &PageParams) -> Select {
    let range = PageRange::new(params.page, params.size);
    let mut select = Select::new(JOBS_TABLE).count(Count::Exact);
    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        select = select.or(search_filters(search));
    }
    select
        .range(range.start, range.end)
        .order("created_at", Order::Descending)
}

/// Read side of the job board: pages through postings, newest first
#[derive(Debug, Clone)]
pub struct JobBoard<S> {
    source: S,
    formatter: DateFormatter,
}

impl<S: RowSource> JobBoard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            formatter: DateFormatter::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: DateFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub async fn get_jobs(&self, params: PageParams) -> Result<JobPage> {
        if params.page == 0 {
            return Err(Error::InvalidParams("page starts at 1"));
        }
        if params.size == 0 {
            return Err(Error::InvalidParams("size must be at least 1"));
        }
        let select = build_select(&params);
        let rows = match self.source.fetch(&select).await {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Supabase query error: {}", e);
                return Err(Error::FetchJobs);
            }
        };

        let raw_jobs = rows
            .data
            .unwrap_or_default()
            .into_iter()
            .map(serde_json::from_value::<RawJob>)
            .collect::<std::result::Result<Vec<_>, _>>();
        let raw_jobs = match raw_jobs {
            Ok(raw_jobs) => raw_jobs,
            Err(e) => {
                log::error!("Job row is not an object: {}", e);
                return Err(Error::FetchJobs);
            }
        };
        let jobs = raw_jobs
            .into_iter()
            .map(|raw| raw.into_job(&self.formatter))
            .collect::<Vec<_>>();

        let total_count = rows.count.unwrap_or(0);
        log::debug!(
            "page {} of jobs: {} rows, {} total",
            params.page,
            jobs.len(),
            total_count
        );
        Ok(JobPage {
            jobs,
            total_count,
            total_pages: total_pages(total_count, params.size),
            current_page: params.page,
        })
    }
}
