pub mod format;
pub mod jobs;
pub mod keys;
pub mod models;

use thiserror::Error;

pub use format::DateFormatter;
pub use jobs::{JobBoard, PageParams, PageRange};
pub use models::{Job, JobPage, JobType, RawJob};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Deliberately carries no detail, the cause is logged where it happens
    #[error("Failed to fetch jobs")]
    FetchJobs,
    #[error("Invalid page parameters: '{0}'")]
    InvalidParams(&'static str),
}
