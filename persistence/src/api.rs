use crate::query::Select;
use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;

/// Rows returned by a select, together with the total count when one was requested.
/// Both halves may be absent, callers decide on defaults
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rows {
    pub data: Option<Vec<Value>>,
    pub count: Option<u64>,
}

/// Trait for anything able to execute a select against a table
#[async_trait]
pub trait RowSource {
    type E: Error + Send + Sync;
    async fn fetch(&self, select: &Select) -> Result<Rows, Self::E>;
}
