use crate::api::{RowSource, Rows};
use crate::config::StoreConfig;
use crate::query::Select;
use crate::{ApiError, Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_RANGE};
use serde_json::Value;

/// Client for the REST interface of the hosted store.
/// Cheap to clone, the underlying connection pool is shared
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    rest_url: String,
}

/// Builds a client from the given config.
/// No request is sent, so a wrong key only shows up on the first query
pub fn connect(config: &StoreConfig) -> Result<Client> {
    let base = reqwest::Url::parse(&config.url).map_err(|e| Error::InvalidUrl {
        url: config.url.clone(),
        reason: e.to_string(),
    })?;
    let mut headers = HeaderMap::new();
    let api_key = HeaderValue::from_str(&config.api_key)
        .map_err(|_| Error::Config("api key contains invalid header characters".to_owned()))?;
    let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|_| Error::Config("api key contains invalid header characters".to_owned()))?;
    headers.insert("apikey", api_key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build()?;
    let rest_url = format!("{}/rest/v1", base.as_str().trim_end_matches('/'));
    log::debug!("created store client for {}", rest_url);
    Ok(Client { http, rest_url })
}

impl Client {
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    pub async fn execute(&self, select: &Select) -> Result<Rows> {
        let url = format!("{}/{}", self.rest_url, select.table());
        let mut request = self.http.get(&url).query(&select.query_pairs());
        if let Some(prefer) = select.prefer_header() {
            request = request.header("Prefer", prefer);
        }
        log::debug!("GET {}, select: {:?}", url, select);
        let resp = request.send().await?;
        let status = resp.status();
        let count = resp
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total);
        if !status.is_success() {
            let text = resp.text().await?;
            let body = serde_json::from_str::<ApiError>(&text)
                .unwrap_or_else(|_| ApiError::from_message(text));
            return Err(Error::Api {
                table: select.table().to_owned(),
                status,
                body,
            });
        }
        let data: Option<Vec<Value>> = resp.json().await?;
        log::debug!(
            "retrieved {} rows from {}, total count: {:?}",
            data.as_ref().map_or(0, Vec::len),
            select.table(),
            count
        );
        Ok(Rows { data, count })
    }
}

#[async_trait]
impl RowSource for Client {
    type E = Error;
    async fn fetch(&self, select: &Select) -> Result<Rows> {
        self.execute(select).await
    }
}

/// Total from a `Content-Range` header such as `0-9/25` or `*/0`.
/// A `*` total means the server did not count
pub(crate) fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}
