use std::time::Duration;

use hours_core::DayRecord;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::properties::{PropertyNames, decode_page, duration_update_body};
use crate::store::{RecordSink, RecordSource};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub base_url: String,
    pub token: String,
    pub database_id: String,
    pub notion_version: String,
    pub page_size: u32,
    pub timeout: Duration,
    pub properties: PropertyNames,
}

impl NotionConfig {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            database_id: database_id.into(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: MAX_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            properties: PropertyNames::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

/// Blocking client for the two Notion endpoints the service needs.
/// Calls must run off the async executor.
pub struct NotionClient {
    http: Client,
    config: NotionConfig,
}

impl NotionClient {
    pub fn new(config: NotionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|err| StoreError::Unavailable(format!("invalid notion token: {}", err)))?;
        headers.insert(AUTHORIZATION, auth);
        let version = HeaderValue::from_str(&config.notion_version)
            .map_err(|err| StoreError::Unavailable(format!("invalid notion version: {}", err)))?;
        headers.insert("Notion-Version", version);
        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NotionConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn query_page(&self, cursor: Option<&str>) -> Result<QueryResponse> {
        let url = self.url(&format!("databases/{}/query", self.config.database_id));
        let body = QueryRequest {
            page_size: self.config.page_size.clamp(1, MAX_PAGE_SIZE),
            start_cursor: cursor,
        };
        let response = self.http.post(url).json(&body).send()?;
        let response = check_status(response)?;
        Ok(response.json::<QueryResponse>()?)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: Value = response.json().unwrap_or_else(|_| json!({}));
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
        .to_string();
    let code = body.get("code").and_then(Value::as_str).map(str::to_string);
    warn!(status = status.as_u16(), ?code, %message, "notion request failed");
    Err(StoreError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}

impl RecordSource for NotionClient {
    fn query_records(&self) -> Result<Vec<DayRecord>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;
        loop {
            let page = self.query_page(cursor.as_deref())?;
            pages += 1;
            for result in &page.results {
                match decode_page(result, &self.config.properties) {
                    Some(record) => records.push(record),
                    None => debug!("skipping query result without page id"),
                }
            }
            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }
        debug!(records = records.len(), pages, "queried notion database");
        Ok(records)
    }
}

impl RecordSink for NotionClient {
    fn write_duration(&self, record_id: &str, duration_text: &str) -> Result<()> {
        let url = self.url(&format!("pages/{}", record_id));
        let body = duration_update_body(&self.config.properties, duration_text);
        let response = self.http.patch(url).json(&body).send()?;
        check_status(response)?;
        info!(record_id, duration_text, "wrote worked hours to notion");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_omits_missing_cursor() {
        let body = serde_json::to_value(QueryRequest {
            page_size: 100,
            start_cursor: None,
        })
        .expect("serialize");
        assert_eq!(body, json!({ "page_size": 100 }));
    }

    #[test]
    fn query_response_tolerates_missing_fields() {
        let parsed: QueryResponse =
            serde_json::from_value(json!({ "object": "list" })).expect("parse");
        assert!(parsed.results.is_empty());
        assert!(!parsed.has_more);
        assert!(parsed.next_cursor.is_none());
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let mut config = NotionConfig::new("secret", "db-1");
        config.base_url = "http://127.0.0.1:9/v1/".to_string();
        let client = NotionClient::new(config).expect("client");
        assert_eq!(
            client.url("databases/db-1/query"),
            "http://127.0.0.1:9/v1/databases/db-1/query"
        );
    }
}
