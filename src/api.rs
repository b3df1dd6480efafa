//! Client for the community website's upload endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::constants::UPLOAD_TIMEOUT_SECS;
use crate::router::Category;

/// The JSON body the website ingests for each published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub topic: String,
    pub description: String,
    pub link: String,
    pub tag: String,
    pub source: String,
}

impl PostPayload {
    pub fn new(topic: String, description: String, link: String, tag: Category) -> Self {
        Self {
            topic,
            description,
            link,
            tag: tag.name().to_string(),
            source: "discord".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("website upload rejected ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("website request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct WebsiteClient {
    http: Client,
    upload_url: String,
}

impl WebsiteClient {
    pub fn new(upload_url: String) -> Self {
        Self {
            http: Client::new(),
            upload_url,
        }
    }

    /// One bounded POST, no retries. Anything but HTTP 200 is a failure.
    pub async fn upload(&self, payload: &PostPayload) -> Result<(), UploadError> {
        let response = self
            .http
            .post(&self.upload_url)
            .json(payload)
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status { status, body });
        }
        Ok(())
    }
}
