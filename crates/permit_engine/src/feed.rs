use std::time::Duration;

use feed_logging::feed_debug;
use permit_core::PermitRecord;

use crate::credential::{mask_credential, CredentialStore};
use crate::envelope::parse_envelope;
use crate::types::FeedError;

/// First row index fetched when the caller does not choose a range.
pub const DEFAULT_START_INDEX: u32 = 1;
/// Last row index fetched when the caller does not choose a range.
pub const DEFAULT_END_INDEX: u32 = 100;

/// Connection settings for the permit feed.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub base_url: String,
    pub service_id: String,
    pub data_type: String,
    pub request_timeout: Duration,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: "http://openapi.foodsafetykorea.go.kr/api".to_string(),
            service_id: "I2500".to_string(),
            data_type: "json".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One-shot, paginated access to the permit feed.
#[async_trait::async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch one page of records, rows `start_index..=end_index`, 1-based.
    ///
    /// Callers must pass `start_index >= 1` and `end_index >= start_index`;
    /// the feed rejects other ranges itself.
    async fn fetch(
        &self,
        start_index: u32,
        end_index: u32,
    ) -> Result<Vec<PermitRecord>, FeedError>;
}

/// Reqwest-backed [`FeedClient`] for the public endpoint.
pub struct HttpFeedClient {
    settings: FeedSettings,
    credentials: Box<dyn CredentialStore>,
}

impl HttpFeedClient {
    pub fn new(settings: FeedSettings, credentials: Box<dyn CredentialStore>) -> Self {
        Self {
            settings,
            credentials,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FeedError::Network(err.to_string()))
    }

    fn request_url(&self, credential: &str, start_index: u32, end_index: u32) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.settings.base_url,
            credential,
            self.settings.service_id,
            self.settings.data_type,
            start_index,
            end_index
        )
    }
}

#[async_trait::async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(
        &self,
        start_index: u32,
        end_index: u32,
    ) -> Result<Vec<PermitRecord>, FeedError> {
        let credential = self
            .credentials
            .credential()
            .ok_or(FeedError::MissingCredential)?;

        let client = self.build_client()?;
        let url = self.request_url(&credential, start_index, end_index);
        feed_debug!(
            "Fetching rows {}..{} from {}",
            start_index,
            end_index,
            self.request_url(&mask_credential(&credential), start_index, end_index)
        );

        // A single attempt; no retry or backoff.
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|err| FeedError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FeedError::Network(err.to_string()))?;

        // Branch on the inspected status before any parsing is attempted.
        if status != 200 {
            return Err(FeedError::Transport { status, body });
        }

        let records = parse_envelope(&body, &self.settings.service_id)?;
        feed_debug!("Feed returned {} rows", records.len());
        Ok(records)
    }
}
