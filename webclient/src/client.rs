use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::Result;
use crate::model::{ExtractRequest, ExtractResponse};

/// Connection settings for the extraction endpoint, constructed once at
/// process start and threaded through explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Url,
    pub token: String,

    #[serde(default = "ApiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    fn default_timeout_secs() -> u64 {
        Self::DEFAULT_TIMEOUT_SECS
    }
}

/// Seam for the extraction endpoint, so the driver can be exercised
/// against a canned in-memory implementation.
#[async_trait]
pub trait ExtractApi {
    async fn extract(&self, req: &ExtractRequest) -> Result<ExtractResponse>;
}

pub struct ExtractClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl ExtractClient {
    pub fn new(cfg: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            token: cfg.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ExtractApi for ExtractClient {
    /// Single POST, no retry. The body is decoded as JSON whatever the
    /// http status; callers inspect the body shape instead of the code.
    async fn extract(&self, req: &ExtractRequest) -> Result<ExtractResponse> {
        log::debug!("POST {} (postId={})", self.endpoint, req.post_id);

        let res = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(req)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        log::debug!("Response {} ({} bytes)", status, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
