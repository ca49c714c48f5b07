use crate::errors::RequestError;
use crate::models::{PollResult, ServerAck};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the notification and buddy endpoints. Bodies are form-encoded
/// and responses JSON; all calls share one client and its timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn check_new(&self) -> Result<PollResult, RequestError> {
        let response = self
            .http
            .get(self.url("/notifications/check-new"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn mark_read(&self, notification_id: &str) -> Result<ServerAck, RequestError> {
        let response = self
            .http
            .post(self.url("/notifications/mark-read"))
            .form(&[("notificationId", notification_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn mark_all_read(&self) -> Result<ServerAck, RequestError> {
        let response = self
            .http
            .post(self.url("/notifications/mark-all-read"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn accept_buddy(&self, requester_id: &str) -> Result<ServerAck, RequestError> {
        let response = self
            .http
            .post(self.url("/buddy/accept"))
            .form(&[("requesterId", requester_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn reject_buddy(&self, requester_id: &str) -> Result<ServerAck, RequestError> {
        let response = self
            .http
            .post(self.url("/buddy/reject"))
            .form(&[("requesterId", requester_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
