//! HTTP boundary. The only module that knows paths, wire field names and the
//! operator symbol/id translation.

use crate::errors::{ClientError, DELETE_REFUSED_STATUS};
use crate::models::{
    CalculateBody, CalculationRequest, CalculationResult, Credentials, HistoryEntry,
    HistoryResponse, SessionInfo, UserRecord, UsersResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const USER_ID_HEADER: &str = "user-id";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn session_info(&self) -> Result<SessionInfo, ClientError> {
        let response = self.client.get(self.url("/api/session_info")).send().await?;
        read_json(ensure_success("/api/session_info", response)?).await
    }

    pub async fn calculate(&self, request: CalculationRequest) -> Result<CalculationResult, ClientError> {
        let body = CalculateBody::from(request);
        debug!(operator_id = body.operator_id, "posting calculation");
        let response = self
            .client
            .post(self.url("/api/calculate"))
            .json(&body)
            .send()
            .await?;
        read_json(ensure_success("/api/calculate", response)?).await
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        let response = self.client.get(self.url("/api/history")).send().await?;
        let payload: HistoryResponse = read_json(ensure_success("/api/history", response)?).await?;
        Ok(payload.history)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(credentials)
            .send()
            .await?;
        ensure_success("/api/login", response).map(drop)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(credentials)
            .send()
            .await?;
        ensure_success("/api/register", response).map(drop)
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.client.get(self.url("/api/logout")).send().await?;
        ensure_success("/api/logout", response).map(drop)
    }

    pub async fn users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let response = self.client.get(self.url("/api/get_users")).send().await?;
        let payload: UsersResponse = read_json(ensure_success("/api/get_users", response)?).await?;
        Ok(payload.users)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/api/delete_user"))
            .header(USER_ID_HEADER, id)
            .send()
            .await?;

        // 228 sits inside the 2xx range, so it has to be checked before success.
        if response.status().as_u16() == DELETE_REFUSED_STATUS {
            warn!(user_id = id, "backend refused user deletion");
            return Err(ClientError::DeleteRefused);
        }
        ensure_success("/api/delete_user", response).map(drop)
    }
}

fn ensure_success(path: &str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(path, status = status.as_u16(), "request rejected");
        Err(ClientError::ServerRejected(status.as_u16()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::malformed)
}
