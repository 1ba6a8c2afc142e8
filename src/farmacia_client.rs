use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::session::SessionProvider;
use crate::types::*;

/// Collections the dashboard counts.
#[async_trait(?Send)]
pub trait FarmaciaApi {
    async fn list_medicamentos(&self) -> Result<Vec<Medicamento>, ClientError>;
    async fn list_laboratorios(&self) -> Result<Vec<Laboratorio>, ClientError>;
    async fn list_ordenes_compra(&self) -> Result<Vec<OrdenCompra>, ClientError>;
}

/// Client for the farmacia REST API
pub struct FarmaciaClient {
    base_url: String,
    client: reqwest::Client,
    sessions: Option<Rc<dyn SessionProvider>>,
}

impl FarmaciaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            sessions: None,
        }
    }

    /// Attach the bearer token of whoever is signed in at request time.
    pub fn with_sessions(mut self, sessions: Rc<dyn SessionProvider>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn access_token(&self) -> Option<String> {
        self.sessions.as_ref()?.current_session()?.access_token
    }

    async fn get_list<T: DeserializeOwned + Default>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let mut request = self.client.get(self.endpoint(path));
        if let Some(token) = self.access_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ClientError::Api { status, body });
        }

        let body = response.text().await?;
        Ok(decode_collection(&body)?)
    }
}

/// Decode a JSON array item by item. Items that do not fit `T` still count,
/// as `T::default()`, so the length always matches the payload.
pub fn decode_collection<T>(body: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

#[async_trait(?Send)]
impl FarmaciaApi for FarmaciaClient {
    async fn list_medicamentos(&self) -> Result<Vec<Medicamento>, ClientError> {
        self.get_list("medicamentos").await
    }

    async fn list_laboratorios(&self) -> Result<Vec<Laboratorio>, ClientError> {
        self.get_list("laboratorios").await
    }

    async fn list_ordenes_compra(&self) -> Result<Vec<OrdenCompra>, ClientError> {
        self.get_list("ordenes-compra").await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
