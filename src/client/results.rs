use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::{ClientError, ClientResult};
use crate::dto::results::{ErrorResponse, GameResultSummary, SaveResultRequest};

/// Operations the game needs from the results backend.
pub trait ResultsApi: Send + Sync {
    /// Every recorded result, newest first.
    fn list_results(&self) -> BoxFuture<'static, ClientResult<Vec<GameResultSummary>>>;
    /// Record a finished game under `winner`.
    fn save_result(&self, winner: String) -> BoxFuture<'static, ClientResult<GameResultSummary>>;
}

/// Outcome of the save-then-reload workflow, one result per step.
///
/// `refreshed` is `None` when the save failed and no reload was attempted.
#[derive(Debug)]
pub struct SaveOutcome {
    /// Result of the `POST /results` call.
    pub saved: ClientResult<GameResultSummary>,
    /// Result of the follow-up history reload, if one ran.
    pub refreshed: Option<ClientResult<Vec<GameResultSummary>>>,
}

impl SaveOutcome {
    /// Whether the result reached the store, regardless of the reload.
    pub fn is_saved(&self) -> bool {
        self.saved.is_ok()
    }
}

/// Save `winner`, then reload the history only if the save succeeded.
pub async fn save_and_refresh<A>(api: &A, winner: String) -> SaveOutcome
where
    A: ResultsApi + ?Sized,
{
    let saved = api.save_result(winner).await;
    let refreshed = match saved {
        Ok(_) => Some(api.list_results().await),
        Err(_) => None,
    };
    SaveOutcome { saved, refreshed }
}

/// [`ResultsApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct ResultsClient {
    client: Client,
    base_url: Arc<str>,
}

impl ResultsClient {
    /// Client for the backend rooted at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| ClientError::Builder { source })?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    fn results_url(&self) -> String {
        format!("{}/results", self.base_url)
    }

    async fn fetch_results(&self) -> ClientResult<Vec<GameResultSummary>> {
        let url = self.results_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;
        decode(url, response).await
    }

    async fn post_result(&self, winner: String) -> ClientResult<GameResultSummary> {
        let url = self.results_url();
        let response = self
            .client
            .post(&url)
            .json(&SaveResultRequest { winner })
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;
        decode(url, response).await
    }
}

impl ResultsApi for ResultsClient {
    fn list_results(&self) -> BoxFuture<'static, ClientResult<Vec<GameResultSummary>>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_results().await })
    }

    fn save_result(&self, winner: String) -> BoxFuture<'static, ClientResult<GameResultSummary>> {
        let client = self.clone();
        Box::pin(async move { client.post_result(winner).await })
    }
}

async fn decode<T>(url: String, response: Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "no error body".to_string());
        return Err(ClientError::Status {
            url,
            status,
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode { url, source })
}
