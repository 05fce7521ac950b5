//! HTTP implementation of the library service API
//!
//! One [`reqwest::Client`] is shared across the four services; only the
//! base URL differs per collection. The client is handed its credentials
//! through [`ServicesConfig`]; there is no ambient session state.

use crate::adapters::library::api::LibraryApi;
use crate::adapters::library::models::{FineChanges, NewFine};
use crate::config::ServicesConfig;
use crate::domain::errors::{CircdeskError, ServiceError, ServiceKind};
use crate::domain::ids::{BorrowId, FineId};
use crate::domain::{Book, BorrowRecord, Fine, UserProfile};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the library services
///
/// # Example
///
/// ```no_run
/// use circdesk::adapters::library::HttpLibraryClient;
/// use circdesk::config::ServicesConfig;
///
/// # fn example() -> circdesk::domain::Result<()> {
/// let client = HttpLibraryClient::new(ServicesConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub struct HttpLibraryClient {
    /// Shared HTTP client for all four services
    client: Client,

    /// Endpoints, credentials and retry settings
    config: ServicesConfig,
}

impl HttpLibraryClient {
    /// Create a new client from service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ServicesConfig) -> Result<Self, CircdeskError> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            CircdeskError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client, config })
    }

    /// Build authorization header value from the configured credentials
    fn auth_header_value(&self) -> Option<String> {
        let username = self.config.username.as_ref()?;
        let password = self.config.password.as_ref()?;

        let credentials = format!("{}:{}", username, password.expose_secret());
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        Some(format!("Basic {encoded}"))
    }

    /// Retry a read request with exponential backoff
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T, ServiceError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, ServiceError>>,
    {
        let retry = &self.config.retry;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;
                    if attempt >= retry.max_retries {
                        return Err(e);
                    }

                    let delay_ms = retry.initial_delay_ms
                        * (retry.backoff_multiplier.powf((attempt - 1) as f64) as u64);
                    let delay_ms = delay_ms.min(retry.max_delay_ms);

                    tracing::warn!(
                        attempt = attempt,
                        max_retries = retry.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying request after error"
                    );

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    /// Fetch a collection snapshot from one service
    async fn get_collection<T>(
        &self,
        service: ServiceKind,
        url: String,
    ) -> Result<Vec<T>, ServiceError>
    where
        T: DeserializeOwned,
    {
        let rows = self
            .retry_request(|| async {
                let mut request = self.client.get(&url);

                if let Some(auth) = self.auth_header_value() {
                    request = request.header("Authorization", auth);
                }

                let resp = request
                    .send()
                    .await
                    .map_err(|e| transport_error(service, e))?;

                if !resp.status().is_success() {
                    let status = resp.status();
                    let body = resp.text().await.unwrap_or_default();
                    return Err(status_error(service, status, body));
                }

                resp.json::<Vec<T>>()
                    .await
                    .map_err(|e| ServiceError::InvalidResponse {
                        service,
                        message: e.to_string(),
                    })
            })
            .await?;

        tracing::debug!(service = %service, count = rows.len(), "Fetched collection snapshot");

        Ok(rows)
    }

    /// Send a mutation and interpret the response status
    ///
    /// Mutations are sent exactly once; a write is never replayed on a
    /// transport error because the first attempt may have been applied.
    async fn execute_mutation(
        &self,
        service: ServiceKind,
        id: i64,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ServiceError> {
        let mut request = request;

        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| transport_error(service, e))?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound { service, id }),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(status_error(service, status, body))
            }
        }
    }
}

#[async_trait]
impl LibraryApi for HttpLibraryClient {
    async fn fetch_users(&self) -> Result<Vec<UserProfile>, ServiceError> {
        let url = endpoint(&self.config.users_base_url, "/users");
        self.get_collection(ServiceKind::Users, url).await
    }

    async fn fetch_books(&self) -> Result<Vec<Book>, ServiceError> {
        let url = endpoint(&self.config.books_base_url, "/books");
        self.get_collection(ServiceKind::Books, url).await
    }

    async fn fetch_borrows(&self) -> Result<Vec<BorrowRecord>, ServiceError> {
        let url = endpoint(&self.config.borrows_base_url, "/borrows");
        self.get_collection(ServiceKind::Borrows, url).await
    }

    async fn fetch_fines(&self) -> Result<Vec<Fine>, ServiceError> {
        let url = endpoint(&self.config.fines_base_url, "/fines");
        self.get_collection(ServiceKind::Fines, url).await
    }

    async fn mark_returned(&self, id: BorrowId) -> Result<(), ServiceError> {
        let url = endpoint(
            &self.config.borrows_base_url,
            &format!("/borrows/{id}/return"),
        );
        tracing::info!(borrow_id = %id, "Marking borrow returned");
        self.execute_mutation(ServiceKind::Borrows, id.value(), self.client.put(&url))
            .await
    }

    async fn delete_borrow(&self, id: BorrowId) -> Result<(), ServiceError> {
        let url = endpoint(&self.config.borrows_base_url, &format!("/borrows/{id}"));
        tracing::info!(borrow_id = %id, "Deleting borrow record");
        self.execute_mutation(ServiceKind::Borrows, id.value(), self.client.delete(&url))
            .await
    }

    async fn create_fine(&self, fine: &NewFine) -> Result<(), ServiceError> {
        let url = endpoint(&self.config.fines_base_url, "/fines");
        tracing::info!(borrow_id = %fine.borrow_id, user_id = %fine.user_id, "Creating fine");
        self.execute_mutation(
            ServiceKind::Fines,
            fine.borrow_id.value(),
            self.client.post(&url).json(fine),
        )
        .await
    }

    async fn update_fine(&self, id: FineId, changes: &FineChanges) -> Result<(), ServiceError> {
        let url = endpoint(&self.config.fines_base_url, &format!("/fines/{id}"));
        tracing::info!(fine_id = %id, "Updating fine");
        self.execute_mutation(
            ServiceKind::Fines,
            id.value(),
            self.client.put(&url).json(changes),
        )
        .await
    }

    async fn pay_fine(&self, id: FineId) -> Result<(), ServiceError> {
        let url = endpoint(&self.config.fines_base_url, &format!("/fines/{id}/pay"));
        tracing::info!(fine_id = %id, "Marking fine paid");
        self.execute_mutation(ServiceKind::Fines, id.value(), self.client.put(&url))
            .await
    }

    async fn delete_fine(&self, id: FineId) -> Result<(), ServiceError> {
        let url = endpoint(&self.config.fines_base_url, &format!("/fines/{id}"));
        tracing::info!(fine_id = %id, "Deleting fine");
        self.execute_mutation(ServiceKind::Fines, id.value(), self.client.delete(&url))
            .await
    }
}

/// Join a base URL and a path, tolerating a trailing slash on the base
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Translate a transport-level failure into a service error
fn transport_error(service: ServiceKind, err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout {
            service,
            message: err.to_string(),
        }
    } else {
        ServiceError::ConnectionFailed {
            service,
            message: err.to_string(),
        }
    }
}

/// Translate a non-success status into a service error
fn status_error(service: ServiceKind, status: StatusCode, body: String) -> ServiceError {
    if status.is_client_error() {
        ServiceError::ClientError {
            service,
            status: status.as_u16(),
            message: body,
        }
    } else {
        ServiceError::ServerError {
            service,
            status: status.as_u16(),
            message: body,
        }
    }
}
