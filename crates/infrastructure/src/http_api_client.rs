use std::sync::Arc;
use std::time::Duration;

use reqwest::header;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sitecrew_application::CredentialStore;
use sitecrew_core::{AppError, AppResult};
use sitecrew_domain::{DocumentRecord, InvoiceRecord, ProjectRecord, TaskRecord, UserProfile, VendorRecord};
use tracing::debug;
use url::Url;
use uuid::Uuid;

mod auth;
mod error_body;
mod resource;
#[cfg(test)]
mod tests;

pub use resource::Resource;

use error_body::error_message_from_body;

/// Fixed timeout applied to every request. A timeout surfaces to the caller
/// as a plain network failure.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Pre-configured HTTP client for the construction-management backend.
///
/// The client is a stateless request factory: fixed base URL, fixed timeout,
/// JSON bodies, and a bearer token read from the credential store at call
/// time. No caching, no deduplication, no queuing, no retries. Concurrent
/// calls are independent and unordered.
pub struct HttpApiClient {
    http_client: reqwest::Client,
    base_url: Url,
    credential_store: Arc<dyn CredentialStore>,
}

impl HttpApiClient {
    /// Creates a client against the given base URL.
    ///
    /// The base URL path is normalized to end with `/` so resource paths
    /// join under it instead of replacing its last segment.
    pub fn new(base_url: Url, credential_store: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            base_url,
            credential_store,
        })
    }

    /// Lists every record in a resource collection.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> AppResult<Vec<T>> {
        let builder = self.request(Method::GET, resource.collection_path()).await?;
        self.execute(builder).await
    }

    /// Fetches a single record by backend identifier.
    pub async fn get<T: DeserializeOwned>(&self, resource: Resource, id: i64) -> AppResult<T> {
        let builder = self
            .request(Method::GET, &resource.item_path(id))
            .await?;
        self.execute(builder).await
    }

    /// Creates a record in a resource collection.
    pub async fn create<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: Resource,
        body: &B,
    ) -> AppResult<T> {
        let builder = self
            .request(Method::POST, resource.collection_path())
            .await?
            .json(body);
        self.execute(builder).await
    }

    /// Replaces a record by backend identifier.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: Resource,
        id: i64,
        body: &B,
    ) -> AppResult<T> {
        let builder = self
            .request(Method::PUT, &resource.item_path(id))
            .await?
            .json(body);
        self.execute(builder).await
    }

    /// Deletes a record by backend identifier.
    pub async fn delete(&self, resource: Resource, id: i64) -> AppResult<()> {
        let builder = self
            .request(Method::DELETE, &resource.item_path(id))
            .await?;
        self.execute_expecting_no_body(builder).await
    }

    /// Lists user profiles.
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        self.list(Resource::Users).await
    }

    /// Lists projects.
    pub async fn list_projects(&self) -> AppResult<Vec<ProjectRecord>> {
        self.list(Resource::Projects).await
    }

    /// Lists tasks.
    pub async fn list_tasks(&self) -> AppResult<Vec<TaskRecord>> {
        self.list(Resource::Tasks).await
    }

    /// Lists documents.
    pub async fn list_documents(&self) -> AppResult<Vec<DocumentRecord>> {
        self.list(Resource::Documents).await
    }

    /// Uploads a document record.
    pub async fn create_document(&self, document: &DocumentRecord) -> AppResult<DocumentRecord> {
        self.create(Resource::Documents, document).await
    }

    /// Lists vendors.
    pub async fn list_vendors(&self) -> AppResult<Vec<VendorRecord>> {
        self.list(Resource::Vendors).await
    }

    /// Registers a vendor record.
    pub async fn create_vendor(&self, vendor: &VendorRecord) -> AppResult<VendorRecord> {
        self.create(Resource::Vendors, vendor).await
    }

    /// Lists invoices.
    pub async fn list_invoices(&self) -> AppResult<Vec<InvoiceRecord>> {
        self.list(Resource::Invoices).await
    }

    /// Submits an invoice record.
    pub async fn create_invoice(&self, invoice: &InvoiceRecord) -> AppResult<InvoiceRecord> {
        self.create(Resource::Invoices, invoice).await
    }

    async fn request(&self, method: Method, path: &str) -> AppResult<reqwest::RequestBuilder> {
        let endpoint = self.base_url.join(path).map_err(|error| {
            AppError::Internal(format!("invalid resource path '{path}': {error}"))
        })?;

        let mut builder = self
            .http_client
            .request(method, endpoint)
            .header("X-Request-Id", Uuid::new_v4().to_string());

        // A missing token is not an error; the request goes out
        // unauthenticated and the backend decides.
        if let Some(credentials) = self.credential_store.load().await? {
            builder = builder.header(
                header::AUTHORIZATION,
                credentials.access_token.header_value(),
            );
        }

        Ok(builder)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|error| AppError::Decode(format!("unexpected response body: {error}")))
    }

    async fn execute_expecting_no_body(&self, builder: reqwest::RequestBuilder) -> AppResult<()> {
        self.send(builder).await?;
        Ok(())
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|error| AppError::Network(error.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());
        let message = error_message_from_body(&body);
        debug!(status = status.as_u16(), message = %message, "api request failed");

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn normalize_base_url(mut base_url: Url) -> AppResult<Url> {
    if base_url.cannot_be_a_base() {
        return Err(AppError::Validation(format!(
            "'{base_url}' cannot be used as an API base URL"
        )));
    }

    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(base_url)
}
