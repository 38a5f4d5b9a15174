//! Firestore REST implementation of `ToolStore`.
//!
//! Talks to `{base_url}/projects/{project}/databases/{database}/documents/{collection}`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = FirestoreConfig::new("my-project").with_api_key(key);
//! let store = FirestoreToolStore::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::foundation::ToolId;
use crate::domain::tool::{NewTool, Tool, ToolPatch};
use crate::ports::{StoreError, ToolStore};

use super::document::{FirestoreDocument, ListDocumentsResponse};

/// Documents fetched per list request.
const PAGE_SIZE: u32 = 300;

/// Firestore connection settings.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub base_url: String,
    api_key: Option<Secret<String>>,
    pub timeout: Option<Duration>,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: "(default)".to_string(),
            collection: "tools".to_string(),
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            api_key: None,
            timeout: None,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }

    /// URL of the collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project_id, self.database, self.collection
        )
    }

    /// URL of one document. The id is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// - `Write` if the base URL cannot be parsed or cannot carry a path
    pub fn document_url(&self, id: &ToolId) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| StoreError::write(format!("Invalid collection URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::write("Collection URL cannot carry a document path"))?
            .push(id.as_str());
        Ok(url)
    }
}

/// Tool store backed by a Firestore collection.
pub struct FirestoreToolStore {
    config: FirestoreConfig,
    client: Client,
}

impl FirestoreToolStore {
    /// Create a new store with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the HTTP client cannot be built
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key() {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListDocumentsResponse, StoreError> {
        let page_size = PAGE_SIZE.to_string();
        let mut request = self
            .client
            .get(self.config.collection_url())
            .query(&[("pageSize", page_size.as_str())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::unavailable(format!("List request failed: {}", e)))?;
        let response = ensure_success(response).await.map_err(StoreError::Unavailable)?;

        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| StoreError::unavailable(format!("Failed to parse list response: {}", e)))
    }
}

/// Returns the response if 2xx, otherwise a message with status and body.
async fn ensure_success(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!("Firestore returned {}: {}", status, body))
}

#[async_trait]
impl ToolStore for FirestoreToolStore {
    async fn list_all(&self) -> Result<Vec<Tool>, StoreError> {
        let mut tools = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            for doc in page.documents {
                let tool = doc
                    .into_tool()
                    .map_err(|e| StoreError::unavailable(format!("Malformed document: {}", e)))?;
                tools.push(tool);
            }
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(count = tools.len(), collection = %self.config.collection, "Listed tools");
        Ok(tools)
    }

    async fn add(&self, tool: &NewTool) -> Result<ToolId, StoreError> {
        let request = self
            .client
            .post(self.config.collection_url())
            .json(&FirestoreDocument::from_new_tool(tool));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::write(format!("Create request failed: {}", e)))?;
        let response = ensure_success(response).await.map_err(StoreError::Write)?;

        let created = response
            .json::<FirestoreDocument>()
            .await
            .map_err(|e| StoreError::write(format!("Failed to parse created document: {}", e)))?;
        let id = created
            .id()
            .map_err(|e| StoreError::write(format!("Created document has no id: {}", e)))?;

        tracing::debug!(tool_id = %id, "Created tool document");
        Ok(id)
    }

    async fn update(&self, id: &ToolId, patch: &ToolPatch) -> Result<(), StoreError> {
        let mut query: Vec<(&str, &str)> = patch
            .fields()
            .into_iter()
            .map(|(field, _)| ("updateMask.fieldPaths", field.as_str()))
            .collect();
        query.push(("currentDocument.exists", "true"));

        let request = self
            .client
            .patch(self.config.document_url(id)?)
            .query(&query)
            .json(&FirestoreDocument::from_patch(patch));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::write(format!("Update request failed: {}", e)))?;
        ensure_success(response).await.map_err(StoreError::Write)?;

        tracing::debug!(tool_id = %id, "Updated tool document");
        Ok(())
    }

    async fn delete(&self, id: &ToolId) -> Result<(), StoreError> {
        let request = self.client.delete(self.config.document_url(id)?);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::write(format!("Delete request failed: {}", e)))?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(tool_id = %id, "Delete of missing tool document");
            return Ok(());
        }
        ensure_success(response).await.map_err(StoreError::Write)?;

        tracing::debug!(tool_id = %id, "Deleted tool document");
        Ok(())
    }
}
