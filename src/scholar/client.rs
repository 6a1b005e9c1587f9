use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::scholar::ScholarError;
use crate::{AuthorProfile, Publication};

/// Client for the academic-profile service.
///
/// The service exposes two operations: resolve an author by identifier, and
/// hydrate a record (author or publication) with a named set of additional
/// sections. Calls are made one at a time; failures are returned as-is.
pub struct ScholarClient {
    client: Client,
    base_url: String,
}

impl ScholarClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Resolve an author identifier to a profile summary.
    pub async fn resolve_author(&self, author_id: &str) -> Result<AuthorProfile, ScholarError> {
        let url = format!("{}/authors/{}", self.base_url, encode(author_id));
        self.get(&url, &[]).await
    }

    /// Fetch an author profile with the named sections populated.
    ///
    /// An empty section list leaves the choice to the service.
    pub async fn hydrate_author(
        &self,
        author_id: &str,
        sections: &[&str],
    ) -> Result<AuthorProfile, ScholarError> {
        let url = format!("{}/authors/{}", self.base_url, encode(author_id));
        self.get(&url, sections).await
    }

    /// Fetch a publication with the named sections populated.
    ///
    /// The "authors" section fills the raw author string.
    pub async fn hydrate_publication(
        &self,
        publication_id: &str,
        sections: &[&str],
    ) -> Result<Publication, ScholarError> {
        let url = format!("{}/publications/{}", self.base_url, encode(publication_id));
        self.get(&url, sections).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        sections: &[&str],
    ) -> Result<T, ScholarError> {
        let mut request = self.client.get(url);
        if !sections.is_empty() {
            request = request.query(&[("sections", sections.join(","))]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 404 {
            let message = response.text().await.unwrap_or_default();
            return Err(ScholarError::NotFound(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScholarError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ScholarError::from)
    }
}
