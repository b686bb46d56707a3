//! Content API client
//!
//! The API is queried three ways: by content type (listing), by opaque
//! cursor URL (subsequent listing pages), and by unique slug (detail).
//! Query parameter names and the response shape are the API's contract;
//! this client only fills in the values.

use async_trait::async_trait;

use crate::cms::FetchError;
use crate::config::ApiConfig;
use crate::content::{Post, PostPage};

/// Source of posts, as seen by the listing accumulator and the server
///
/// The HTTP client implements this; tests substitute a fake so no network
/// is involved.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the first listing page with the given page size
    async fn list_posts(&self, page_size: usize) -> Result<PostPage, FetchError>;

    /// Fetch a listing page by its opaque cursor URL
    async fn fetch_page(&self, url: &str) -> Result<PostPage, FetchError>;

    /// Fetch one post by slug; `Ok(None)` when the API does not know it
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, FetchError>;
}

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CmsClient {
    /// Create a client for the configured API
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> Result<&str, FetchError> {
        if self.config.endpoint.is_empty() {
            return Err(FetchError::MissingEndpoint);
        }
        Ok(self.config.endpoint.trim_end_matches('/'))
    }

    /// URL of the listing query
    fn documents_url(&self) -> Result<String, FetchError> {
        Ok(format!("{}/documents", self.endpoint()?))
    }

    /// URL of the query-by-slug lookup
    fn document_url(&self, slug: &str) -> Result<String, FetchError> {
        Ok(format!(
            "{}/documents/{}/{}",
            self.endpoint()?,
            self.config.content_type,
            slug
        ))
    }
}

#[async_trait]
impl PostSource for CmsClient {
    async fn list_posts(&self, page_size: usize) -> Result<PostPage, FetchError> {
        let url = self.documents_url()?;
        let fetch = self.config.fetch_fields.join(",");

        let mut request = self
            .http
            .get(url)
            .query(&[
                ("type", self.config.content_type.as_str()),
                ("fetch", fetch.as_str()),
            ])
            .query(&[("page_size", page_size)]);
        if let Some(token) = &self.config.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        let response = request.send().await?;
        decode_page(response).await
    }

    async fn fetch_page(&self, url: &str) -> Result<PostPage, FetchError> {
        // The cursor already carries the full query, including credentials
        let response = self.http.get(url).send().await?;
        decode_page(response).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, FetchError> {
        let url = self.document_url(slug)?;

        let mut request = self.http.get(url);
        if let Some(token) = &self.config.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice::<Post>(&body)?))
    }
}

/// Check the status and decode a listing-page response
///
/// Transport failures surface as `Http`, malformed bodies as `Decode`.
async fn decode_page(response: reqwest::Response) -> Result<PostPage, FetchError> {
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice::<PostPage>(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig {
            endpoint: "https://example.cdn.example.io/api/v2/".to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_documents_url_trims_trailing_slash() {
        let client = CmsClient::new(test_config());
        assert_eq!(
            client.documents_url().unwrap(),
            "https://example.cdn.example.io/api/v2/documents"
        );
    }

    #[test]
    fn test_document_url_by_slug() {
        let client = CmsClient::new(test_config());
        assert_eq!(
            client.document_url("my-slug").unwrap(),
            "https://example.cdn.example.io/api/v2/documents/posts/my-slug"
        );
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let err = serde_json::from_slice::<PostPage>(b"not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        let client = CmsClient::new(ApiConfig::default());
        assert!(matches!(
            client.documents_url(),
            Err(FetchError::MissingEndpoint)
        ));
    }
}
