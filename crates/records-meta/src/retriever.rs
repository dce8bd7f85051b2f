//! Metadata retrieval from the `/v1/meta` endpoint.

use crate::relations::resolve_relations;
use cube_records_core::{CubeDefinitionWithRelations, Error, MetaResponse, Result};
use tracing::debug;

/// Fetches cube definitions from an analytics server and resolves their
/// join relations.
///
/// The retriever holds no state between calls: every retrieval produces a
/// wholly new cube list, so repeated or concurrent invocations are
/// independent. Failures propagate unchanged; there is no retry.
///
/// # Examples
///
/// ```no_run
/// use cube_records_meta::DefinitionRetriever;
///
/// # async fn example() -> cube_records_core::Result<()> {
/// let retriever = DefinitionRetriever::new("http://localhost:4000/cube-api/");
/// let definitions = retriever.retrieve_definitions().await?;
/// for definition in &definitions {
///     println!("{}: joins {:?}", definition.name(), definition.joins);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DefinitionRetriever {
    client: reqwest::Client,
    meta_url: String,
}

impl DefinitionRetriever {
    /// Creates a retriever for the given base URL.
    ///
    /// A trailing slash on the base URL is normalized before `/v1/meta`
    /// is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_meta::DefinitionRetriever;
    ///
    /// let retriever = DefinitionRetriever::new("https://api.example.com/cubes/");
    /// assert_eq!(retriever.meta_url(), "https://api.example.com/cubes/v1/meta");
    /// ```
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            meta_url: format!("{}/v1/meta", base_url.trim_end_matches('/')),
        }
    }

    /// Returns the resolved meta endpoint URL.
    #[must_use]
    pub fn meta_url(&self) -> &str {
        &self.meta_url
    }

    /// Retrieves all cube definitions and resolves their joins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RetrievalFailed`] if the request fails, the server
    /// responds with a non-2xx status, or the body is not valid JSON of
    /// the expected shape.
    pub async fn retrieve_definitions(&self) -> Result<Vec<CubeDefinitionWithRelations>> {
        debug!(url = %self.meta_url, "fetching cube metadata");

        let response = self
            .client
            .get(&self.meta_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| self.retrieval_error(source))?;

        let meta: MetaResponse = response
            .json()
            .await
            .map_err(|source| self.retrieval_error(source))?;

        debug!(cubes = meta.cubes.len(), "retrieved cube metadata");
        Ok(resolve_relations(meta.cubes))
    }

    fn retrieval_error(&self, source: reqwest::Error) -> Error {
        Error::RetrievalFailed {
            endpoint: self.meta_url.clone(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_url_appends_path() {
        let retriever = DefinitionRetriever::new("https://api.example.com/cubes");
        assert_eq!(retriever.meta_url(), "https://api.example.com/cubes/v1/meta");
    }

    #[test]
    fn test_meta_url_normalizes_trailing_slash() {
        let retriever = DefinitionRetriever::new("https://api.example.com/cubes/");
        assert_eq!(retriever.meta_url(), "https://api.example.com/cubes/v1/meta");
    }
}
