//! Mock route client for testing without a backend.
//!
//! Loads saved route documents from JSON files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::directions::DirectionsConfig;
use crate::domain::Itinerary;

use super::convert::convert_response;
use super::error::RouteError;
use super::types::RouteResponse;

/// Mock route client that serves documents from JSON files.
#[derive(Clone)]
pub struct MockRouteClient {
    /// Pre-loaded documents, keyed by file stem.
    documents: Arc<RwLock<HashMap<String, RouteResponse>>>,
    directions: DirectionsConfig,
}

impl MockRouteClient {
    /// Create a mock client by loading every `*.json` file in a directory.
    ///
    /// A file named `commons.json` is served under the key `"commons"`.
    pub fn new(
        data_dir: impl AsRef<Path>,
        directions: DirectionsConfig,
    ) -> Result<Self, RouteError> {
        let documents = load_documents(data_dir.as_ref())?;

        Ok(Self {
            documents: Arc::new(RwLock::new(documents)),
            directions,
        })
    }

    /// Finalize the itineraries stored under `key`.
    ///
    /// Mimics `RouteClient::get_routes`; name overrides are applied the
    /// same way.
    pub async fn get_routes(
        &self,
        key: &str,
        start_name: Option<&str>,
        end_name: Option<&str>,
    ) -> Result<Vec<Itinerary>, RouteError> {
        let documents = self.documents.read().await;

        let response = documents.get(key).ok_or_else(|| RouteError::Api {
            status: 404,
            message: format!(
                "No mock route {key}. Available: {:?}",
                documents.keys().collect::<Vec<_>>()
            ),
        })?;

        convert_response(response, start_name, end_name, &self.directions)
    }

    /// List available document keys, sorted.
    pub async fn available_routes(&self) -> Vec<String> {
        let documents = self.documents.read().await;
        let mut keys: Vec<String> = documents.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Reload documents from disk.
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<usize, RouteError> {
        let fresh = load_documents(data_dir.as_ref())?;
        let count = fresh.len();
        *self.documents.write().await = fresh;
        Ok(count)
    }
}

fn load_documents(data_dir: &Path) -> Result<HashMap<String, RouteResponse>, RouteError> {
    let mut documents = HashMap::new();

    for entry in std::fs::read_dir(data_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(RouteError::malformed(
                format!("invalid filename: {}", path.display()),
                None,
            ));
        };

        let json = std::fs::read_to_string(&path)?;
        let response: RouteResponse = serde_json::from_str(&json).map_err(|e| {
            RouteError::malformed(format!("{}: {e}", path.display()), Some(&json))
        })?;

        debug!(key, "loaded mock route document");
        documents.insert(key.to_string(), response);
    }

    if documents.is_empty() {
        return Err(RouteError::Api {
            status: 0,
            message: format!("No mock route files found in {}", data_dir.display()),
        });
    }

    Ok(documents)
}
