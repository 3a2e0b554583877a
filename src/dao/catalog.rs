//! Sources for the built-in game catalog document.

use std::path::PathBuf;

use thiserror::Error;

use crate::dao::models::GameDefinitionEntity;

/// Catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../config/games.json");

/// Failures raised while fetching or decoding the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog file `{}`", path.display())]
    Read {
        /// Catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Document is not a list of game definitions.
    #[error("failed to decode catalog from {origin}")]
    Decode {
        /// Where the document came from.
        origin: String,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// HTTP fetch failed.
    #[cfg(feature = "remote-catalog")]
    #[error("failed to fetch catalog from `{url}`")]
    Fetch {
        /// Catalog URL.
        url: String,
        /// HTTP client error.
        #[source]
        source: reqwest::Error,
    },
    /// A URL was configured but the build cannot fetch it.
    #[error("remote catalog `{url}` requires the `remote-catalog` feature")]
    RemoteDisabled { url: String },
}

/// Where the built-in catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The `games.json` document compiled into the binary.
    Embedded,
    /// A JSON document on disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Remote(String),
}

impl CatalogSource {
    /// Fetch and decode the catalog document.
    pub async fn fetch(&self) -> Result<Vec<GameDefinitionEntity>, CatalogError> {
        match self {
            CatalogSource::Embedded => decode(EMBEDDED_CATALOG, "embedded catalog"),
            CatalogSource::File(path) => {
                let contents = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Read {
                        path: path.clone(),
                        source,
                    })?;
                decode(&contents, &format!("`{}`", path.display()))
            }
            CatalogSource::Remote(url) => fetch_remote(url).await,
        }
    }

    /// Short human readable description used in logs.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Embedded => "embedded".into(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Remote(url) => url.clone(),
        }
    }
}

fn decode(contents: &str, origin: &str) -> Result<Vec<GameDefinitionEntity>, CatalogError> {
    serde_json::from_str(contents).map_err(|source| CatalogError::Decode {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(feature = "remote-catalog")]
async fn fetch_remote(url: &str) -> Result<Vec<GameDefinitionEntity>, CatalogError> {
    let fetch_err = |source| CatalogError::Fetch {
        url: url.to_string(),
        source,
    };

    reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(fetch_err)?
        .json::<Vec<GameDefinitionEntity>>()
        .await
        .map_err(fetch_err)
}

#[cfg(not(feature = "remote-catalog"))]
async fn fetch_remote(url: &str) -> Result<Vec<GameDefinitionEntity>, CatalogError> {
    Err(CatalogError::RemoteDisabled {
        url: url.to_string(),
    })
}
