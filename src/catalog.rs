use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::{
    config,
    genre_service::GenreService,
    models::{Genre, Podcast},
};

static BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Skip entries that do not deserialize so one bad record does not hide the rest of the catalog.
fn deserialize_items_skip_errors<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    let result: Vec<T> = items
        .into_iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(d_item) => Some(d_item),
            Err(e) => {
                log::warn!("Failed to deserialize catalog entry, skipping: {}", e);
                None
            }
        })
        .collect();

    Ok(result)
}

/// Podcasts and genres shown by the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "deserialize_items_skip_errors")]
    pub podcasts: Vec<Podcast>,
    #[serde(default, deserialize_with = "deserialize_items_skip_errors")]
    pub genres: Vec<Genre>,
}

impl Catalog {
    /// Loads the configured catalog file, or the bundled catalog when none is configured.
    pub fn load() -> Result<Self, CatalogError> {
        match config::catalog_path() {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_path(&path)
            }
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn genre_service(&self) -> GenreService {
        GenreService::new(self.genres.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre_service::UNKNOWN_GENRE;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.podcasts.is_empty());
        assert!(!catalog.genres.is_empty());
    }

    #[test]
    fn test_bundled_genres_all_resolve() {
        let catalog = Catalog::bundled().unwrap();
        let genres = catalog.genre_service();
        for podcast in &catalog.podcasts {
            assert!(
                !genres
                    .names(&podcast.genres)
                    .iter()
                    .any(|name| name == UNKNOWN_GENRE),
                "{} references an unknown genre",
                podcast.title
            );
        }
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let json = r#"{
            "genres": [{ "id": 1, "title": "History" }, { "title": "no id" }],
            "podcasts": [
                { "title": "Good", "image": "", "seasons": 2, "genres": [1], "updated": "2023-05-01" },
                { "title": "Missing seasons", "image": "", "genres": [], "updated": "2023-05-01" }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.podcasts.len(), 1);
        assert_eq!(catalog.podcasts[0].title, "Good");
        assert_eq!(catalog.genres, vec![Genre::new(1, "History")]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.podcasts.is_empty());
        assert!(catalog.genres.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json("{ podcasts: ").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/podgrid/catalog.json");
        match Catalog::from_path(path) {
            Err(CatalogError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
