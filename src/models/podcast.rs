use serde::Deserialize;

pub type GenreId = u32;

/// One podcast as described by the catalog. Never mutated after loading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Podcast {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    pub seasons: u32,
    #[serde(default)]
    pub genres: Vec<GenreId>,
    pub updated: String,
}

impl AsRef<Podcast> for Podcast {
    fn as_ref(&self) -> &Podcast {
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
impl Genre {
    pub fn new(id: GenreId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_podcast_with_optional_fields_missing() {
        let json = r#"{
            "title": "The Ancients",
            "image": "https://example.com/a.jpg",
            "seasons": 10,
            "genres": [3],
            "updated": "2022-11-05T08:30:00.000Z"
        }"#;
        let podcast: Podcast = serde_json::from_str(json).unwrap();
        assert_eq!(podcast.title, "The Ancients");
        assert_eq!(podcast.seasons, 10);
        assert_eq!(podcast.genres, vec![3]);
        assert!(podcast.id.is_empty());
        assert!(podcast.description.is_empty());
    }

    #[test]
    fn test_deserialize_podcast_requires_title() {
        let json = r#"{ "image": "", "seasons": 1, "updated": "2023-05-01" }"#;
        assert!(serde_json::from_str::<Podcast>(json).is_err());
    }

    #[test]
    fn test_deserialize_genre() {
        let genre: Genre = serde_json::from_str(r#"{ "id": 4, "title": "Comedy" }"#).unwrap();
        assert_eq!(genre, Genre::new(4, "Comedy"));
    }
}
