use crate::{date_utils::format_updated, genre_service::GenreService, models::Podcast};

/// Text and image source a card displays for one podcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub image: String,
    pub alt_text: String,
    pub title: String,
    pub seasons: String,
    pub genres: Vec<String>,
    pub updated: String,
}

impl CardContent {
    pub fn new(podcast: &Podcast, genres: &GenreService) -> Self {
        Self {
            image: podcast.image.clone(),
            alt_text: format!("{} cover", podcast.title),
            title: podcast.title.clone(),
            seasons: seasons_label(podcast.seasons),
            genres: genres.names(&podcast.genres),
            updated: format_updated(&podcast.updated),
        }
    }
}

pub fn seasons_label(seasons: u32) -> String {
    if seasons == 1 {
        "1 season".to_string()
    } else {
        format!("{} seasons", seasons)
    }
}
