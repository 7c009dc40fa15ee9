pub mod podcast;
pub mod podcast_model;

pub use podcast::{Genre, GenreId, Podcast};
pub use podcast_model::PodcastModel;
