use crate::models::{Genre, GenreId};

/// Label used for genre ids missing from the genre set.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Resolves genre ids against the static genre set.
#[derive(Debug, Clone, Default)]
pub struct GenreService {
    genres: Vec<Genre>,
}

impl GenreService {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }

    /// Title for `id`, or [`UNKNOWN_GENRE`] when it does not resolve to a titled genre.
    pub fn name(&self, id: GenreId) -> &str {
        self.genres
            .iter()
            .find(|genre| genre.id == id)
            .map(|genre| genre.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(UNKNOWN_GENRE)
    }

    /// Same length and order as `genre_ids`.
    pub fn names(&self, genre_ids: &[GenreId]) -> Vec<String> {
        genre_ids
            .iter()
            .map(|id| self.name(*id).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> GenreService {
        GenreService::new(vec![
            Genre::new(1, "Personal Growth"),
            Genre::new(2, "Investigative Journalism"),
            Genre::new(3, "History"),
        ])
    }

    #[test]
    fn test_names_resolves_in_order() {
        assert_eq!(
            service().names(&[3, 1]),
            vec!["History".to_string(), "Personal Growth".to_string()]
        );
    }

    #[test]
    fn test_names_unknown_id_keeps_position() {
        assert_eq!(
            service().names(&[2, 42, 3]),
            vec![
                "Investigative Journalism".to_string(),
                UNKNOWN_GENRE.to_string(),
                "History".to_string()
            ]
        );
    }

    #[test]
    fn test_names_same_length_as_input() {
        let ids = [1, 1, 99, 2, 0, 3];
        let names = service().names(&ids);
        assert_eq!(names.len(), ids.len());
        for (id, name) in ids.iter().zip(&names) {
            let expected = match id {
                1 => "Personal Growth",
                2 => "Investigative Journalism",
                3 => "History",
                _ => UNKNOWN_GENRE,
            };
            assert_eq!(name, expected);
        }
    }

    #[test]
    fn test_names_empty_input() {
        assert!(service().names(&[]).is_empty());
    }

    #[test]
    fn test_empty_service_resolves_everything_to_unknown() {
        let names = GenreService::default().names(&[1, 2]);
        assert_eq!(names, vec![UNKNOWN_GENRE, UNKNOWN_GENRE]);
    }

    #[test]
    fn test_untitled_genre_is_unknown() {
        let service = GenreService::new(vec![Genre::new(5, "")]);
        assert_eq!(service.name(5), UNKNOWN_GENRE);
    }
}
