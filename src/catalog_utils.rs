use std::cmp::Ordering;

use crate::{date_utils::parse_date, models::Podcast};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    RecentlyUpdated,
    TitleAscending,
    TitleDescending,
}

impl SortOption {
    /// Maps a position in the sort drop-down to its option.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => SortOption::TitleAscending,
            2 => SortOption::TitleDescending,
            _ => SortOption::RecentlyUpdated,
        }
    }
}

fn compare_titles(a: &Podcast, b: &Podcast) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Newest first; unparseable dates go last.
fn compare_updated(a: &Podcast, b: &Podcast) -> Ordering {
    match (parse_date(&a.updated).ok(), parse_date(&b.updated).ok()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, so equal keys keep catalog order.
pub fn sort_podcasts<T: AsRef<Podcast>>(items: &mut [T], sort: SortOption) {
    match sort {
        SortOption::RecentlyUpdated => {
            items.sort_by(|a, b| compare_updated(a.as_ref(), b.as_ref()))
        }
        SortOption::TitleAscending => items.sort_by(|a, b| compare_titles(a.as_ref(), b.as_ref())),
        SortOption::TitleDescending => {
            items.sort_by(|a, b| compare_titles(b.as_ref(), a.as_ref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn podcast(title: &str, updated: &str) -> Podcast {
        Podcast {
            title: title.to_string(),
            updated: updated.to_string(),
            seasons: 1,
            ..Default::default()
        }
    }

    fn titles(podcasts: &[Podcast]) -> Vec<&str> {
        podcasts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_recently_updated() {
        let mut podcasts = vec![
            podcast("Old", "2020-01-01"),
            podcast("Broken", "not a date"),
            podcast("New", "2023-05-01T10:00:00Z"),
            podcast("Middle", "2021-06-15"),
        ];
        sort_podcasts(&mut podcasts, SortOption::RecentlyUpdated);
        assert_eq!(titles(&podcasts), vec!["New", "Middle", "Old", "Broken"]);
    }

    #[test]
    fn test_sort_titles_ignore_case() {
        let mut podcasts = vec![
            podcast("banana", "2020-01-01"),
            podcast("Apple", "2020-01-01"),
            podcast("cherry", "2020-01-01"),
        ];
        sort_podcasts(&mut podcasts, SortOption::TitleAscending);
        assert_eq!(titles(&podcasts), vec!["Apple", "banana", "cherry"]);
        sort_podcasts(&mut podcasts, SortOption::TitleDescending);
        assert_eq!(titles(&podcasts), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut podcasts = vec![
            podcast("First", "2022-01-01"),
            podcast("Second", "2022-01-01"),
            podcast("Third", "2022-01-01"),
        ];
        sort_podcasts(&mut podcasts, SortOption::RecentlyUpdated);
        assert_eq!(titles(&podcasts), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(SortOption::from_index(0), SortOption::RecentlyUpdated);
        assert_eq!(SortOption::from_index(1), SortOption::TitleAscending);
        assert_eq!(SortOption::from_index(2), SortOption::TitleDescending);
        assert_eq!(SortOption::from_index(7), SortOption::RecentlyUpdated);
    }
}
