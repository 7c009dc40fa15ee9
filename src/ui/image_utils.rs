use gtk::{gio, prelude::*};
use log::debug;

const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Local file backing a cover image. Remote covers are not fetched.
pub fn cover_file(image: &str) -> Option<gio::File> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    let lowercase = image.to_ascii_lowercase();
    if REMOTE_SCHEMES.iter().any(|scheme| lowercase.starts_with(scheme)) {
        debug!("Skipping remote cover {}", image);
        None
    } else if image.contains("://") {
        Some(gio::File::for_uri(image))
    } else {
        Some(gio::File::for_path(image))
    }
}

pub fn set_cover(picture: &gtk::Picture, image: &str, alt_text: &str) {
    picture.set_file(cover_file(image).as_ref());
    picture.set_alternative_text(Some(alt_text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_and_empty_have_no_file() {
        assert!(cover_file("").is_none());
        assert!(cover_file("   ").is_none());
        assert!(cover_file("https://example.com/cover.jpg").is_none());
        assert!(cover_file("HTTP://example.com/cover.jpg").is_none());
    }

    #[test]
    fn test_local_path() {
        let file = cover_file("/tmp/covers/ancients.jpg").unwrap();
        assert_eq!(
            file.path(),
            Some(std::path::PathBuf::from("/tmp/covers/ancients.jpg"))
        );
    }

    #[test]
    fn test_file_uri() {
        let file = cover_file("file:///tmp/covers/ancients.jpg").unwrap();
        assert_eq!(file.uri().as_str(), "file:///tmp/covers/ancients.jpg");
    }
}
