pub mod card_content;
pub mod image_utils;
pub mod list_helpers;
pub mod podcast_card;
pub mod podcast_grid;
pub mod podcast_modal;
pub mod tags;
pub mod widget_ext;
pub mod window;
