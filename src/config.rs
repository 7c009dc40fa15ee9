use gtk::gio::{self, prelude::SettingsExt};
use gtk::glib;
use log::warn;
use std::{cell::OnceCell, path::PathBuf};

pub static APP_ID: &str = "io.github.podgrid.Podgrid";

/// Overrides the `catalog-path` setting when set to a non-empty value.
pub static CATALOG_ENV: &str = "PODGRID_CATALOG";

const DEFAULT_WIDTH: i32 = 1024;
const DEFAULT_HEIGHT: i32 = 768;

thread_local! {
    static SETTINGS: OnceCell<Option<gio::Settings>> = const { OnceCell::new() };
}

/// Returns the application settings, or `None` when the schema is not installed.
/// Lookup happens at most once per thread.
pub fn settings() -> Option<gio::Settings> {
    SETTINGS.with(|s| {
        s.get_or_init(|| {
            let installed = gio::SettingsSchemaSource::default()
                .and_then(|source| source.lookup(APP_ID, true))
                .is_some();
            if installed {
                Some(gio::Settings::new(APP_ID))
            } else {
                warn!("Settings schema {} not installed, using defaults", APP_ID);
                None
            }
        })
        .clone()
    })
}

pub fn catalog_path() -> Option<PathBuf> {
    let from_env = std::env::var(CATALOG_ENV).ok();
    let from_settings = settings().map(|s| s.string("catalog-path").to_string());
    resolve_catalog_path(from_env, from_settings)
}

fn resolve_catalog_path(from_env: Option<String>, from_settings: Option<String>) -> Option<PathBuf> {
    from_env
        .into_iter()
        .chain(from_settings)
        .map(|path| path.trim().to_string())
        .find(|path| !path.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            maximized: false,
        }
    }
}

impl WindowState {
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            width: if self.width <= 0 { defaults.width } else { self.width },
            height: if self.height <= 0 { defaults.height } else { self.height },
            maximized: self.maximized,
        }
    }
}

pub fn window_state() -> WindowState {
    let Some(settings) = settings() else {
        return WindowState::default();
    };
    WindowState {
        width: settings.int("window-width"),
        height: settings.int("window-height"),
        maximized: settings.boolean("window-maximized"),
    }
    .sanitized()
}

pub fn save_window_state(state: WindowState) -> Result<(), glib::BoolError> {
    let Some(settings) = settings() else {
        return Ok(());
    };
    settings.set_int("window-width", state.width)?;
    settings.set_int("window-height", state.height)?;
    settings.set_boolean("window-maximized", state.maximized)?;
    Ok(())
}
