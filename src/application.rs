use std::rc::Rc;

use adw::subclass::prelude::ObjectSubclassIsExt;
use glib::Object;
use gtk::{gio, glib};
use log::{error, info};

use crate::catalog::Catalog;
use crate::config;
use crate::genre_service::GenreService;

glib::wrapper! {
    pub struct Application(ObjectSubclass<imp::Application>)
    @extends gio::Application, gtk::Application, adw::Application,
    @implements gio::ActionGroup, gio::ActionMap;
}

impl Application {
    pub fn new() -> Self {
        let app: Self = Object::builder()
            .property("application-id", config::APP_ID)
            .build();
        app.load_catalog();
        app
    }

    /// Loads the catalog. On failure the application keeps running with an empty one.
    pub fn load_catalog(&self) {
        let imp = self.imp();
        match Catalog::load() {
            Ok(catalog) => {
                info!(
                    "Loaded {} podcasts and {} genres",
                    catalog.podcasts.len(),
                    catalog.genres.len()
                );
                imp.genres.replace(Rc::new(catalog.genre_service()));
                imp.catalog.replace(Rc::new(catalog));
                imp.load_error.replace(None);
            }
            Err(err) => {
                error!("Failed to load podcast catalog: {}", err);
                imp.genres.replace(Rc::default());
                imp.catalog.replace(Rc::default());
                imp.load_error.replace(Some(err.to_string()));
            }
        }
    }

    pub fn catalog(&self) -> Rc<Catalog> {
        self.imp().catalog.borrow().clone()
    }

    pub fn genres(&self) -> Rc<GenreService> {
        self.imp().genres.borrow().clone()
    }

    pub fn load_error(&self) -> Option<String> {
        self.imp().load_error.borrow().clone()
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

mod imp {
    use adw::subclass::prelude::*;
    use gtk::{
        gio::{ActionEntry, prelude::ActionMapExtManual},
        glib,
        prelude::*,
    };
    use std::{cell::RefCell, rc::Rc};

    use crate::catalog::Catalog;
    use crate::genre_service::GenreService;

    #[derive(Default)]
    pub struct Application {
        pub catalog: RefCell<Rc<Catalog>>,
        pub genres: RefCell<Rc<GenreService>>,
        pub load_error: RefCell<Option<String>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Application {
        const NAME: &'static str = "PodgridApplication";
        type Type = super::Application;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for Application {}

    impl ApplicationImpl for Application {
        fn startup(&self) {
            self.parent_startup();
            let app = self.obj();
            let action_quit = ActionEntry::builder("quit")
                .activate(|app: &super::Application, _, _| app.quit())
                .build();
            app.add_action_entries([action_quit]);
            app.set_accels_for_action("app.quit", &["<primary>q"]);
        }
    }

    impl GtkApplicationImpl for Application {}
    impl AdwApplicationImpl for Application {}
}
