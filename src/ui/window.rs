use crate::application::Application;
use crate::config::{self, WindowState};
use crate::models::PodcastModel;
use crate::ui::podcast_modal::PodcastModal;
use adw::{prelude::*, subclass::prelude::ObjectSubclassIsExt};
use glib::Object;
use gtk::{
    gio,
    glib::{self},
};
use log::info;

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
    @extends gtk::Widget, gtk::Window, gtk::ApplicationWindow, adw::ApplicationWindow,
            @implements gio::ActionMap, gio::ActionGroup, gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl Window {
    pub fn new(app: &Application) -> Self {
        let window: Self = Object::builder().property("application", app).build();
        window.show_catalog(app);
        window
    }

    fn show_catalog(&self, app: &Application) {
        let imp = self.imp();
        let genres = app.genres();
        let catalog = app.catalog();

        imp.grid.set_genre_service(genres.clone());
        self.modal().set_genre_service(genres);
        imp.grid.render(&catalog.podcasts);
        info!("Rendered {} podcasts", catalog.podcasts.len());

        if let Some(err) = app.load_error() {
            self.toast(&format!("Could not load podcast catalog: {}", err), None);
        }
    }

    pub fn toast(&self, title: &str, timeout: Option<u32>) {
        let mut toast = adw::Toast::builder().title(title);
        if let Some(timeout) = timeout {
            toast = toast.timeout(timeout);
        }
        self.imp().toaster.add_toast(toast.build());
    }

    #[cfg(test)]
    pub fn grid(&self) -> crate::ui::podcast_grid::PodcastGrid {
        self.imp().grid.get()
    }

    fn modal(&self) -> &PodcastModal {
        self.imp()
            .modal
            .get()
            .expect("Podcast modal should be initialized")
    }

    pub fn show_podcast_details(&self, podcast: &PodcastModel) {
        self.modal().open(podcast, self);
    }

    pub fn close_podcast_details(&self) {
        self.modal().close();
    }

    pub fn save_window_size(&self) -> Result<(), glib::BoolError> {
        let (width, height) = self.default_size();
        config::save_window_state(WindowState {
            width,
            height,
            maximized: self.is_maximized(),
        })
    }

    fn load_window_size(&self) {
        let state = config::window_state();
        self.set_default_size(state.width, state.height);
        if state.maximized {
            self.maximize();
        }
    }
}

mod imp {
    use std::{cell::OnceCell, sync::OnceLock};

    use adw::subclass::prelude::*;
    use glib::subclass::{InitializingObject, Signal};
    use gtk::{
        CompositeTemplate,
        gio::{ActionEntry, prelude::ActionMapExtManual},
        glib,
        prelude::*,
    };
    use log::warn;

    use crate::ui::{podcast_grid::PodcastGrid, podcast_modal::PodcastModal};

    #[derive(CompositeTemplate, Default)]
    #[template(resource = "/io/github/podgrid/Podgrid/ui/window.ui")]
    pub struct Window {
        #[template_child]
        pub toaster: TemplateChild<adw::ToastOverlay>,
        #[template_child]
        pub grid: TemplateChild<PodcastGrid>,
        #[template_child]
        pub search_button: TemplateChild<gtk::Button>,
        #[template_child]
        pub sort_button: TemplateChild<gtk::Button>,

        pub modal: OnceCell<PodcastModal>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "PodgridApplicationWindow";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
        }

        fn instance_init(obj: &InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().load_window_size();
            self.modal
                .set(PodcastModal::new())
                .expect("Podcast modal should only be set once");

            let action_close_details = ActionEntry::builder("close-details")
                .activate(glib::clone!(
                    #[weak(rename_to = window)]
                    self,
                    move |_, _, _| {
                        window.obj().close_podcast_details();
                    }
                ))
                .build();
            self.obj().add_action_entries([action_close_details]);

            self.grid.connect_podcast_selected(glib::clone!(
                #[weak(rename_to = window)]
                self.obj(),
                move |_, podcast| {
                    window.show_podcast_details(podcast);
                }
            ));

            self.search_button.connect_clicked(glib::clone!(
                #[weak(rename_to = window)]
                self.obj(),
                move |_| {
                    window.emit_by_name::<()>("search", &[]);
                }
            ));

            self.sort_button.connect_clicked(glib::clone!(
                #[weak(rename_to = window)]
                self.obj(),
                move |_| {
                    window.emit_by_name::<()>("sort", &[]);
                }
            ));
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<Vec<Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    Signal::builder("search").build(),
                    Signal::builder("sort").build(),
                ]
            })
        }
    }

    impl WidgetImpl for Window {}

    impl WindowImpl for Window {
        fn close_request(&self) -> glib::Propagation {
            if let Err(err) = self.obj().save_window_size() {
                warn!("Could not save window size: {}", err);
            }
            glib::Propagation::Proceed
        }
    }

    impl AdwApplicationWindowImpl for Window {}

    impl ApplicationWindowImpl for Window {}
}
