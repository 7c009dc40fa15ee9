use std::rc::Rc;

use adw::prelude::*;
use glib::Object;
use gtk::{glib, subclass::prelude::*};
use log::{debug, warn};

use crate::{
    genre_service::GenreService,
    models::PodcastModel,
    ui::{card_content::CardContent, image_utils::set_cover, tags::fill_tags},
};

glib::wrapper! {
    pub struct PodcastModal(ObjectSubclass<imp::PodcastModal>)
    @extends gtk::Widget, adw::Dialog,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

/// Detail view for the selected podcast. One instance is reused for every selection.
impl PodcastModal {
    pub fn new() -> Self {
        Object::builder().build()
    }

    pub fn set_genre_service(&self, genres: Rc<GenreService>) {
        self.imp().genres.replace(genres);
    }

    pub fn is_open(&self) -> bool {
        self.imp().is_open.get()
    }

    /// Shows `podcast`, presenting the dialog over `parent` unless it is already open.
    pub fn open(&self, podcast: &PodcastModel, parent: &impl IsA<gtk::Widget>) {
        self.show_podcast(podcast);
        if self.is_open() {
            return;
        }
        self.imp().is_open.set(true);
        self.present(Some(parent));
    }

    /// Safe to call when nothing is shown.
    pub fn close(&self) {
        if !self.is_open() {
            debug!("Podcast details already closed");
            return;
        }
        if !AdwDialogExt::close(self) {
            warn!("Podcast details refused to close");
        }
    }

    fn show_podcast(&self, model: &PodcastModel) {
        let imp = self.imp();
        let podcast = model.podcast();
        let content = CardContent::new(podcast, &imp.genres.borrow());

        imp.window_title.set_title(&content.title);
        set_cover(&imp.image, &content.image, &content.alt_text);
        imp.title_label.set_text(&content.title);
        imp.description_label.set_text(&podcast.description);
        imp.description_label
            .set_visible(!podcast.description.is_empty());
        fill_tags(&imp.tags, &content.genres);
        imp.seasons_label.set_text(&content.seasons);
        imp.updated_label.set_text(&content.updated);
    }
}

impl Default for PodcastModal {
    fn default() -> Self {
        Self::new()
    }
}

mod imp {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use adw::{prelude::*, subclass::prelude::*};
    use gtk::{
        CompositeTemplate,
        glib::{self, subclass::InitializingObject},
    };

    use crate::genre_service::GenreService;

    #[derive(CompositeTemplate, Default)]
    #[template(resource = "/io/github/podgrid/Podgrid/ui/podcast_modal.ui")]
    pub struct PodcastModal {
        #[template_child]
        pub window_title: TemplateChild<adw::WindowTitle>,
        #[template_child]
        pub image: TemplateChild<gtk::Picture>,
        #[template_child]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child]
        pub description_label: TemplateChild<gtk::Label>,
        #[template_child]
        pub tags: TemplateChild<gtk::FlowBox>,
        #[template_child]
        pub seasons_label: TemplateChild<gtk::Label>,
        #[template_child]
        pub updated_label: TemplateChild<gtk::Label>,

        pub genres: RefCell<Rc<GenreService>>,
        pub is_open: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PodcastModal {
        const NAME: &'static str = "PodgridPodcastModal";
        type Type = super::PodcastModal;
        type ParentType = adw::Dialog;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
            klass.set_css_name("podcast-modal");
        }

        fn instance_init(obj: &InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for PodcastModal {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().connect_closed(|modal| {
                modal.imp().is_open.set(false);
            });
        }
    }

    impl WidgetImpl for PodcastModal {}

    impl AdwDialogImpl for PodcastModal {}
}
