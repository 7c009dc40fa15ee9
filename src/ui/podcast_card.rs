use std::rc::Rc;

use glib::Object;
use gtk::{glib, prelude::*, subclass::prelude::*};
use log::debug;

use crate::{
    genre_service::GenreService,
    models::PodcastModel,
    ui::{card_content::CardContent, image_utils::set_cover, tags::fill_tags},
};

glib::wrapper! {
    pub struct PodcastCard(ObjectSubclass<imp::PodcastCard>)
    @extends gtk::Widget, gtk::Box,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

/// Preview card for one podcast. Emits `podcast-selected` with its
/// [`PodcastModel`] when the card surface is clicked.
impl PodcastCard {
    pub fn new(genres: Rc<GenreService>) -> Self {
        let card: Self = Object::builder().build();
        card.imp().genres.replace(genres);
        card
    }

    /// Stores the podcast and re-renders, replacing whatever was shown before.
    pub fn set_podcast(&self, podcast: &PodcastModel) {
        self.imp().podcast.replace(Some(podcast.clone()));
        self.render();
    }

    pub fn podcast(&self) -> Option<PodcastModel> {
        self.imp().podcast.borrow().clone()
    }

    fn render(&self) {
        let Some(model) = self.podcast() else {
            return;
        };
        let imp = self.imp();
        let content = CardContent::new(model.podcast(), &imp.genres.borrow());

        set_cover(&imp.image, &content.image, &content.alt_text);
        imp.title_label.set_text(&content.title);
        imp.seasons_label.set_text(&content.seasons);
        fill_tags(&imp.tags, &content.genres);
        imp.updated_label.set_text(&content.updated);
    }

    /// Emits `podcast-selected` for the stored podcast. Does nothing while empty.
    pub fn select(&self) {
        let Some(podcast) = self.podcast() else {
            return;
        };
        debug!("podcast clicked: {}", podcast.title());
        self.emit_by_name::<()>("podcast-selected", &[&podcast]);
    }

    pub fn connect_podcast_selected<F>(&self, f: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &PodcastModel) + 'static,
    {
        self.connect_closure(
            "podcast-selected",
            false,
            glib::closure_local!(move |card: PodcastCard, podcast: PodcastModel| {
                f(&card, &podcast);
            }),
        )
    }
}

impl Default for PodcastCard {
    fn default() -> Self {
        Self::new(Rc::default())
    }
}

mod imp {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::OnceLock,
    };

    use glib::subclass::{InitializingObject, Signal};
    use gtk::{
        CompositeTemplate,
        glib::{self},
        prelude::*,
        subclass::prelude::*,
    };

    use crate::{genre_service::GenreService, models::PodcastModel};

    #[derive(CompositeTemplate, Default)]
    #[template(resource = "/io/github/podgrid/Podgrid/ui/podcast_card.ui")]
    pub struct PodcastCard {
        #[template_child]
        pub card: TemplateChild<gtk::Box>,
        #[template_child]
        pub image: TemplateChild<gtk::Picture>,
        #[template_child]
        pub title_label: TemplateChild<gtk::Label>,
        #[template_child]
        pub seasons_label: TemplateChild<gtk::Label>,
        #[template_child]
        pub tags: TemplateChild<gtk::FlowBox>,
        #[template_child]
        pub updated_label: TemplateChild<gtk::Label>,

        pub podcast: RefCell<Option<PodcastModel>>,
        pub genres: RefCell<Rc<GenreService>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PodcastCard {
        const NAME: &'static str = "PodgridPodcastCard";
        type Type = super::PodcastCard;
        type ParentType = gtk::Box;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
            // Card styles are written against this node name only.
            klass.set_css_name("podcast-card");
        }

        fn instance_init(obj: &InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for PodcastCard {
        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<Vec<Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    Signal::builder("podcast-selected")
                        .param_types([PodcastModel::static_type()])
                        .build(),
                ]
            })
        }

        fn constructed(&self) {
            self.parent_constructed();
            self.card.set_cursor_from_name(Some("pointer"));

            let click = gtk::GestureClick::new();
            click.connect_released(glib::clone!(
                #[weak(rename_to = podcast_card)]
                self.obj(),
                move |gesture, _, _, _| {
                    gesture.set_state(gtk::EventSequenceState::Claimed);
                    podcast_card.select();
                }
            ));
            self.card.add_controller(click);
        }
    }

    impl WidgetImpl for PodcastCard {}
    impl BoxImpl for PodcastCard {}
}
