use crate::models::Podcast;
use glib::Object;
use gtk::{glib, subclass::prelude::*};

glib::wrapper! {
    pub struct PodcastModel(ObjectSubclass<imp::PodcastModel>);
}

/// Reference-counted handle to a catalog podcast, shared by the grid, its card and the modal.
impl PodcastModel {
    pub fn new(podcast: Podcast) -> Self {
        let model: Self = Object::builder()
            .property("id", podcast.id.as_str())
            .property("title", podcast.title.as_str())
            .build();
        model
            .imp()
            .podcast
            .set(podcast)
            .expect("Podcast should only be set once");
        model
    }

    pub fn podcast(&self) -> &Podcast {
        self.imp()
            .podcast
            .get()
            .expect("PodcastModel is always constructed with a podcast")
    }
}

impl AsRef<Podcast> for PodcastModel {
    fn as_ref(&self) -> &Podcast {
        self.podcast()
    }
}

mod imp {
    use glib::Properties;
    use gtk::{glib, prelude::*, subclass::prelude::*};
    use std::cell::{OnceCell, RefCell};

    use crate::models::Podcast;

    #[derive(Properties, Default)]
    #[properties(wrapper_type = super::PodcastModel)]
    pub struct PodcastModel {
        #[property(get, construct_only)]
        pub id: RefCell<String>,

        #[property(get, construct_only)]
        pub title: RefCell<String>,

        pub podcast: OnceCell<Podcast>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PodcastModel {
        const NAME: &'static str = "PodgridPodcastModel";
        type Type = super::PodcastModel;
        type ParentType = glib::Object;
    }

    #[glib::derived_properties]
    impl ObjectImpl for PodcastModel {}
}
