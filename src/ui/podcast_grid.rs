use std::rc::Rc;

use glib::Object;
use gtk::{
    gio,
    glib::{self},
    prelude::*,
    subclass::prelude::*,
};
use log::{debug, warn};

use crate::{
    catalog_utils::{SortOption, sort_podcasts},
    genre_service::GenreService,
    models::{Podcast, PodcastModel},
    ui::{
        list_helpers::{apply_filter_search, create_string_filter},
        podcast_card::PodcastCard,
        widget_ext::WidgetWindowExt,
        window::Window,
    },
};

glib::wrapper! {
    pub struct PodcastGrid(ObjectSubclass<imp::PodcastGrid>)
    @extends gtk::Widget, gtk::Box,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl PodcastGrid {
    pub fn new() -> Self {
        Object::builder().build()
    }

    /// Genre set handed to every card created from now on.
    pub fn set_genre_service(&self, genres: Rc<GenreService>) {
        self.imp().genres.replace(genres);
    }

    /// Shows one card per podcast, replacing the previous contents.
    pub fn render(&self, podcasts: &[Podcast]) {
        let models: Vec<PodcastModel> = podcasts.iter().cloned().map(PodcastModel::new).collect();
        self.imp().models.replace(models);
        self.refresh();
    }

    pub fn connect_podcast_selected<F>(&self, f: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &PodcastModel) + 'static,
    {
        self.connect_closure(
            "podcast-selected",
            false,
            glib::closure_local!(move |grid: PodcastGrid, podcast: PodcastModel| {
                f(&grid, &podcast);
            }),
        )
    }

    pub fn search_changed(&self, query: &str) {
        let filter = self
            .imp()
            .title_filter
            .get()
            .expect("Title filter should be initialized");
        apply_filter_search(query, filter);
    }

    fn sort_changed(&self, sort: SortOption) {
        debug!("Sorting podcasts by {:?}", sort);
        self.imp().sort.set(sort);
        self.refresh();
    }

    fn refresh(&self) {
        let imp = self.imp();
        let mut models = imp.models.borrow().clone();
        sort_podcasts(&mut models, imp.sort.get());

        let store = imp
            .store
            .get()
            .expect("PodcastGrid store should be initialized.");
        store.splice(0, store.n_items(), &models);
        self.set_empty(models.is_empty());
    }

    fn create_card(&self, podcast: &PodcastModel) -> PodcastCard {
        let card = PodcastCard::new(self.imp().genres.borrow().clone());
        card.set_podcast(podcast);
        card.connect_podcast_selected(glib::clone!(
            #[weak(rename_to = grid)]
            self,
            move |_, podcast| {
                grid.emit_by_name::<()>("podcast-selected", &[podcast]);
            }
        ));
        card
    }

    fn setup_model(&self) {
        let imp = self.imp();
        let store = gio::ListStore::new::<PodcastModel>();
        let title_filter = create_string_filter::<PodcastModel>("title");
        let filter_model = gtk::FilterListModel::new(Some(store.clone()), Some(title_filter.clone()));
        imp.store
            .set(store)
            .expect("Store should only be set once");
        imp.title_filter
            .set(title_filter)
            .expect("Title filter should only be set once");

        imp.flow_box.bind_model(
            Some(&filter_model),
            glib::clone!(
                #[weak(rename_to = grid)]
                self,
                #[upgrade_or_panic]
                move |item| {
                    let podcast = item
                        .downcast_ref::<PodcastModel>()
                        .expect("Item should be a PodcastModel");
                    grid.create_card(podcast).upcast::<gtk::Widget>()
                }
            ),
        );
    }

    /// Hooks the window's `search`/`sort` toggles up once, however often the grid is realized.
    fn setup_search_sort_connection(&self) {
        if self.imp().window_connected.get() {
            return;
        }
        let Some(window) = self.get_root_window() else {
            warn!("Podcast grid is not inside the main window");
            return;
        };
        self.imp().window_connected.set(true);

        window.connect_closure(
            "search",
            false,
            glib::closure_local!(
                #[weak(rename_to = grid)]
                self,
                move |_: Window| {
                    let imp = grid.imp();
                    imp.search_bar.set_search_mode(!imp.search_bar.is_search_mode());
                    imp.sort_bar.set_search_mode(false);
                }
            ),
        );

        window.connect_closure(
            "sort",
            false,
            glib::closure_local!(
                #[weak(rename_to = grid)]
                self,
                move |_: Window| {
                    let imp = grid.imp();
                    imp.sort_bar.set_search_mode(!imp.sort_bar.is_search_mode());
                    imp.search_bar.set_search_mode(false);
                }
            ),
        );
    }

    fn set_empty(&self, empty: bool) {
        self.imp().empty.set_visible(empty);
        self.imp().scroller.set_visible(!empty);
    }
}

impl Default for PodcastGrid {
    fn default() -> Self {
        Self::new()
    }
}

mod imp {
    use std::{
        cell::{Cell, OnceCell, RefCell},
        rc::Rc,
        sync::OnceLock,
    };

    use adw::subclass::prelude::*;
    use glib::subclass::{InitializingObject, Signal};
    use gtk::{CompositeTemplate, gio, glib, prelude::*};

    use crate::{
        catalog_utils::SortOption,
        genre_service::GenreService,
        models::PodcastModel,
    };

    #[derive(CompositeTemplate, Default)]
    #[template(resource = "/io/github/podgrid/Podgrid/ui/podcast_grid.ui")]
    pub struct PodcastGrid {
        #[template_child]
        pub flow_box: TemplateChild<gtk::FlowBox>,
        #[template_child]
        pub scroller: TemplateChild<gtk::ScrolledWindow>,
        #[template_child]
        pub empty: TemplateChild<adw::StatusPage>,
        #[template_child]
        pub search_bar: TemplateChild<gtk::SearchBar>,
        #[template_child]
        pub search_entry: TemplateChild<gtk::SearchEntry>,
        #[template_child]
        pub sort_bar: TemplateChild<gtk::SearchBar>,
        #[template_child]
        pub sort_dropdown: TemplateChild<gtk::DropDown>,

        pub store: OnceCell<gio::ListStore>,
        pub title_filter: OnceCell<gtk::StringFilter>,
        pub models: RefCell<Vec<PodcastModel>>,
        pub genres: RefCell<Rc<GenreService>>,
        pub sort: Cell<SortOption>,
        pub window_connected: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PodcastGrid {
        const NAME: &'static str = "PodgridPodcastGrid";
        type Type = super::PodcastGrid;
        type ParentType = gtk::Box;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
        }

        fn instance_init(obj: &InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for PodcastGrid {
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
            self.obj().setup_model();
            self.obj().set_empty(true);
            self.search_bar.connect_entry(&*self.search_entry);

            self.search_entry.connect_search_changed(glib::clone!(
                #[weak(rename_to = grid)]
                self.obj(),
                move |entry| {
                    grid.search_changed(&entry.text());
                }
            ));

            self.sort_dropdown.connect_selected_notify(glib::clone!(
                #[weak(rename_to = grid)]
                self.obj(),
                move |drop_down| {
                    grid.sort_changed(SortOption::from_index(drop_down.selected()));
                }
            ));

            self.obj().connect_realize(glib::clone!(
                #[weak(rename_to = grid)]
                self.obj(),
                move |_| {
                    grid.setup_search_sort_connection();
                }
            ));
        }
    }

    impl WidgetImpl for PodcastGrid {}
    impl BoxImpl for PodcastGrid {}
}
