use gtk::{PropertyExpression, StringFilter, glib, prelude::*};

/// Create a string filter for a given property
pub fn create_string_filter<T>(property: &str) -> gtk::StringFilter
where
    T: glib::object::IsA<glib::Object> + 'static,
{
    let expression = PropertyExpression::new(T::static_type(), None::<&gtk::Expression>, property);
    let filter = StringFilter::new(Some(expression));
    filter.set_ignore_case(true);
    filter.set_match_mode(gtk::StringFilterMatchMode::Substring);
    filter
}

/// An empty query matches everything.
pub fn apply_filter_search(query: &str, filter: &gtk::StringFilter) {
    let query = query.trim();
    if query.is_empty() {
        filter.set_search(None);
    } else {
        filter.set_search(Some(query));
    }
}
