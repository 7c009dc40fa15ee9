use gtk::prelude::*;

/// Replaces every tag in `flow_box` with one label per name, in order.
pub fn fill_tags(flow_box: &gtk::FlowBox, names: &[String]) {
    flow_box.remove_all();
    for name in names {
        let tag = gtk::Label::new(Some(name));
        tag.add_css_class("tag");
        flow_box.append(&tag);
    }
}

#[cfg(test)]
pub fn tag_names(flow_box: &gtk::FlowBox) -> Vec<String> {
    let mut names = Vec::new();
    let mut child = flow_box.first_child();
    while let Some(widget) = child {
        if let Some(label) = widget
            .downcast_ref::<gtk::FlowBoxChild>()
            .and_then(|flow_child| flow_child.child())
            .and_downcast::<gtk::Label>()
        {
            names.push(label.text().to_string());
        }
        child = widget.next_sibling();
    }
    names
}
