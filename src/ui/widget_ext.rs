use gtk::glib;
use gtk::prelude::*;

use crate::ui::window::Window;

pub trait WidgetWindowExt {
    fn get_root_window(&self) -> Option<Window>;
}

impl<W> WidgetWindowExt for W
where
    W: glib::object::IsA<gtk::Widget>,
{
    fn get_root_window(&self) -> Option<Window> {
        self.root()?.dynamic_cast::<Window>().ok()
    }
}
