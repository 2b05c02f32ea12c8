/// The handful of DOM mutations the navigation components perform.
///
/// The web build implements this for `web_sys::HtmlElement`; host tests use an
/// in-memory element. Handles are cheap clones of a shared node, so `&self`
/// is enough for mutation.
pub trait ElementHandle {
    fn set_class(&self, class: &str, on: bool);
    fn has_class(&self, class: &str) -> bool;
    fn set_style(&self, property: &str, value: &str);
}
