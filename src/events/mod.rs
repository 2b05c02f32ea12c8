pub mod buttons;
pub mod menu;
pub mod wheel;

pub use buttons::wire_carousel_buttons;
pub use menu::wire_menu_clicks;
pub use wheel::wire_wheel;
