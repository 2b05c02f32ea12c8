pub mod arrows;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod deck;
pub mod dots;
pub mod element;
pub mod side_menu;
pub mod wheel;

pub use arrows::*;
pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use deck::*;
pub use dots::*;
pub use element::*;
pub use side_menu::*;
pub use wheel::*;
