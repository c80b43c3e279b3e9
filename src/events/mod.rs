pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_anchor_links, wire_cta_buttons, wire_nav_links, wire_swipe};
pub use scroll::{wire_progress, wire_resize, wire_scroll};
