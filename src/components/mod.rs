pub mod segmented_toggle;
pub mod tab_bar;

pub use segmented_toggle::view_mode_toggle;
pub use tab_bar::tab_bar;
