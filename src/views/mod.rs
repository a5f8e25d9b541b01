pub mod investigations;
pub mod patient_card;
pub mod placeholder;
pub mod report_card;
pub mod reports_grid;
pub mod viewer_modal;

pub use investigations::investigations_tab;
pub use patient_card::patient_card;
pub use placeholder::placeholder_panel;
pub use reports_grid::reports_grid;
pub use viewer_modal::viewer_modal;
