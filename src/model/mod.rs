pub mod patient;
pub mod report;
pub mod sample;
pub mod tabs;
pub mod viewer;

pub use patient::Patient;
pub use report::{FileKind, Report, ViewMode};
pub use tabs::{Tab, TabDescriptor, TABS};
pub use viewer::ViewerFile;
