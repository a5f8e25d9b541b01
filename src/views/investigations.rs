use crate::components::view_mode_toggle;
use crate::message::Message;
use crate::model::{Report, ViewMode};
use crate::views::reports_grid;
use iced::widget::{button, column, row, scrollable, Space};
use iced::{Alignment, Element, Length};

/// Investigations tab: upload entry point, grid/list toggle, and the
/// report browser. The view mode is owned by the host and passed
/// through to the grid unchanged.
pub fn investigations_tab(reports: &[Report], mode: ViewMode) -> Element<'_, Message> {
    let upload = button("Upload Report Files").on_press(Message::PickReportFiles);

    let header = row![
        upload,
        Space::with_width(Length::Fill),
        view_mode_toggle(mode),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    column![header, scrollable(reports_grid(reports, mode))]
        .spacing(16)
        .into()
}
