use crate::message::Message;
use crate::model::Tab;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

/// Stand-in panel for chart sections without dedicated content yet.
pub fn placeholder_panel(tab: Tab) -> Element<'static, Message> {
    let descriptor = tab.descriptor();

    container(
        column![
            text(descriptor.icon).size(36),
            text(format!("{} records", descriptor.label)).size(18),
            text("Nothing to show for this patient yet").size(13),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
