use crate::message::Message;
use crate::model::Patient;
use iced::widget::{column, container, row, text};
use iced::{Background, Element, Length, Theme};

/// Chart header: the fixed patient attribute set. Straight render of
/// whatever strings the caller supplied.
pub fn patient_card(patient: &Patient) -> Element<'_, Message> {
    let attribute = |label: &'static str, value: &str| {
        row![
            text(label).size(13).width(Length::Fixed(90.0)),
            text(value.to_string()).size(13),
        ]
        .spacing(8)
    };

    let left = column![
        attribute("NIC", &patient.national_id),
        attribute("Age", &patient.age),
        attribute("Gender", &patient.gender),
    ]
    .spacing(4);

    let right = column![
        attribute("Address", &patient.address),
        attribute("Category", &patient.category),
    ]
    .spacing(4);

    let card = column![
        text(&patient.name).size(20),
        row![
            left.width(Length::FillPortion(1)),
            right.width(Length::FillPortion(2)),
        ]
        .spacing(24),
    ]
    .spacing(10);

    container(card)
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn card_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(10.0),
        },
        ..Default::default()
    }
}
