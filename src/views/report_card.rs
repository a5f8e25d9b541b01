use crate::message::Message;
use crate::model::Report;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Image, Space};
use iced::{Alignment, Background, Element, Length, Theme};

/// Grid tile for one report. The whole tile is the preview control.
pub fn report_tile(report: &Report) -> Element<'_, Message> {
    let preview: Element<'_, Message> = match &report.thumbnail {
        Some(thumb) => Image::new(Handle::from_path(thumb))
            .width(Length::Fill)
            .height(Length::Fixed(90.0))
            .into(),
        None => container(text(report.kind.glyph()).size(36))
            .width(Length::Fill)
            .height(Length::Fixed(90.0))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into(),
    };

    let body = column![
        preview,
        text(&report.file_name)
            .size(13)
            .wrapping(Wrapping::Word)
            .width(Length::Fill),
        text(&report.uploaded).size(12),
    ]
    .spacing(6);

    button(container(body).padding(10).style(tile_style))
        .padding(0)
        .width(Length::Fill)
        .style(transparent_button)
        .on_press(Message::OpenViewer(report.id))
        .into()
}

/// Compact single-line variant used by list mode.
pub fn report_row(report: &Report) -> Element<'_, Message> {
    let line = row![
        text(report.kind.glyph()).size(16),
        text(&report.file_name)
            .size(13)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
        Space::with_width(Length::Fixed(12.0)),
        text(&report.uploaded).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    button(container(line).padding([8, 12]).style(tile_style))
        .padding(0)
        .width(Length::Fill)
        .style(transparent_button)
        .on_press(Message::OpenViewer(report.id))
        .into()
}

fn tile_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

fn transparent_button(
    theme: &Theme,
    _status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    iced::widget::button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        ..Default::default()
    }
}
