use crate::message::Message;
use crate::model::ViewerFile;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, stack, text, Image, Space,
};
use iced::{Alignment, Background, Color, Element, Length, Theme};

/// Overlay composer for the file preview. `None` means closed: the base
/// layout is returned untouched and nothing is stacked on top. The modal
/// never owns the open flag; it only emits `CloseViewer`.
pub fn viewer_modal<'a>(
    base: Element<'a, Message>,
    viewer: Option<&'a ViewerFile>,
) -> Element<'a, Message> {
    let Some(file) = viewer else {
        return base;
    };

    let header = row![
        text(&file.name)
            .size(16)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
        button(text("Download").size(13)).on_press(Message::DownloadViewerFile),
        button(text("Close").size(13)).on_press(Message::CloseViewer),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let preview: Element<'_, Message> = if file.is_image() {
        Image::new(Handle::from_path(&file.path))
            .width(Length::Fill)
            .height(Length::Fixed(420.0))
            .into()
    } else {
        document_frame(file)
    };

    let card = container(column![header, preview].spacing(12))
        .padding(16)
        .width(Length::Fixed(640.0))
        .style(modal_card_style);

    let backdrop = mouse_area(center(opaque(card)).style(|_theme| {
        iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: 0.8,
                ..Color::BLACK
            })),
            ..Default::default()
        }
    }))
    .on_press(Message::CloseViewer);

    stack![base, opaque(backdrop)].into()
}

/// Non-image files are shown as an embedded document frame; rendering
/// the pages themselves is the host platform's job.
fn document_frame(file: &ViewerFile) -> Element<'_, Message> {
    container(
        column![
            Space::with_height(Length::Fixed(24.0)),
            text("📄").size(48),
            text("Embedded document preview").size(14),
            text(&file.mime).size(12),
            Space::with_height(Length::Fixed(24.0)),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .style(frame_style)
    .into()
}

fn modal_card_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    }
}

fn frame_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}
