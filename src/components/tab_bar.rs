use crate::message::Message;
use crate::model::{Tab, TabDescriptor, TABS};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Row};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Chart navigation bar: one button per static tab descriptor. The
/// selected emphasis is purely `active == descriptor.tab`; an `active`
/// value matching no descriptor simply highlights nothing.
pub fn tab_bar(active: Tab) -> Row<'static, Message> {
    TABS.iter().fold(row![].spacing(4), |bar, descriptor| {
        bar.push(tab_button(descriptor, active).width(Length::FillPortion(1)))
    })
}

fn tab_button(
    descriptor: &'static TabDescriptor,
    active: Tab,
) -> iced::widget::Button<'static, Message> {
    let is_selected = active == descriptor.tab;
    let label = row![
        text(descriptor.icon).size(14),
        text(descriptor.label).size(14).wrapping(Wrapping::None),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let content = container(label)
        .width(Length::Fill)
        .height(Length::Fixed(34.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 10]);

    button(content)
        .padding(0)
        .on_press(Message::TabSelected(descriptor.tab))
        .style(move |theme, status| tab_style(theme, status, is_selected))
}

fn tab_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_selected: bool,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let mut background_color = if is_selected {
        palette.primary.strong.color
    } else {
        palette.background.weak.color
    };

    match status {
        iced::widget::button::Status::Hovered => {
            background_color = if is_selected {
                palette.primary.base.color
            } else {
                palette.background.strong.color
            };
        }
        iced::widget::button::Status::Pressed => {
            background_color = background_color.scale_alpha(0.9);
        }
        iced::widget::button::Status::Disabled => {
            background_color = background_color.scale_alpha(0.5);
        }
        iced::widget::button::Status::Active => {}
    }

    let text_color = if is_selected {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(8.0),
        },
        shadow: Shadow::default(),
    }
}
