//! Text styles used by the params panel

use iced::font::Weight;
use iced::widget::text;
use iced::{Color, Element, Font};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const EXTRA_BOLD: Font = Font {
    weight: Weight::ExtraBold,
    ..Font::DEFAULT
};

/// Panel heading, upper-cased
pub fn heading<'a, Message: 'a>(content: &str) -> Element<'a, Message> {
    text(content.to_uppercase())
        .size(31)
        .font(EXTRA_BOLD)
        .into()
}

/// Caption above a picker, upper-cased
pub fn field_label<'a, Message: 'a>(content: &str) -> Element<'a, Message> {
    text(content.to_uppercase())
        .size(12)
        .font(BOLD)
        .style(iced::theme::Text::Color(Color::from_rgb(0.4, 0.4, 0.4)))
        .into()
}
