use crate::layout::TOGGLE_SIZE;
use iced::widget::{button, svg};
use iced::{Element, Length};

const ARROW_RIGHT: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 5l7 7-7 7" fill="none" stroke="#FFFFFF" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

const ARROW_LEFT: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M15 5l-7 7 7 7" fill="none" stroke="#FFFFFF" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Round toggle for the side panel; points left while the panel is open
pub fn arrow_button<'a, Message: Clone + 'a>(
    is_open: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let icon = if is_open { ARROW_LEFT } else { ARROW_RIGHT };

    button(
        svg(svg::Handle::from_memory(icon))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(TOGGLE_SIZE))
    .height(Length::Fixed(TOGGLE_SIZE))
    .padding(12)
    .style(iced::theme::Button::Primary)
    .on_press(on_press)
    .into()
}
