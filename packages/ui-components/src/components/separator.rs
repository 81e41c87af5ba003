use iced::widget::{container, horizontal_rule};
use iced::Element;

pub fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    container(horizontal_rule(1)).padding([16, 0]).into()
}
