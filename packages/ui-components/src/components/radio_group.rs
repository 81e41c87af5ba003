use super::text::field_label;
use article_params_core::ParamOption;
use iced::widget::{column, radio, Row};
use iced::Element;

/// Titled row of radio buttons over one of the fixed option lists
pub fn radio_group<'a, T, Message>(
    title: &str,
    options: &'static [T],
    selected: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: ParamOption,
    Message: Clone + 'a,
{
    let buttons: Vec<Element<'a, Message>> = options
        .iter()
        .map(|option| {
            radio(option.title(), *option, Some(selected), &on_select)
                .size(16)
                .into()
        })
        .collect();

    column![field_label(title), Row::with_children(buttons).spacing(24)]
        .spacing(8)
        .into()
}
