use super::text::field_label;
use article_params_core::ParamOption;
use iced::widget::{column, pick_list};
use iced::{Element, Length};

/// Titled drop-down over one of the fixed option lists
pub fn select<'a, T, Message>(
    title: &str,
    options: &'static [T],
    selected: T,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ParamOption,
    Message: Clone + 'a,
{
    let picker = pick_list(options, Some(selected), on_select)
        .width(Length::Fill)
        .padding([10, 14]);

    column![field_label(title), picker].spacing(8).into()
}
