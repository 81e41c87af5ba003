//! Article view rendered with the applied params

use crate::app::{ArticleApp, Message};
use article_params_core::{ArticleState, Swatch};
use iced::{
    widget::{column, container, row, scrollable, text},
    Color, Element, Font, Length,
};

const TITLE: &str = "Lorem ipsum dolor sit amet";

const PARAGRAPHS: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
     incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
     exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu \
     fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa \
     qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque \
     laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi \
     architecto beatae vitae dicta sunt explicabo.",
];

pub fn main_view(app: &ArticleApp) -> Element<'_, Message> {
    let params_panel = app.params_form.view().map(Message::ParamsForm);

    row![params_panel, article_view(&app.applied)]
        .height(Length::Fill)
        .into()
}

fn article_view(params: &ArticleState) -> Element<'static, Message> {
    let font = Font::with_name(params.font_family.family_name());
    let font_color = iced::theme::Text::Color(swatch_color(params.font_color));
    let body_size = params.font_size.pixels();

    let mut content = column![text(TITLE)
        .size(body_size * 2)
        .font(font)
        .style(font_color)]
    .spacing(body_size);

    for paragraph in PARAGRAPHS {
        content = content.push(text(*paragraph).size(body_size).font(font).style(font_color));
    }

    let article = container(content)
        .max_width(f32::from(params.content_width.pixels()))
        .padding(48);

    container(scrollable(
        container(article).width(Length::Fill).center_x(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(ArticleBackground(
        swatch_color(params.background_color),
    ))))
    .into()
}

fn swatch_color(swatch: Swatch) -> Color {
    let (r, g, b) = swatch.rgb();
    Color::from_rgb8(r, g, b)
}

struct ArticleBackground(Color);

impl iced::widget::container::StyleSheet for ArticleBackground {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(self.0)),
            ..Default::default()
        }
    }
}
