//! Side panel for choosing article display parameters
//!
//! The panel keeps its own copy of the preferences while the user edits them.
//! Nothing reaches the host until Apply or Reset, which come back from
//! [`ArticleParamsForm::update`] as a [`FormEvent`].

use super::arrow_button::arrow_button;
use super::button::{apply_button, clear_button};
use super::radio_group::radio_group;
use super::select::select;
use super::separator::separator;
use super::text::heading;
use crate::layout::{self, PANEL_PADDING, PANEL_WIDTH, TOGGLE_MARGIN};
use article_params_core::{
    ArticleState, ContentWidth, FontFamily, FontSize, ParamOption, Swatch, BACKGROUND_COLORS,
    FONT_COLORS,
};
use iced::keyboard::{self, key};
use iced::widget::{column, container, row, Space};
use iced::{event, mouse, Element, Event, Length, Point, Subscription};
use tracing::{debug, info};

/// Messages from the params panel
#[derive(Debug, Clone)]
pub enum FormMessage {
    TogglePanel,

    FontFamilySelected(FontFamily),
    FontSizeSelected(FontSize),
    FontColorSelected(Swatch),
    BackgroundColorSelected(Swatch),
    ContentWidthSelected(ContentWidth),

    Apply,
    Reset,

    // Dismissal
    CursorMoved(Point),
    PointerPressed,
    EscapePressed,
}

/// What the host should do with its applied preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Use the preferences currently in the form
    Apply(ArticleState),
    /// Go back to the default preferences
    Reset(ArticleState),
}

impl FormEvent {
    pub fn state(&self) -> ArticleState {
        match self {
            FormEvent::Apply(state) | FormEvent::Reset(state) => *state,
        }
    }
}

/// Collapsible article params panel
#[derive(Debug, Clone, Default)]
pub struct ArticleParamsForm {
    is_open: bool,
    form_state: ArticleState,
    cursor: Option<Point>,
}

impl ArticleParamsForm {
    /// Closed panel holding the default preferences
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Preferences as currently edited, applied or not
    pub fn form_state(&self) -> &ArticleState {
        &self.form_state
    }

    pub fn update(&mut self, message: FormMessage) -> Option<FormEvent> {
        match message {
            FormMessage::TogglePanel => {
                self.is_open = !self.is_open;
                self.cursor = None;
                debug!("Params panel {}", if self.is_open { "opened" } else { "closed" });
                None
            }

            FormMessage::FontFamilySelected(font_family) => {
                debug!("Font family: {}", font_family);
                self.form_state.font_family = font_family;
                None
            }
            FormMessage::FontSizeSelected(font_size) => {
                debug!("Font size: {}", font_size);
                self.form_state.font_size = font_size;
                None
            }
            FormMessage::FontColorSelected(color) => {
                debug!("Font color: {}", color);
                self.form_state.font_color = color;
                None
            }
            FormMessage::BackgroundColorSelected(color) => {
                debug!("Background color: {}", color);
                self.form_state.background_color = color;
                None
            }
            FormMessage::ContentWidthSelected(width) => {
                debug!("Content width: {}", width);
                self.form_state.content_width = width;
                None
            }

            FormMessage::Apply => {
                info!("Applying article params: {:?}", self.form_state);
                Some(FormEvent::Apply(self.form_state))
            }
            FormMessage::Reset => {
                info!("Resetting article params to defaults");
                self.form_state = ArticleState::default();
                Some(FormEvent::Reset(ArticleState::default()))
            }

            FormMessage::CursorMoved(position) => {
                self.cursor = Some(position);
                None
            }
            FormMessage::PointerPressed => {
                if let Some(position) = self.cursor {
                    if self.is_open && !layout::hits_panel(position, self.is_open) {
                        info!("Click outside params panel at {:?}, closing", position);
                        self.is_open = false;
                    }
                }
                None
            }
            FormMessage::EscapePressed => {
                if self.is_open {
                    info!("Escape pressed, closing params panel");
                    self.is_open = false;
                }
                None
            }
        }
    }

    /// Global pointer and keyboard events, only while the panel is open
    pub fn subscription(&self) -> Subscription<FormMessage> {
        if self.is_open {
            event::listen_with(dismiss_event)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, FormMessage> {
        let toggle = container(arrow_button(self.is_open, FormMessage::TogglePanel))
            .padding(TOGGLE_MARGIN);

        if !self.is_open {
            return toggle.into();
        }

        row![self.panel(), toggle].into()
    }

    fn panel(&self) -> Element<'_, FormMessage> {
        let state = &self.form_state;

        let actions = row![
            Space::with_width(Length::Fill),
            clear_button("Reset").on_press(FormMessage::Reset),
            apply_button("Apply").on_press(FormMessage::Apply),
        ]
        .spacing(12);

        let content = column![
            heading("Set parameters"),
            Space::with_height(26),
            select(
                "Font",
                FontFamily::ALL,
                state.font_family,
                FormMessage::FontFamilySelected,
            ),
            radio_group(
                "Font size",
                FontSize::ALL,
                state.font_size,
                FormMessage::FontSizeSelected,
            ),
            select(
                "Font color",
                FONT_COLORS,
                state.font_color,
                FormMessage::FontColorSelected,
            ),
            separator(),
            select(
                "Background color",
                BACKGROUND_COLORS,
                state.background_color,
                FormMessage::BackgroundColorSelected,
            ),
            select(
                "Content width",
                ContentWidth::ALL,
                state.content_width,
                FormMessage::ContentWidthSelected,
            ),
            Space::with_height(Length::Fill),
            actions,
        ]
        .spacing(24);

        container(content)
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .padding(PANEL_PADDING)
            .style(iced::theme::Container::Box)
            .into()
    }
}

fn dismiss_event(event: Event, _status: event::Status) -> Option<FormMessage> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(FormMessage::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(FormMessage::PointerPressed)
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(FormMessage::EscapePressed),
        _ => None,
    }
}
