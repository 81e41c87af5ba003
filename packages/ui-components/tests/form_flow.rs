//! End-to-end flows through the params panel, driven the way a host drives it:
//! feed messages into `update` and act on the returned events.

use article_params_core::{ArticleState, ContentWidth, FontFamily, FontSize, Swatch};
use article_params_ui::layout::PANEL_WIDTH;
use article_params_ui::{ArticleParamsForm, FormEvent, FormMessage};
use iced::Point;

/// Minimal stand-in for the article view that owns the applied preferences
struct Host {
    applied: ArticleState,
    form: ArticleParamsForm,
}

impl Host {
    fn new() -> Self {
        Self {
            applied: ArticleState::default(),
            form: ArticleParamsForm::new(),
        }
    }

    fn send(&mut self, message: FormMessage) {
        if let Some(event) = self.form.update(message) {
            self.applied = event.state();
        }
    }

    fn click_at(&mut self, x: f32, y: f32) {
        self.send(FormMessage::CursorMoved(Point::new(x, y)));
        self.send(FormMessage::PointerPressed);
    }
}

#[test]
fn test_apply_then_reset() {
    let mut host = Host::new();
    host.send(FormMessage::TogglePanel);
    host.send(FormMessage::FontFamilySelected(FontFamily::Ubuntu));
    host.send(FormMessage::FontSizeSelected(FontSize::Medium));
    host.send(FormMessage::FontColorSelected(Swatch::White));
    host.send(FormMessage::BackgroundColorSelected(Swatch::Black));
    host.send(FormMessage::ContentWidthSelected(ContentWidth::Narrow));

    // Nothing reaches the host before Apply
    assert_eq!(host.applied, ArticleState::default());

    host.send(FormMessage::Apply);
    assert_eq!(
        host.applied,
        ArticleState {
            font_family: FontFamily::Ubuntu,
            font_size: FontSize::Medium,
            font_color: Swatch::White,
            background_color: Swatch::Black,
            content_width: ContentWidth::Narrow,
        }
    );

    host.send(FormMessage::Reset);
    assert_eq!(host.applied, ArticleState::default());
    assert_eq!(*host.form.form_state(), ArticleState::default());
}

#[test]
fn test_dismiss_keeps_unapplied_edits() {
    let mut host = Host::new();
    host.send(FormMessage::TogglePanel);
    host.send(FormMessage::FontColorSelected(Swatch::Violet));

    host.click_at(PANEL_WIDTH + 400.0, 500.0);

    assert!(!host.form.is_open());
    assert_eq!(host.applied, ArticleState::default());
    assert_eq!(host.form.form_state().font_color, Swatch::Violet);

    // Reopening shows the edit, applying sends it
    host.send(FormMessage::TogglePanel);
    assert!(host.form.is_open());
    host.send(FormMessage::Apply);
    assert_eq!(host.applied.font_color, Swatch::Violet);
}

#[test]
fn test_apply_event_carries_form_state() {
    let mut form = ArticleParamsForm::new();
    form.update(FormMessage::FontSizeSelected(FontSize::Large));

    let event = form.update(FormMessage::Apply);

    assert!(matches!(event, Some(FormEvent::Apply(state)) if state.font_size == FontSize::Large));
    assert!(!form.is_open());
}

#[test]
fn test_pointer_events_while_closed_do_nothing() {
    let mut host = Host::new();
    host.click_at(PANEL_WIDTH + 400.0, 500.0);
    host.click_at(10.0, 10.0);
    assert!(!host.form.is_open());
}
