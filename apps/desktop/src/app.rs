//! Article viewer application hosting the params panel

use crate::config::ViewerConfig;
use crate::ui::main_view;
use article_params_core::ArticleState;
use article_params_ui::{ArticleParamsForm, FormEvent, FormMessage};
use iced::{executor, Application, Command, Element, Subscription, Theme};
use tracing::info;

pub struct ArticleApp {
    /// Preferences the article is currently rendered with
    pub applied: ArticleState,
    pub params_form: ArticleParamsForm,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    ParamsForm(FormMessage),
}

impl ArticleApp {
    fn handle_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::Apply(state) => info!("Article params applied: {:?}", state),
            FormEvent::Reset(_) => info!("Article params reset"),
        }
        self.applied = event.state();
    }
}

impl Application for ArticleApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ViewerConfig;

    fn new(config: ViewerConfig) -> (Self, Command<Message>) {
        info!("Initializing article viewer");

        (
            Self {
                applied: config.initial_params,
                params_form: ArticleParamsForm::new(),
                theme: Theme::Light,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Article Viewer".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ParamsForm(form_message) => {
                if let Some(event) = self.params_form.update(form_message) {
                    self.handle_form_event(event);
                }
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.params_form.subscription().map(Message::ParamsForm)
    }
}

impl Default for ArticleApp {
    fn default() -> Self {
        let (app, _) = Self::new(ViewerConfig::default());
        app
    }
}
