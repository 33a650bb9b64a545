use std::sync::Arc;

use chrono::{DateTime, Local};
use iced::{Application, Command, Element, Theme};

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::lookup::{Lookup, Observation};
use crate::view;

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Update,
    LookupCompleted(Result<Observation, LookupError>),
}

pub struct TempWidget {
    pub lookup: Option<Arc<Lookup>>,
    pub input: String,
    pub observation: Option<Observation>,
    pub last_updated: Option<DateTime<Local>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Application for TempWidget {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (TempWidget, Command<Message>) {
        let (lookup, error) = match Lookup::new(config) {
            Ok(lookup) => (Some(Arc::new(lookup)), None),
            Err(err) => (None, Some(err.to_string())),
        };
        (
            TempWidget {
                lookup,
                input: String::new(),
                observation: None,
                last_updated: None,
                loading: false,
                error,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        match &self.observation {
            Some(obs) => format!("Temperature - {}", obs.identifier),
            None => String::from("Temperature Widget"),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Command::none()
            }
            Message::Update => {
                let query = self.input.trim().to_uppercase();
                if query.is_empty() {
                    self.error = Some("Please enter a zipcode or station ID".to_string());
                    return Command::none();
                }
                let Some(lookup) = self.lookup.clone() else {
                    return Command::none();
                };
                self.loading = true;
                self.error = None;
                Command::perform(
                    async move { lookup.observation(&query).await },
                    Message::LookupCompleted,
                )
            }
            Message::LookupCompleted(result) => {
                self.loading = false;
                match result {
                    Ok(observation) => {
                        self.observation = Some(observation);
                        self.last_updated = Some(Local::now());
                        self.error = None;
                    }
                    Err(err) => {
                        // Prior reading stays on screen; only the status
                        // line changes.
                        self.error = Some(err.to_string());
                    }
                }
                Command::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}
