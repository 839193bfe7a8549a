use iced::widget::{column, container, image, scrollable, text};
use iced::{Center, Element, Fill, Padding, Task, Theme};

use crate::config::{ApiConfig, Config};
use crate::movie::MovieRecord;
use crate::search::SearchState;
use crate::ui::{movie_card, search_input, theme};
use crate::{omdb, poster};

pub const HEADING: &str = "🎬 Movie Explorer";
pub const LOADING_LABEL: &str = "Cargando…";

pub struct State {
    api: ApiConfig,
    search: SearchState<image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    MovieLoaded {
        generation: u64,
        movie: Option<MovieRecord>,
    },
    PosterLoaded {
        generation: u64,
        bytes: Option<Vec<u8>>,
    },
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        if config.api.api_key.is_empty() {
            tracing::warn!(
                "No API key configured; set api.api_key or ${}",
                crate::config::API_KEY_ENV
            );
        }

        let state = Self {
            api: config.api,
            search: SearchState::new(),
        };

        (
            state,
            iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
        )
    }

    pub fn title(&self) -> String {
        match self.search.movie() {
            Some(movie) => format!("Movie Explorer - {}", movie.title),
            None => String::from("Movie Explorer"),
        }
    }

    pub fn search(&self) -> &SearchState<image::Handle> {
        &self.search
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Task::none()
            }
            Message::Submit => {
                let Some(ticket) = self.search.begin() else {
                    return Task::none();
                };
                tracing::info!(
                    "Searching '{}' (gen={})",
                    ticket.title,
                    ticket.generation
                );
                let api = self.api.clone();
                let generation = ticket.generation;
                Task::perform(
                    async move { omdb::fetch_movie(&api, &ticket.title).await },
                    move |movie| Message::MovieLoaded { generation, movie },
                )
            }
            Message::MovieLoaded { generation, movie } => {
                if !self.search.settle(generation, movie) {
                    return Task::none();
                }
                self.load_poster(generation)
            }
            Message::PosterLoaded { generation, bytes } => {
                if let Some(bytes) = bytes {
                    self.search
                        .set_poster(generation, image::Handle::from_bytes(bytes));
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = text(HEADING)
            .size(28)
            .font(theme::BOLD_SERIF)
            .style(theme::accent_text);

        let mut content = column![
            heading,
            search_input::view(self.search.query(), self.search.can_submit()),
        ]
        .spacing(20)
        .align_x(Center)
        .width(Fill);

        if self.search.is_loading() {
            content = content.push(text(LOADING_LABEL).size(16).style(theme::accent_text));
        }

        if let Some(movie) = self.search.movie() {
            content = content.push(movie_card::view(movie, self.search.poster()));
        }

        let body = scrollable(container(content).padding(Padding::new(20.0)));

        container(body)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn load_poster(&self, generation: u64) -> Task<Message> {
        let Some(url) = self.search.movie().and_then(MovieRecord::poster_url) else {
            return Task::none();
        };
        let url = url.to_string();
        let timeout_secs = self.api.timeout_secs;
        Task::perform(
            async move { poster::fetch_poster(&url, timeout_secs).await },
            move |bytes| Message::PosterLoaded { generation, bytes },
        )
    }
}
