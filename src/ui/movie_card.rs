use iced::alignment::Horizontal;
use iced::widget::{column, image, text, Column};
use iced::{ContentFit, Element, Fill};

use crate::app::Message;
use crate::movie::MovieRecord;
use crate::ui::theme;

/// Poster height in logical pixels
const POSTER_HEIGHT: f32 = 400.0;

pub fn year_line(movie: &MovieRecord) -> String {
    format!("Año: {}", movie.year)
}

pub fn director_line(movie: &MovieRecord) -> String {
    format!("Director: {}", movie.director)
}

/// Build the result block: title, year, director, poster, plot
pub fn view<'a>(movie: &'a MovieRecord, poster: Option<&'a image::Handle>) -> Element<'a, Message> {
    let title = text(&movie.title)
        .size(24)
        .font(theme::BOLD)
        .style(theme::accent_text)
        .width(Fill)
        .align_x(Horizontal::Center);

    let details = column![
        text(year_line(movie)).size(16).style(theme::body_text),
        text(director_line(movie)).size(16).style(theme::body_text),
    ]
    .spacing(4)
    .width(Fill);

    let mut card = Column::new().push(title).push(details).spacing(12).width(Fill);

    if let Some(handle) = poster {
        card = card.push(
            image(handle.clone())
                .width(Fill)
                .height(POSTER_HEIGHT)
                .content_fit(ContentFit::Cover),
        );
    }

    card.push(
        text(&movie.plot)
            .size(16)
            .font(theme::SERIF)
            .style(theme::body_text)
            .width(Fill),
    )
    .into()
}
