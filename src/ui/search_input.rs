use iced::widget::{button, column, text, text_input};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "movie-search-input";

pub const PLACEHOLDER: &str = "Buscar película";
pub const BUTTON_LABEL: &str = "Buscar";

/// Build the query field and the submit button.
///
/// Both Enter and the button are disabled while `can_submit` is false.
pub fn view(query: &str, can_submit: bool) -> Element<'_, Message> {
    let submit = can_submit.then_some(Message::Submit);

    let input = text_input(PLACEHOLDER, query)
        .on_input(Message::QueryChanged)
        .on_submit_maybe(submit.clone())
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let submit_button = button(text(BUTTON_LABEL).size(16))
        .on_press_maybe(submit)
        .padding([10, 24])
        .style(theme::search_button);

    column![input, submit_button]
        .spacing(12)
        .align_x(Center)
        .into()
}
