use serde::Deserialize;

/// Poster value the API uses when a title has no artwork
pub const NO_POSTER: &str = "N/A";

/// A movie as returned by the metadata API.
///
/// Every field is required on the wire; unknown keys are ignored. Values are
/// taken verbatim and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub director: String,
    pub plot: String,
    /// Poster image URL
    pub poster: String,
}

impl MovieRecord {
    /// Poster URL, if the record carries a usable one
    pub fn poster_url(&self) -> Option<&str> {
        let url = self.poster.trim();
        if url.is_empty() || url.eq_ignore_ascii_case(NO_POSTER) {
            None
        } else {
            Some(url)
        }
    }
}

/// Error body the API sends with a 200 status, e.g.
/// `{"Response":"False","Error":"Movie not found!"}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiErrorBody {
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn is_failure(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}
