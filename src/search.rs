use crate::movie::MovieRecord;

/// What the screen is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet
    Idle,
    /// A lookup is in flight
    Loading,
    /// Last lookup produced a record
    ResultShown,
    /// Last lookup produced nothing (renders like `Idle`)
    Empty,
}

/// A lookup to run, tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub title: String,
}

/// Query, current result and in-flight flag for the search screen.
///
/// Every submit bumps `generation`; results from older generations are
/// dropped so a slow superseded request cannot overwrite a newer one.
/// `P` is whatever the UI keeps for a loaded poster image.
#[derive(Debug)]
pub struct SearchState<P = Vec<u8>> {
    query: String,
    movie: Option<MovieRecord>,
    poster: Option<P>,
    loading: bool,
    searched: bool,
    generation: u64,
}

impl<P> Default for SearchState<P> {
    fn default() -> Self {
        Self {
            query: String::new(),
            movie: None,
            poster: None,
            loading: false,
            searched: false,
            generation: 0,
        }
    }
}

impl<P> SearchState<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn movie(&self) -> Option<&MovieRecord> {
        self.movie.as_ref()
    }

    pub fn poster(&self) -> Option<&P> {
        self.poster.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Submit is only possible with a non-blank query
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Start a lookup for the current query.
    ///
    /// Returns `None` and leaves state untouched when the query is blank.
    pub fn begin(&mut self) -> Option<Ticket> {
        if !self.can_submit() {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.searched = true;
        self.movie = None;
        self.poster = None;
        Some(Ticket {
            generation: self.generation,
            title: self.query.clone(),
        })
    }

    /// Apply a finished lookup. Returns false if it was superseded.
    pub fn settle(&mut self, generation: u64, movie: Option<MovieRecord>) -> bool {
        if generation != self.generation || !self.loading {
            tracing::debug!(
                "Dropping stale result: gen={}, current_gen={}",
                generation,
                self.generation
            );
            return false;
        }
        self.movie = movie;
        self.loading = false;
        true
    }

    /// Attach a poster to the current record. Returns false if stale.
    pub fn set_poster(&mut self, generation: u64, poster: P) -> bool {
        if generation != self.generation || self.movie.is_none() {
            return false;
        }
        self.poster = Some(poster);
        true
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.movie.is_some() {
            Phase::ResultShown
        } else if self.searched {
            Phase::Empty
        } else {
            Phase::Idle
        }
    }
}
