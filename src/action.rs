// Every user interaction, async result, and internal event is represented as an
// Action variant. The App event loop dispatches these to component handlers.

use crate::api::models::Movie;

/// All events flowing through the app — user actions, async results, and
/// internal signals. The [`App`](crate::app::App) event loop dispatches
/// each variant to the appropriate handler.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,

    FocusSearch,
    SearchSubmit,

    LoadPopular,
    /// Popular listing came back. Dropped unless `request_id` matches the
    /// latest issued request.
    PopularLoaded {
        request_id: u64,
        movies: Vec<Movie>,
    },
    SearchByQuery {
        query: String,
    },
    SearchLoaded {
        request_id: u64,
        movies: Vec<Movie>,
    },

    AdvanceSlide,
    SelectSlide(usize),

    OpenTrailer(u64),
    TrailerResolved {
        movie_id: u64,
        url: Option<String>,
    },

    /// Result of probing a poster URL for availability.
    PosterProbed {
        movie_id: u64,
        ok: bool,
    },

    ShowError(String),
    ClearError,
    ShowNotice(String),
    ClearNotice,
    ShowHelp,
    HideHelp,
    Tick,
}
