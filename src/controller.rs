use log::error;

use crate::backend::SearchBackend;
use crate::query::IngredientQuery;
use crate::render::{ResultsPane, EMPTY_PROMPT, FETCH_ERROR, SEARCHING};

/// Wires a submission to the search backend and the results pane.
///
/// One controller serves any number of submissions; a failed search
/// leaves it fully usable for the next one.
pub struct SearchController {
    backend: Box<dyn SearchBackend>,
}

impl SearchController {
    pub fn new(backend: Box<dyn SearchBackend>) -> Self {
        SearchController { backend }
    }

    /// Handle one form submission.
    ///
    /// The pane always shows the searching placeholder before anything
    /// else happens, then ends up with exactly one of: the empty-input
    /// prompt, the rendered results, or the generic fetch-failure
    /// message. Backend errors are logged, never propagated.
    pub async fn submit(&self, input: &str, pane: &mut ResultsPane) {
        pane.show_text(SEARCHING);

        let Some(query) = IngredientQuery::parse(input) else {
            pane.show_text(EMPTY_PROMPT);
            return;
        };

        match self.backend.search(&query).await {
            Ok(response) => pane.show_results(response),
            Err(err) => {
                error!("Error fetching search results: {err}");
                pane.show_text(FETCH_ERROR);
            }
        }
    }
}
