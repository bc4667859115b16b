pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod query;
pub mod render;

pub use backend::{HttpSearchBackend, SearchBackend};
pub use controller::SearchController;
pub use error::SearchError;
pub use model::{CocktailMatch, IngredientEntry, SearchResponse};
pub use query::IngredientQuery;
pub use render::ResultsPane;

/// Search for cocktails matching a raw comma-separated ingredient list,
/// using the configured endpoint.
pub async fn search_cocktails(input: &str) -> Result<SearchResponse, SearchError> {
    let query = IngredientQuery::parse(input).ok_or(SearchError::EmptyQuery)?;
    let config = config::SearchConfig::load()?;
    let backend = HttpSearchBackend::from_config(&config)?;
    backend.search(&query).await
}

/// Search and render in one step: runs a full submission against the
/// configured endpoint and returns the resulting pane.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), cocktail_finder::SearchError> {
/// let pane = cocktail_finder::find_cocktails("gin, lime juice").await?;
/// println!("{}", pane.html());
/// # Ok(())
/// # }
/// ```
pub async fn find_cocktails(input: &str) -> Result<ResultsPane, SearchError> {
    let config = config::SearchConfig::load()?;
    let backend = HttpSearchBackend::from_config(&config)?;
    let controller = SearchController::new(Box::new(backend));

    let mut pane = ResultsPane::new();
    controller.submit(input, &mut pane).await;
    Ok(pane)
}
