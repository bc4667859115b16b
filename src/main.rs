use std::env;

use cocktail_finder::config::SearchConfig;
use cocktail_finder::{HttpSearchBackend, ResultsPane, SearchController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the ingredient list from command-line arguments
    let args: Vec<String> = env::args().collect();
    let input = args
        .get(1)
        .ok_or("Please provide a comma-separated ingredient list as an argument")?;

    let config = SearchConfig::load()?;
    let backend = HttpSearchBackend::from_config(&config)?;
    let controller = SearchController::new(Box::new(backend));

    let mut pane = ResultsPane::new();
    controller.submit(input, &mut pane).await;
    println!("{}", pane.html());

    Ok(())
}
