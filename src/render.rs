use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{CocktailMatch, IngredientEntry, SearchResponse};

pub const SEARCHING: &str = "Searching...";
pub const EMPTY_PROMPT: &str = "Please enter at least one ingredient.";
pub const FETCH_ERROR: &str = "Error fetching data. Please try again later.";
pub const NO_RESULTS: &str = "No cocktails found for the given ingredients.";
pub const RESULTS_HEADING: &str = "Top 3 Matching Cocktails:";

pub const SHOW_RECIPE: &str = "Show Recipe";
pub const HIDE_RECIPE: &str = "Hide Recipe";

/// One rendered cocktail match plus the visibility state of its recipe
/// details block. Details start hidden.
#[derive(Debug, Clone)]
pub struct CocktailCard {
    cocktail: CocktailMatch,
    details_visible: bool,
}

impl CocktailCard {
    fn new(cocktail: CocktailMatch) -> Self {
        CocktailCard {
            cocktail,
            details_visible: false,
        }
    }

    pub fn cocktail(&self) -> &CocktailMatch {
        &self.cocktail
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    /// Current label of the card's toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.details_visible {
            HIDE_RECIPE
        } else {
            SHOW_RECIPE
        }
    }

    /// Flip the details visibility, returning the new button label.
    fn toggle(&mut self) -> &'static str {
        self.details_visible = !self.details_visible;
        self.toggle_label()
    }

    fn render(&self, out: &mut String) {
        let cocktail = &self.cocktail;

        out.push_str("<div class=\"cocktail-item\">");
        out.push_str("<div class=\"cocktail-header\">");
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\" class=\"cocktail-image\">",
            encode_double_quoted_attribute(&cocktail.image),
            encode_double_quoted_attribute(&cocktail.name),
        );
        out.push_str("<div class=\"cocktail-info\">");
        let _ = write!(out, "<h3>{}</h3>", encode_text(&cocktail.name));
        let _ = write!(
            out,
            "<p><strong>Match Count:</strong> {}</p>",
            cocktail.match_count
        );
        let _ = write!(
            out,
            "<button class=\"toggle-ingredients\">{}</button>",
            self.toggle_label()
        );
        out.push_str("</div></div>");

        let details_class = if self.details_visible {
            "cocktail-details"
        } else {
            "cocktail-details hidden"
        };
        let _ = write!(out, "<div class=\"{details_class}\">");

        out.push_str("<h4>Ingredients you already have:</h4>");
        render_ingredient_list(out, &cocktail.matched_ingredients);
        out.push_str("<h4>Other ingredients needed:</h4>");
        render_ingredient_list(out, &cocktail.missing_ingredients);

        out.push_str("<h4>Instructions:</h4><ol>");
        for step in cocktail.instruction_steps() {
            let _ = write!(out, "<li>{}</li>", encode_text(step));
        }
        out.push_str("</ol>");

        out.push_str("</div></div>");
    }
}

fn render_ingredient_list(out: &mut String, entries: &[IngredientEntry]) {
    out.push_str("<ul>");
    if entries.is_empty() {
        out.push_str("<li>None</li>");
    } else {
        for entry in entries {
            let _ = write!(
                out,
                "<li>{} - {}</li>",
                encode_text(&entry.name),
                encode_text(&entry.measure)
            );
        }
    }
    out.push_str("</ul>");
}

#[derive(Debug, Clone)]
enum PaneContent {
    Text(String),
    Results(Vec<CocktailCard>),
}

/// The results area of the page, passed around explicitly instead of
/// looked up ambiently. Holds either a status message or the rendered
/// cocktail cards, and owns the toggle state of every card.
#[derive(Debug, Clone)]
pub struct ResultsPane {
    content: PaneContent,
}

impl Default for ResultsPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPane {
    pub fn new() -> Self {
        ResultsPane {
            content: PaneContent::Text(String::new()),
        }
    }

    /// Replace the pane with a plain text message.
    pub fn show_text(&mut self, text: &str) {
        self.content = PaneContent::Text(text.to_string());
    }

    /// Replace the pane with the rendered results of a search. An empty
    /// cocktail list renders the no-results message.
    pub fn show_results(&mut self, response: SearchResponse) {
        if response.cocktails.is_empty() {
            self.content = PaneContent::Text(NO_RESULTS.to_string());
        } else {
            let cards = response.cocktails.into_iter().map(CocktailCard::new).collect();
            self.content = PaneContent::Results(cards);
        }
    }

    /// The rendered cards, empty while the pane shows a text message.
    pub fn cards(&self) -> &[CocktailCard] {
        match &self.content {
            PaneContent::Text(_) => &[],
            PaneContent::Results(cards) => cards,
        }
    }

    /// Click handler for the card's toggle button: flips the visibility
    /// of its details block and returns the new button label. `None`
    /// when there is no card at `index`.
    pub fn toggle_recipe(&mut self, index: usize) -> Option<&'static str> {
        match &mut self.content {
            PaneContent::Text(_) => None,
            PaneContent::Results(cards) => cards.get_mut(index).map(CocktailCard::toggle),
        }
    }

    /// Markup for the current pane content.
    pub fn html(&self) -> String {
        match &self.content {
            PaneContent::Text(text) => encode_text(text).into_owned(),
            PaneContent::Results(cards) => {
                let mut out = String::new();
                let _ = write!(out, "<h2>{RESULTS_HEADING}</h2>");
                out.push_str("<div class=\"cocktail-results\">");
                for card in cards {
                    card.render(&mut out);
                }
                out.push_str("</div>");
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CocktailMatch, IngredientEntry, SearchResponse};
    use scraper::{Html, Selector};

    fn sample_response() -> SearchResponse {
        SearchResponse {
            cocktails: vec![CocktailMatch {
                name: "Daiquiri".to_string(),
                image: "https://example.com/daiquiri.jpg".to_string(),
                match_count: 1,
                matched_ingredients: vec![],
                missing_ingredients: vec![IngredientEntry {
                    name: "Lime".to_string(),
                    measure: "1 oz".to_string(),
                }],
                instructions: "Shake well. Strain into glass. Serve.".to_string(),
            }],
        }
    }

    fn select<'a>(document: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).collect()
    }

    #[test]
    fn test_new_pane_is_blank() {
        let pane = ResultsPane::new();
        assert_eq!(pane.html(), "");
        assert!(pane.cards().is_empty());
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut pane = ResultsPane::new();
        pane.show_text("<b>hi</b>");
        assert_eq!(pane.html(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_empty_results_show_no_results_message() {
        let mut pane = ResultsPane::new();
        pane.show_results(SearchResponse::default());
        assert_eq!(pane.html(), NO_RESULTS);
    }

    #[test]
    fn test_rendered_card_structure() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());

        let document = Html::parse_fragment(&pane.html());

        assert_eq!(select(&document, "h2").len(), 1);
        assert_eq!(select(&document, ".cocktail-item").len(), 1);
        assert_eq!(select(&document, "h3")[0].inner_html(), "Daiquiri");

        let image = select(&document, "img.cocktail-image")[0];
        assert_eq!(
            image.value().attr("src"),
            Some("https://example.com/daiquiri.jpg")
        );
        assert_eq!(image.value().attr("alt"), Some("Daiquiri"));

        // Details start hidden, button offers to show them
        assert_eq!(select(&document, ".cocktail-details.hidden").len(), 1);
        let button = select(&document, "button.toggle-ingredients")[0];
        assert_eq!(button.inner_html(), SHOW_RECIPE);
    }

    #[test]
    fn test_empty_matched_list_renders_none() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());

        let document = Html::parse_fragment(&pane.html());
        let lists = select(&document, ".cocktail-details ul");
        assert_eq!(lists.len(), 2);

        let matched_items: Vec<_> = lists[0].text().collect();
        assert_eq!(matched_items.join(""), "None");

        let missing_items: Vec<_> = lists[1].text().collect();
        assert_eq!(missing_items.join(""), "Lime - 1 oz");
    }

    #[test]
    fn test_instruction_steps_render_as_ordered_list() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());

        let document = Html::parse_fragment(&pane.html());
        let steps: Vec<_> = select(&document, "ol li")
            .iter()
            .map(|li| li.inner_html())
            .collect();
        assert_eq!(steps, ["Shake well", "Strain into glass", "Serve."]);
    }

    #[test]
    fn test_toggle_flips_visibility_and_label() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());

        assert_eq!(pane.toggle_recipe(0), Some(HIDE_RECIPE));
        assert!(pane.cards()[0].details_visible());
        let document = Html::parse_fragment(&pane.html());
        assert!(select(&document, ".cocktail-details.hidden").is_empty());
        assert_eq!(
            select(&document, "button.toggle-ingredients")[0].inner_html(),
            HIDE_RECIPE
        );

        // Second click restores the collapsed state
        assert_eq!(pane.toggle_recipe(0), Some(SHOW_RECIPE));
        assert!(!pane.cards()[0].details_visible());
        let document = Html::parse_fragment(&pane.html());
        assert_eq!(select(&document, ".cocktail-details.hidden").len(), 1);
    }

    #[test]
    fn test_odd_number_of_clicks_leaves_details_visible() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());

        for _ in 0..3 {
            pane.toggle_recipe(0);
        }
        assert!(pane.cards()[0].details_visible());
        assert_eq!(pane.cards()[0].toggle_label(), HIDE_RECIPE);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut pane = ResultsPane::new();
        pane.show_results(sample_response());
        assert_eq!(pane.toggle_recipe(5), None);

        let mut text_pane = ResultsPane::new();
        text_pane.show_text(SEARCHING);
        assert_eq!(text_pane.toggle_recipe(0), None);
    }

    #[test]
    fn test_markup_escapes_response_fields() {
        let mut pane = ResultsPane::new();
        pane.show_results(SearchResponse {
            cocktails: vec![CocktailMatch {
                name: "<script>alert(1)</script>".to_string(),
                ..Default::default()
            }],
        });

        let html = pane.html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
