/// The user-supplied ingredient list, parsed for the wire.
///
/// Tokens keep their original order, duplicates and casing; the search
/// endpoint decides what matching means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    ingredients: Vec<String>,
}

impl IngredientQuery {
    /// Parse a raw comma-separated input string.
    ///
    /// Returns `None` when the input is empty after trimming, in which
    /// case no request should be made at all. Otherwise splits on `,`,
    /// trims each token and drops empty ones. Note that an input like
    /// `","` still yields a query, just one with zero tokens.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let ingredients = trimmed
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect();

        Some(IngredientQuery { ingredients })
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// The value of the `ingredients` request parameter.
    pub fn query_string(&self) -> String {
        self.ingredients.join(",")
    }
}
