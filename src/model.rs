use serde::Deserialize;

/// One `name - measure` pair from a cocktail recipe.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IngredientEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

/// A single search result: how well the cocktail matches the query and
/// its full recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct CocktailMatch {
    #[serde(default)]
    pub name: String,
    /// Image URL; empty when the backend has none.
    #[serde(default)]
    pub image: String,
    /// Number of query ingredients present in this recipe.
    #[serde(default)]
    pub match_count: u32,
    /// Recipe ingredients already satisfied by the query.
    #[serde(default)]
    pub matched_ingredients: Vec<IngredientEntry>,
    /// Recipe ingredients the query does not cover.
    #[serde(default)]
    pub missing_ingredients: Vec<IngredientEntry>,
    #[serde(default = "default_instructions")]
    pub instructions: String,
}

/// The body of a `/search` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub cocktails: Vec<CocktailMatch>,
}

fn default_instructions() -> String {
    "No instructions available.".to_string()
}

impl Default for CocktailMatch {
    fn default() -> Self {
        CocktailMatch {
            name: String::new(),
            image: String::new(),
            match_count: 0,
            matched_ingredients: Vec::new(),
            missing_ingredients: Vec::new(),
            instructions: default_instructions(),
        }
    }
}

impl CocktailMatch {
    /// Split the free-text instructions into steps on the literal `". "`
    /// separator. Blank segments are dropped, the rest trimmed; a final
    /// segment without the separator keeps its own punctuation.
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .split(". ")
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }
}
