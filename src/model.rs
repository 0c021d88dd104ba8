use serde::{Deserialize, Serialize};

use crate::ingredients::{normalize_ingredients, EmptyTokens};

/// One recipe as delivered by the search provider
///
/// The provider names the link `href`; `link` is accepted too and `href`
/// wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireRecipeEntry")]
pub struct RecipeEntry {
    pub title: String,
    pub link: String,
    /// Comma-separated ingredient list, exactly as the provider sent it
    pub ingredients_raw: String,
    pub thumbnail: Option<String>,
}

#[derive(Deserialize)]
struct WireRecipeEntry {
    title: String,
    href: Option<String>,
    link: Option<String>,
    ingredients: String,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl TryFrom<WireRecipeEntry> for RecipeEntry {
    type Error = &'static str;

    fn try_from(wire: WireRecipeEntry) -> Result<Self, Self::Error> {
        let link = wire
            .href
            .or(wire.link)
            .ok_or("missing field `href` (or `link`)")?;

        Ok(RecipeEntry {
            title: wire.title,
            link,
            ingredients_raw: wire.ingredients,
            thumbnail: wire.thumbnail,
        })
    }
}

/// Read-only view of a [`RecipeEntry`] with its ingredients trimmed and sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecipeEntry {
    pub title: String,
    pub link: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl RecipeEntry {
    pub fn normalize(&self, policy: EmptyTokens) -> NormalizedRecipeEntry {
        NormalizedRecipeEntry {
            title: self.title.clone(),
            link: self.link.clone(),
            ingredients: normalize_ingredients(&self.ingredients_raw, policy),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// Recipes in the order the provider returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub results: Vec<RecipeEntry>,
}

impl SearchResult {
    pub fn new(results: Vec<RecipeEntry>) -> Self {
        SearchResult { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Normalize every entry, keeping empty ingredient tokens.
    ///
    /// Entry order is preserved; only the ingredients inside each entry are sorted.
    pub fn normalize(&self) -> Vec<NormalizedRecipeEntry> {
        self.normalize_with(EmptyTokens::Keep)
    }

    pub fn normalize_with(&self, policy: EmptyTokens) -> Vec<NormalizedRecipeEntry> {
        self.results
            .iter()
            .map(|entry| entry.normalize(policy))
            .collect()
    }
}

/// A GIF returned by the GIF provider. `image_url` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gif {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub image_url: String,
}
