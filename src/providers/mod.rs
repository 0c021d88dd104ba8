mod giphy;
mod http;
mod recipe_puppy;

pub use giphy::GiphyClient;
pub use recipe_puppy::RecipePuppyClient;

use crate::error::LookupError;
use crate::model::{Gif, SearchResult};

/// Source of random GIFs, shared by reference between callers
pub trait GifLookup: Send + Sync {
    /// Get the provider name (e.g., "giphy")
    fn provider_name(&self) -> &str;

    /// Fetch one random GIF for `tag`. The returned `image_url` is never empty.
    fn get_random_by_tag(&self, tag: &str) -> Result<Gif, LookupError>;
}

/// Source of recipes matching a set of ingredients
pub trait RecipeSearch: Send + Sync {
    /// Get the provider name (e.g., "recipe_puppy")
    fn provider_name(&self) -> &str;

    /// Search for recipes containing the given ingredients. An empty result is not an error.
    fn search(&self, ingredients: &[&str]) -> Result<SearchResult, LookupError>;
}
