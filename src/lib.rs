pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod providers;

pub use crate::config::{load_config, AppConfig, GiphyConfig, RecipeProviderConfig};
pub use crate::error::{ErrorKind, LookupError};
pub use crate::ingredients::{canonical_keywords, normalize_ingredients, EmptyTokens};
pub use crate::model::{Gif, NormalizedRecipeEntry, RecipeEntry, SearchResult};
pub use crate::providers::{GifLookup, GiphyClient, RecipePuppyClient, RecipeSearch};

use log::info;

/// Search recipes by ingredients and return them with sorted ingredient lists
///
/// # Example
/// ```no_run
/// use recipe_lookup::{search_recipes, EmptyTokens, RecipePuppyClient, RecipeProviderConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RecipePuppyClient::new(&RecipeProviderConfig::default())?;
/// let recipes = search_recipes(&client, &["onion", "tomato"], EmptyTokens::Keep)?;
/// for recipe in recipes {
///     println!("{}: {}", recipe.title, recipe.ingredients.join(", "));
/// }
/// # Ok(())
/// # }
/// ```
pub fn search_recipes(
    provider: &dyn RecipeSearch,
    ingredients: &[&str],
    policy: EmptyTokens,
) -> Result<Vec<NormalizedRecipeEntry>, LookupError> {
    let result = provider.search(ingredients)?;
    info!(
        "{} returned {} recipes",
        provider.provider_name(),
        result.len()
    );
    Ok(result.normalize_with(policy))
}

/// Fetch a random GIF for `tag` from the given provider
pub fn random_gif(provider: &dyn GifLookup, tag: &str) -> Result<Gif, LookupError> {
    let gif = provider.get_random_by_tag(tag)?;
    info!("{} returned {} for '{}'", provider.provider_name(), gif.image_url, tag);
    Ok(gif)
}
