use crate::config::RecipeProviderConfig;
use crate::error::LookupError;
use crate::ingredients::canonical_keywords;
use crate::model::SearchResult;
use crate::providers::http::{build_client, get_body};
use crate::providers::RecipeSearch;
use log::{debug, error};
use reqwest::blocking::Client;
use std::time::Duration;

const OPERATION: &str = "recipe_puppy.search";

/// Client for the Recipe Puppy search API (`/api/?i=onions,garlic`)
pub struct RecipePuppyClient {
    client: Client,
    base_url: String,
}

impl RecipePuppyClient {
    pub fn new(config: &RecipeProviderConfig) -> reqwest::Result<Self> {
        Ok(RecipePuppyClient {
            client: build_client(config.timeout())?,
            base_url: config.base_url.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Ok(RecipePuppyClient {
            client: build_client(Duration::from_secs(5))?,
            base_url: base_url.into(),
        })
    }
}

fn decode_search_result(body: &str) -> Result<SearchResult, LookupError> {
    serde_json::from_str(body).map_err(|source| {
        error!("{}: unexpected response shape: {}", OPERATION, source);
        LookupError::Decode {
            operation: OPERATION,
            source,
        }
    })
}

impl RecipeSearch for RecipePuppyClient {
    fn provider_name(&self) -> &str {
        "recipe_puppy"
    }

    fn search(&self, ingredients: &[&str]) -> Result<SearchResult, LookupError> {
        let keywords = canonical_keywords(ingredients).join(",");
        let url = format!("{}/api/", self.base_url.trim_end_matches('/'));

        let query: Vec<(&str, &str)> = if keywords.is_empty() {
            Vec::new()
        } else {
            vec![("i", keywords.as_str())]
        };
        let body = get_body(&self.client, &url, &query, OPERATION)?;

        let result = decode_search_result(&body)?;
        debug!(
            "{}: {} recipes for [{}]",
            OPERATION,
            result.len(),
            keywords
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_decode_provider_response() {
        let body = r#"{
            "title": "Recipe Puppy",
            "version": 0.1,
            "href": "http://www.recipepuppy.com/",
            "results": [
                {"title": "Ginger Champagne", "href": "http://allrecipes.com/Recipe/Ginger-Champagne/Detail.aspx", "ingredients": "champagne, ginger, ice, vodka", "thumbnail": "http://img.recipepuppy.com/1.jpg"},
                {"title": "Potato and Cheese Frittata", "href": "http://allrecipes.com/Recipe/Potato-and-Cheese-Frittata/Detail.aspx", "ingredients": "cheddar cheese, eggs, olive oil, onions, potato, salt", "thumbnail": ""}
            ]
        }"#;

        let result = decode_search_result(body).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.results[0].title, "Ginger Champagne");
        assert_eq!(
            result.results[1].link,
            "http://allrecipes.com/Recipe/Potato-and-Cheese-Frittata/Detail.aspx"
        );
        assert_eq!(result.results[1].thumbnail.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_results_is_empty() {
        let result = decode_search_result(r#"{"title": "Recipe Puppy"}"#).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_entry_without_ingredients_is_decode_error() {
        let err = decode_search_result(r#"{"results": [{"title": "x", "href": "y"}]}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.operation(), OPERATION);
    }

    #[test]
    fn test_provider_name() {
        let client = RecipePuppyClient::new(&RecipeProviderConfig::default()).unwrap();
        assert_eq!(client.provider_name(), "recipe_puppy");
    }
}
