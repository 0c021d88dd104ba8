/// What to do with tokens that are empty once trimmed (`""`, `"a,,b"`, `"a, "`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyTokens {
    /// Keep them, so the output has one entry per comma-separated token
    #[default]
    Keep,
    /// Filter them out after trimming
    Drop,
}

impl EmptyTokens {
    pub fn from_drop_flag(drop_empty: bool) -> Self {
        if drop_empty {
            EmptyTokens::Drop
        } else {
            EmptyTokens::Keep
        }
    }
}

/// Split a comma-separated ingredient list, trim each token and sort the result
/// in ascending byte order.
///
/// # Example
/// ```
/// use recipe_lookup::{normalize_ingredients, EmptyTokens};
///
/// let ingredients = normalize_ingredients("ovo, caramelo, banana", EmptyTokens::Keep);
/// assert_eq!(ingredients, vec!["banana", "caramelo", "ovo"]);
/// ```
pub fn normalize_ingredients(raw: &str, policy: EmptyTokens) -> Vec<String> {
    let mut tokens: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| policy == EmptyTokens::Keep || !token.is_empty())
        .map(String::from)
        .collect();

    tokens.sort();
    tokens
}

/// Canonical form of the keywords a caller searches with: every item may itself
/// be a comma-separated list, empty tokens are dropped and duplicates removed.
pub fn canonical_keywords<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    let joined = ingredients
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",");

    let mut keywords = normalize_ingredients(&joined, EmptyTokens::Drop);
    keywords.dedup();
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_ingredients() {
        assert_eq!(
            normalize_ingredients("ovo, caramelo, banana", EmptyTokens::Keep),
            vec!["banana", "caramelo", "ovo"]
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let result = normalize_ingredients("  ovo ,banana\t,\n leite  ", EmptyTokens::Keep);
        assert_eq!(result, vec!["banana", "leite", "ovo"]);
        assert!(result.iter().all(|token| token.trim() == token));
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let once = normalize_ingredients("tomato, onion, garlic, basil", EmptyTokens::Keep);
        let twice = normalize_ingredients(&once.join(","), EmptyTokens::Keep);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_byte_order_puts_uppercase_first() {
        assert_eq!(
            normalize_ingredients("apple, Banana, çoco, cherry", EmptyTokens::Keep),
            vec!["Banana", "apple", "cherry", "çoco"]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(
            normalize_ingredients("salt, pepper, salt", EmptyTokens::Keep),
            vec!["pepper", "salt", "salt"]
        );
    }

    #[test]
    fn test_keep_policy_preserves_empty_tokens() {
        assert_eq!(normalize_ingredients("", EmptyTokens::Keep), vec![""]);
        assert_eq!(
            normalize_ingredients("onion, ,garlic,", EmptyTokens::Keep),
            vec!["", "", "garlic", "onion"]
        );
    }

    #[test]
    fn test_drop_policy_filters_empty_tokens() {
        assert!(normalize_ingredients("", EmptyTokens::Drop).is_empty());
        assert!(normalize_ingredients(" , ,", EmptyTokens::Drop).is_empty());
        assert_eq!(
            normalize_ingredients("onion, ,garlic,", EmptyTokens::Drop),
            vec!["garlic", "onion"]
        );
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(EmptyTokens::from_drop_flag(true), EmptyTokens::Drop);
        assert_eq!(EmptyTokens::from_drop_flag(false), EmptyTokens::Keep);
        assert_eq!(EmptyTokens::default(), EmptyTokens::Keep);
    }

    #[test]
    fn test_canonical_keywords() {
        let keywords = canonical_keywords(&["tomato", " onion,garlic ", "", "onion"]);
        assert_eq!(keywords, vec!["garlic", "onion", "tomato"]);

        let none: Vec<String> = canonical_keywords::<&str>(&[]);
        assert!(none.is_empty());
    }
}
