//! Search-as-you-type suggestions.

use crate::catalog::Product;

/// Maximum number of suggestions shown under the search box.
pub const MAX_SUGGESTIONS: usize = 5;

/// What the suggestion dropdown should show.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions<'a> {
    /// Nothing typed; the dropdown stays hidden.
    Hidden,
    /// Something typed but nothing matched ("No products found").
    NoResults,
    /// Up to [`MAX_SUGGESTIONS`] matches, in catalog order.
    Matches(Vec<&'a Product>),
}

impl<'a> Suggestions<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            Suggestions::Matches(products) => products,
            _ => &[],
        }
    }
}

/// Products whose name or tags contain `query`, case-insensitively.
///
/// Whitespace-only input counts as empty.
pub fn suggest<'a>(products: &'a [Product], query: &str) -> Suggestions<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Suggestions::Hidden;
    }

    let matches: Vec<&Product> = products
        .iter()
        .filter(|p| p.matches_name_or_tag(&needle))
        .take(MAX_SUGGESTIONS)
        .collect();

    if matches.is_empty() {
        Suggestions::NoResults
    } else {
        Suggestions::Matches(matches)
    }
}
