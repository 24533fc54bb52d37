//! Page URL query parameters.

use crate::catalog::CategoryFilter;

/// Value of `key` in a URL query string (leading `?` optional).
///
/// Both keys and values are form-decoded: `+` is a space and `%XX` escapes
/// are resolved. A value whose escapes are not valid UTF-8 is returned with
/// only the `+` replaced.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| form_decode(k) == key)
        .map(|(_, v)| form_decode(v))
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Category pre-selected by `?category=...`.
///
/// Returns `None` for a missing, empty, `all` or unrecognised value so that
/// the filter state stays at its default.
pub fn category_from_query(query: &str) -> Option<CategoryFilter> {
    let value = query_param(query, "category")?;
    match value.parse::<CategoryFilter>() {
        Ok(CategoryFilter::All) | Err(_) => None,
        Ok(filter) => Some(filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?a=1&b=two", "b"), Some("two".to_string()));
        assert_eq!(query_param("a=1", "a"), Some("1".to_string()));
        assert_eq!(query_param("?q=max+bank", "q"), Some("max bank".to_string()));
        assert_eq!(query_param("?flag", "flag"), Some(String::new()));
        assert_eq!(query_param("", "a"), None);
    }

    #[test]
    fn test_query_param_percent_escapes() {
        assert_eq!(query_param("?q=max%20bank", "q"), Some("max bank".to_string()));
        assert_eq!(query_param("?q=1%2B1", "q"), Some("1+1".to_string()));
        assert_eq!(query_param("?%63ategory=money", "category"), Some("money".to_string()));
        // Invalid UTF-8 escapes fall back to the raw text.
        assert_eq!(query_param("?q=%FF", "q"), Some("%FF".to_string()));
    }

    #[test]
    fn test_category_from_query() {
        assert_eq!(
            category_from_query("?category=money"),
            Some(CategoryFilter::Only(Category::Money))
        );
        assert_eq!(category_from_query("?category=all"), None);
        assert_eq!(category_from_query("?category=books"), None);
        assert_eq!(category_from_query("?category="), None);
        assert_eq!(category_from_query("?sort=name"), None);
        assert_eq!(
            category_from_query("?category=%77eapons"),
            Some(CategoryFilter::Only(Category::Weapons))
        );
    }
}
