//! Listing query: parameter parsing and the filter/sort/project/paginate
//! pipeline run against a catalog snapshot.

pub mod numeric;
pub mod processor;
pub mod sort;

pub use numeric::{Comparison, NumericFilter};
pub use processor::{run_query, ProductPage, ProductView};
pub use sort::SortKey;

use crate::constants::*;
use crate::types::ProductField;

/// A parsed listing request. Built from raw query-string pairs; never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub featured: Option<bool>,
    pub company: Option<Vec<String>>,
    pub name: Option<String>,
    pub size: Option<Vec<String>>,
    pub color: Option<Vec<String>>,
    pub numeric_filters: Vec<NumericFilter>,
    pub sort: Vec<SortKey>,
    pub fields: Option<Vec<ProductField>>,
    pub limit: usize,
    pub page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            featured: None,
            company: None,
            name: None,
            size: None,
            color: None,
            numeric_filters: Vec::new(),
            sort: Vec::new(),
            fields: None,
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl ProductQuery {
    /// Builds a query from query-string pairs in request order.
    ///
    /// Unknown keys are ignored. `numericFilters` accumulates across repeated
    /// keys; for every other key the last occurrence wins.
    pub fn from_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ProductQuery::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                PARAM_FEATURED => query.featured = Some(value == FEATURED_TRUE),
                PARAM_COMPANY => query.company = non_empty(value).map(split_list),
                PARAM_NAME => query.name = non_empty(value).map(str::to_string),
                PARAM_SIZE => query.size = non_empty(value).map(split_list),
                PARAM_COLOR => query.color = non_empty(value).map(split_list),
                PARAM_NUMERIC_FILTERS => {
                    if let Some(raw) = non_empty(value) {
                        query.numeric_filters.extend(NumericFilter::parse_list(raw));
                    }
                }
                PARAM_SORT => {
                    query.sort = non_empty(value).map(SortKey::parse_list).unwrap_or_default()
                }
                PARAM_FIELDS => query.fields = non_empty(value).map(parse_fields),
                PARAM_LIMIT => query.limit = positive_int(value).unwrap_or(DEFAULT_LIMIT),
                PARAM_PAGE => query.page = positive_int(value).unwrap_or(DEFAULT_PAGE),
                _ => {}
            }
        }
        query
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

// Unknown names are dropped; an empty result still means "project", giving `{}`.
fn parse_fields(value: &str) -> Vec<ProductField> {
    let mut fields = Vec::new();
    for name in value.split(',') {
        if let Ok(field) = name.trim().parse::<ProductField>() {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
    }
    fields
}

/// Leading-integer parse (`"5abc"` is 5); zero, negative and non-numeric
/// values yield `None`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

fn positive_int(value: &str) -> Option<usize> {
    parse_int_prefix(value)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_params() {
        let query = ProductQuery::from_params(Vec::<(String, String)>::new());
        assert_eq!(query, ProductQuery::default());
        assert_eq!(query.limit, 10);
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn featured_is_true_only_for_literal_true() {
        let featured = |v: &str| ProductQuery::from_params([("featured", v)]).featured;
        assert_eq!(featured("true"), Some(true));
        assert_eq!(featured("True"), Some(false));
        assert_eq!(featured("1"), Some(false));
        assert_eq!(featured(""), Some(false));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let query = ProductQuery::from_params([
            ("company", ""),
            ("name", ""),
            ("size", ""),
            ("color", ""),
            ("numericFilters", ""),
            ("sort", ""),
            ("fields", ""),
        ]);
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn multi_value_facets_split_on_commas() {
        let query = ProductQuery::from_params([
            ("company", "abstract,portrait"),
            ("size", "Digital Art"),
            ("color", "oil,ink"),
        ]);
        assert_eq!(query.company, Some(vec!["abstract".to_string(), "portrait".to_string()]));
        assert_eq!(query.size, Some(vec!["Digital Art".to_string()]));
        assert_eq!(query.color, Some(vec!["oil".to_string(), "ink".to_string()]));
    }

    #[test]
    fn repeated_numeric_filters_accumulate() {
        let query = ProductQuery::from_params([
            ("numericFilters", "price>=100"),
            ("numericFilters", "price<=200,bogus"),
        ]);
        let clauses: Vec<String> = query.numeric_filters.iter().map(|f| f.to_string()).collect();
        assert_eq!(clauses, vec!["price>=100", "price<=200"]);
    }

    #[test]
    fn repeated_scalar_keys_take_the_last_value() {
        let query = ProductQuery::from_params([("page", "2"), ("page", "3"), ("name", "a"), ("name", "b")]);
        assert_eq!(query.page, 3);
        assert_eq!(query.name.as_deref(), Some("b"));
    }

    #[test]
    fn limit_and_page_fall_back_to_defaults() {
        for bad in ["abc", "0", "-3", ""] {
            let query = ProductQuery::from_params([("limit", bad), ("page", bad)]);
            assert_eq!(query.limit, DEFAULT_LIMIT, "limit={bad}");
            assert_eq!(query.page, DEFAULT_PAGE, "page={bad}");
        }
        let query = ProductQuery::from_params([("limit", "5abc"), ("page", " 4")]);
        assert_eq!(query.limit, 5);
        assert_eq!(query.page, 4);
        assert_eq!(query.offset(), 15);
    }

    #[test]
    fn fields_keep_known_names_once() {
        let query = ProductQuery::from_params([("fields", "id,name,bogus,id")]);
        assert_eq!(query.fields, Some(vec![ProductField::Id, ProductField::Name]));

        let query = ProductQuery::from_params([("fields", "bogus")]);
        assert_eq!(query.fields, Some(vec![]));
    }

    #[test]
    fn int_prefix_parsing() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7px"), Some(7));
        assert_eq!(parse_int_prefix("-2"), Some(-2));
        assert_eq!(parse_int_prefix("+9"), Some(9));
        assert_eq!(parse_int_prefix("x1"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ProductQuery::from_params([("q", "x"), ("brand", "Emma Davis")]);
        assert_eq!(query, ProductQuery::default());
    }
}
