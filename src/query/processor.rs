use super::sort::sort_products;
use super::ProductQuery;
use crate::types::{Product, ProductField};
use serde::Serialize;
use serde_json::{Map, Value};

/// One entry of a listing page: the full record, or only the requested fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductView {
    Full(Product),
    Projected(Map<String, Value>),
}

impl ProductView {
    fn build(product: &Product, fields: Option<&[ProductField]>) -> Self {
        match fields {
            None => ProductView::Full(product.clone()),
            Some(fields) => {
                let map = fields
                    .iter()
                    .filter_map(|f| product.field_json(*f).map(|v| (f.as_str().to_string(), v)))
                    .collect();
                ProductView::Projected(map)
            }
        }
    }
}

/// Result envelope of the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Matches before pagination
    pub count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub products: Vec<ProductView>,
}

/// Runs the listing pipeline over a catalog snapshot.
///
/// Stages run in a fixed order: featured, company, name, size, color,
/// numeric filters, sort, projection, pagination. The catalog is only read.
pub fn run_query(catalog: &[Product], query: &ProductQuery) -> ProductPage {
    let name_needle = query.name.as_ref().map(|n| n.to_lowercase());

    let mut matched: Vec<&Product> = catalog
        .iter()
        .filter(|p| query.featured.map_or(true, |featured| p.featured == featured))
        .filter(|p| {
            query
                .company
                .as_ref()
                .map_or(true, |companies| companies.contains(&p.company.to_lowercase()))
        })
        .filter(|p| {
            name_needle
                .as_ref()
                .map_or(true, |needle| p.name.to_lowercase().contains(needle.as_str()))
        })
        .filter(|p| query.size.as_ref().map_or(true, |sizes| any_tag(&p.size, sizes)))
        .filter(|p| query.color.as_ref().map_or(true, |colors| any_tag(&p.color, colors)))
        .filter(|p| query.numeric_filters.iter().all(|f| f.matches(p)))
        .collect();

    sort_products(&mut matched, &query.sort);

    let count = matched.len();
    let total_pages = count.div_ceil(query.limit);
    let start = query.offset().min(count);
    let end = query.page.saturating_mul(query.limit).min(count);

    let products = matched[start..end]
        .iter()
        .map(|p| ProductView::build(p, query.fields.as_deref()))
        .collect();

    ProductPage {
        count,
        total_pages,
        current_page: query.page,
        products,
    }
}

fn any_tag(tags: &[String], wanted: &[String]) -> bool {
    tags.iter().any(|t| wanted.contains(t))
}
