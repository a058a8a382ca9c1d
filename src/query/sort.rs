use crate::types::{Product, ProductField};
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: ProductField,
    pub descending: bool,
}

impl SortKey {
    /// Parses `sort=name,-price`; a leading `-` means descending. Unknown
    /// fields are skipped since they cannot order anything.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',')
            .filter_map(|segment| {
                let (name, descending) = match segment.strip_prefix('-') {
                    Some(rest) => (rest, true),
                    None => (segment, false),
                };
                match name.trim().parse::<ProductField>() {
                    Ok(field) => Some(SortKey { field, descending }),
                    Err(e) => {
                        debug!("Ignoring sort key: {}", e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        // Only `description` can be missing; a missing value ties with anything.
        let ord = match (a.field(self.field), b.field(self.field)) {
            (Some(x), Some(y)) => x.compare(&y),
            _ => Ordering::Equal,
        };
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

fn compare_by_keys(keys: &[SortKey], a: &Product, b: &Product) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable multi-key sort: later keys only break ties of earlier ones.
pub fn sort_products(products: &mut [&Product], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    if keys.iter().any(|key| key.field == ProductField::Description) {
        // Missing descriptions make the ordering non-transitive, which
        // `sort_by` may panic on. Insertion sort only swaps strict inversions.
        for i in 1..products.len() {
            let mut j = i;
            while j > 0 && compare_by_keys(keys, products[j - 1], products[j]).is_gt() {
                products.swap(j - 1, j);
                j -= 1;
            }
        }
        return;
    }
    products.sort_by(|a, b| compare_by_keys(keys, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn parses_direction_prefix() {
        let keys = SortKey::parse_list("-price,name,bogus,-");
        assert_eq!(
            keys,
            vec![
                SortKey { field: ProductField::Price, descending: true },
                SortKey { field: ProductField::Name, descending: false },
            ]
        );
    }

    #[test]
    fn descending_price() {
        let products = seed_products();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &SortKey::parse_list("-price"));
        assert_eq!(refs.first().map(|p| p.id), Some(7));
        assert_eq!(refs.last().map(|p| p.id), Some(10));
    }

    #[test]
    fn ties_keep_original_order() {
        let products = seed_products();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &SortKey::parse_list("company"));
        let abstract_ids: Vec<u64> = refs.iter().filter(|p| p.company == "abstract").map(|p| p.id).collect();
        let cartoon_ids: Vec<u64> = refs.iter().filter(|p| p.company == "cartoon").map(|p| p.id).collect();
        assert_eq!(abstract_ids, vec![1, 11]);
        assert_eq!(cartoon_ids, vec![8, 12]);
        assert_eq!(ids(&refs[..2]), vec![1, 11]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let products = seed_products();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &SortKey::parse_list("featured,-price"));
        // non-featured first, most expensive first within each group
        assert_eq!(ids(&refs[..3]), vec![7, 8, 12]);
        assert_eq!(refs[6].id, 1);
    }

    #[test]
    fn missing_description_ties_with_present_one() {
        let mut products: Vec<Product> = seed_products().into_iter().take(3).collect();
        products[1].description = Some("Oil on canvas".to_string());
        for raw in ["description", "-description"] {
            let mut refs: Vec<&Product> = products.iter().collect();
            sort_products(&mut refs, &SortKey::parse_list(raw));
            assert_eq!(ids(&refs), vec![1, 2, 3], "{raw}");
        }
    }

    #[test]
    fn described_records_still_order_among_themselves() {
        let mut products: Vec<Product> = seed_products().into_iter().take(3).collect();
        products[0].description = Some("b".to_string());
        products[1].description = Some("a".to_string());
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &SortKey::parse_list("description"));
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }

    #[test]
    fn unknown_keys_leave_order_untouched() {
        let products = seed_products();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, &SortKey::parse_list("popularity"));
        assert_eq!(ids(&refs), (1..=12).collect::<Vec<_>>());
    }
}
