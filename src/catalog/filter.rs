//! Client-side search over the product table.

use crate::model::Product;
use std::str::FromStr;

/// Status dropdown of the product table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn accepts(self, product: &Product) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => product.status,
            StatusFilter::Inactive => !product.status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(format!("unknown status filter: {}", other)),
        }
    }
}

/// Products whose name or description contains `search` (case-insensitive) and whose
/// status passes `status`. Order is preserved.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    status: StatusFilter,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .filter(|p| status.accepts(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Product> {
        vec![
            Product::new("Desk Lamp", "Warm light", 20.0, true),
            Product::new("Chair", "Ergonomic, fits any desk", 120.0, false),
            Product::new("Mug", "Ceramic", 8.0, true),
        ]
    }

    fn names(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let products = table();
        assert_eq!(
            names(filter_products(&products, "DESK", StatusFilter::All)),
            vec!["Desk Lamp", "Chair"]
        );
        assert_eq!(names(filter_products(&products, "", StatusFilter::All)).len(), 3);
        assert!(filter_products(&products, "sofa", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_combines_with_search() {
        let products = table();
        assert_eq!(
            names(filter_products(&products, "desk", StatusFilter::Active)),
            vec!["Desk Lamp"]
        );
        assert_eq!(
            names(filter_products(&products, "", StatusFilter::Inactive)),
            vec!["Chair"]
        );
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!("Active".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!("".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}
