//! Catalog queries: paging, category filtering, and the category menu.
//!
//! These are pure functions over a product slice. The storefront keeps its
//! catalog in memory behind [`ProductSource`] and calls into here per
//! request; tests call in with plain fixture slices.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::id::ProductId;
use crate::product::Product;

/// Read-only source of catalog products.
///
/// The storefront supplies an implementation backed by its loaded catalog.
/// Implementations return products in stable display order; everything
/// downstream (paging, menus, lookups) preserves that order.
pub trait ProductSource {
    /// The full catalog, in display order.
    fn products(&self) -> &[Product];

    /// Look up a product by ID.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

/// Paging metadata for one page of catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    /// 1-based page number this page corresponds to.
    pub current_page: usize,
    /// Requested page size. Always at least 1.
    pub items_per_page: usize,
    /// Number of products that matched the filter, across all pages.
    pub total_items: usize,
}

impl PagingInfo {
    /// Number of pages needed to show `total_items` at `items_per_page`.
    ///
    /// A partially filled final page counts as a page; an empty result
    /// needs zero pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }
}

/// One page of catalog results, borrowing from the underlying slice.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage<'a> {
    /// Products on this page, in catalog order.
    pub products: Vec<&'a Product>,
    /// Paging metadata for the filtered result set.
    pub paging: PagingInfo,
    /// The category filter that produced this page, echoed unchanged.
    pub category: Option<String>,
}

/// Select one page of the catalog.
///
/// With a `category`, only products whose label matches exactly
/// (case-sensitive) are considered; without one the whole catalog is.
/// Products keep their relative order, `paging.total_items` counts the
/// filtered set rather than the page, and a page past the end of the
/// results is empty rather than an error.
#[must_use]
pub fn page<'a>(
    products: &'a [Product],
    category: Option<&str>,
    page: NonZeroUsize,
    per_page: NonZeroUsize,
) -> CatalogPage<'a> {
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();

    let total_items = matched.len();
    let skip = (page.get() - 1).saturating_mul(per_page.get());

    CatalogPage {
        products: matched.into_iter().skip(skip).take(per_page.get()).collect(),
        paging: PagingInfo {
            current_page: page.get(),
            items_per_page: per_page.get(),
            total_items,
        },
        category: category.map(str::to_owned),
    }
}

/// Distinct category labels across the catalog, sorted ascending.
///
/// Drives the category navigation menu: each label appears once no matter
/// how many products carry it.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: category.to_string(),
            price: "10.00".parse().unwrap(),
            image: None,
        }
    }

    fn five_games() -> Vec<Product> {
        vec![
            product(1, "Game1", "Cat1"),
            product(2, "Game2", "Cat2"),
            product(3, "Game3", "Cat1"),
            product(4, "Game4", "Cat2"),
            product(5, "Game5", "Cat3"),
        ]
    }

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn test_second_page_holds_the_remainder() {
        let products = five_games();

        let result = page(&products, None, n(2), n(3));

        let names: Vec<&str> = result.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Game4", "Game5"]);
    }

    #[test]
    fn test_paging_info_describes_the_filtered_set() {
        let products = five_games();

        let result = page(&products, None, n(2), n(3));

        assert_eq!(result.paging.current_page, 2);
        assert_eq!(result.paging.items_per_page, 3);
        assert_eq!(result.paging.total_items, 5);
        assert_eq!(result.paging.total_pages(), 2);
    }

    #[test]
    fn test_category_filter_keeps_matching_products_in_order() {
        let products = five_games();

        let result = page(&products, Some("Cat2"), n(1), n(3));

        let names: Vec<&str> = result.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Game2", "Game4"]);
        assert_eq!(result.category.as_deref(), Some("Cat2"));
    }

    #[test]
    fn test_total_items_counts_per_category() {
        let products = five_games();

        assert_eq!(page(&products, Some("Cat1"), n(1), n(3)).paging.total_items, 2);
        assert_eq!(page(&products, Some("Cat2"), n(1), n(3)).paging.total_items, 2);
        assert_eq!(page(&products, Some("Cat3"), n(1), n(3)).paging.total_items, 1);
        assert_eq!(page(&products, None, n(1), n(3)).paging.total_items, 5);
    }

    #[test]
    fn test_unknown_category_yields_empty_page() {
        let products = five_games();

        let result = page(&products, Some("Cat4"), n(1), n(3));

        assert!(result.products.is_empty());
        assert_eq!(result.paging.total_items, 0);
        assert_eq!(result.paging.total_pages(), 0);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let products = five_games();

        let result = page(&products, Some("cat1"), n(1), n(3));

        assert!(result.products.is_empty());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let products = five_games();

        let result = page(&products, None, n(9), n(3));

        assert!(result.products.is_empty());
        assert_eq!(result.paging.current_page, 9);
        assert_eq!(result.paging.total_items, 5);
    }

    #[test]
    fn test_single_page_when_size_covers_everything() {
        let products = five_games();

        let result = page(&products, None, n(1), n(10));

        assert_eq!(result.products.len(), 5);
        assert_eq!(result.paging.total_pages(), 1);
    }

    #[test]
    fn test_exactly_divisible_totals_need_no_extra_page() {
        let info = PagingInfo {
            current_page: 1,
            items_per_page: 4,
            total_items: 8,
        };
        assert_eq!(info.total_pages(), 2);

        let info = PagingInfo {
            current_page: 1,
            items_per_page: 4,
            total_items: 9,
        };
        assert_eq!(info.total_pages(), 3);
    }

    #[test]
    fn test_menu_lists_each_category_once_sorted() {
        let products = vec![
            product(1, "Game1", "Simulator"),
            product(2, "Game2", "Simulator"),
            product(3, "Game3", "Shooter"),
            product(4, "Game4", "RPG"),
        ];

        let menu = distinct_categories(&products);

        assert_eq!(menu, ["RPG", "Shooter", "Simulator"]);
    }

    #[test]
    fn test_menu_of_empty_catalog_is_empty() {
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_product_source_find_matches_on_id() {
        struct Fixture(Vec<Product>);

        impl ProductSource for Fixture {
            fn products(&self) -> &[Product] {
                &self.0
            }
        }

        let source = Fixture(five_games());

        assert_eq!(
            source.find(ProductId::new(3)).map(|p| p.name.as_str()),
            Some("Game3")
        );
        assert!(source.find(ProductId::new(42)).is_none());
    }
}
