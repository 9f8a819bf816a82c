use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Catalog;

/// One cart row joined against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub variant_id: u64,
    pub product_name: String,
    pub product_slug: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub unit_cents: u32,
    pub total_cents: u32,
}

/// Shopping cart: variant id to quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    entries: BTreeMap<u64, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a variant, creating the entry on first add.
    pub fn add(&mut self, variant_id: u64) {
        *self.entries.entry(variant_id).or_insert(0) += 1;
    }

    /// Total number of units across all entries.
    pub fn len(&self) -> u32 {
        self.entries.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Join entries against the catalog.
    ///
    /// Entries whose variant the catalog no longer resolves are
    /// skipped, so a stale persisted cart degrades instead of failing.
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.entries
            .iter()
            .filter_map(|(&variant_id, &quantity)| {
                let (product, variant) = catalog.variant(variant_id)?;
                Some(CartLine {
                    variant_id,
                    product_name: product.name.clone(),
                    product_slug: product.slug.clone(),
                    color: variant.color.clone(),
                    size: variant.size.clone(),
                    quantity,
                    unit_cents: product.price_cents,
                    total_cents: product.price_cents * quantity,
                })
            })
            .collect()
    }

    /// Total cost of all resolvable entries.
    pub fn total_cents(&self, catalog: &Catalog) -> u32 {
        self.lines(catalog).iter().map(|line| line.total_cents).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{
        CATALOG_VERSION, Product, ProductVariant,
    };

    fn catalog_with_variant(variant_id: u64, price_cents: u32) -> Catalog {
        Catalog {
            version: CATALOG_VERSION,
            categories: Vec::new(),
            products: vec![Product {
                sku: String::from("sku-1"),
                name: String::from("Wool Coat"),
                slug: String::from("wool-coat"),
                description: String::new(),
                price_cents,
                categories: Vec::new(),
                features: BTreeMap::new(),
                variants: vec![ProductVariant {
                    id: variant_id,
                    color: String::from("Black"),
                    size: String::from("M"),
                    brightness: None,
                    stock_quantity: 5,
                    images: Vec::new(),
                }],
            }],
        }
    }

    #[test]
    fn given_repeated_adds_when_counting_then_quantities_accumulate() {
        let mut cart = Cart::new();

        cart.add(7);
        cart.add(7);
        cart.add(9);

        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn given_resolvable_entries_when_joining_then_totals_multiply_out() {
        let catalog = catalog_with_variant(7, 12_500);
        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);

        let lines = cart.lines(&catalog);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].total_cents, 25_000);
        assert_eq!(cart.total_cents(&catalog), 25_000);
    }

    #[test]
    fn given_stale_entry_when_joining_then_it_is_skipped() {
        let catalog = catalog_with_variant(7, 12_500);
        let mut cart = Cart::new();
        cart.add(7);
        cart.add(404);

        let lines = cart.lines(&catalog);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].variant_id, 7);
        assert_eq!(cart.total_cents(&catalog), 12_500);
    }

    #[test]
    fn given_clear_when_called_then_cart_is_empty() {
        let mut cart = Cart::new();
        cart.add(7);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }
}
