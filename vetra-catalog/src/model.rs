use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Current catalog schema version.
pub const CATALOG_VERSION: u8 = 1;

/// A product grouping shown in the category panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Single image belonging to a product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub path: String,
    #[serde(default)]
    pub is_main: bool,
}

/// Purchasable variant of a product (one color/size combination).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: u64,
    pub color: String,
    pub size: String,
    #[serde(default)]
    pub brightness: Option<String>,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl ProductVariant {
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Return the main image, falling back to the first one.
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_main)
            .or_else(|| self.images.first())
    }

    /// Serialized list of this variant's image paths, in gallery order.
    ///
    /// The product page consumes the manifest as an opaque string and
    /// tolerates a malformed one by rendering an empty gallery.
    pub fn image_manifest(&self) -> String {
        let paths: Vec<&str> =
            self.images.iter().map(|image| image.path.as_str()).collect();
        serde_json::to_string(&paths).unwrap_or_else(|_| String::from("[]"))
    }
}

/// Schema-driven feature value attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Text(String),
}

impl FeatureValue {
    /// Normalize a raw value the way filters compare it: text lowercased,
    /// "true"/"false" strings collapsed to booleans.
    pub fn normalized(&self) -> FeatureValue {
        match self {
            FeatureValue::Bool(value) => FeatureValue::Bool(*value),
            FeatureValue::Text(raw) => {
                let cleaned = raw.trim().to_lowercase();
                match cleaned.as_str() {
                    "true" => FeatureValue::Bool(true),
                    "false" => FeatureValue::Bool(false),
                    _ => FeatureValue::Text(cleaned),
                }
            },
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Bool(true) => write!(f, "Yes"),
            FeatureValue::Bool(false) => write!(f, "No"),
            FeatureValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A sellable product with its variants and schema features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub features: BTreeMap<String, FeatureValue>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|candidate| candidate == slug)
    }

    /// In-stock variants ordered by (color, size, brightness).
    pub fn in_stock_variants(&self) -> Vec<&ProductVariant> {
        let mut variants: Vec<&ProductVariant> =
            self.variants.iter().filter(|v| v.in_stock()).collect();
        variants.sort_by(|a, b| {
            (&a.color, &a.size, &a.brightness)
                .cmp(&(&b.color, &b.size, &b.brightness))
        });
        variants
    }
}

/// Root payload persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u8,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            version: CATALOG_VERSION,
            categories: Vec::new(),
            products: Vec::new(),
        }
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    /// Resolve a variant and its owning product by variant id.
    pub fn variant(&self, variant_id: u64) -> Option<(&Product, &ProductVariant)> {
        for product in &self.products {
            if let Some(variant) =
                product.variants.iter().find(|v| v.id == variant_id)
            {
                return Some((product, variant));
            }
        }
        None
    }

    /// All distinct variant colors, capitalized for display.
    pub fn all_colors(&self) -> Vec<String> {
        let mut colors: Vec<String> = self
            .products
            .iter()
            .flat_map(|product| &product.variants)
            .map(|variant| capitalize(&variant.color))
            .collect();
        colors.sort();
        colors.dedup();
        colors
    }

    /// All distinct variant sizes.
    pub fn all_sizes(&self) -> Vec<String> {
        let mut sizes: Vec<String> = self
            .products
            .iter()
            .flat_map(|product| &product.variants)
            .map(|variant| variant.size.clone())
            .collect();
        sizes.sort();
        sizes.dedup();
        sizes
    }

    /// All distinct non-empty brightness values, lowercased.
    pub fn all_brightness_values(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .products
            .iter()
            .flat_map(|product| &product.variants)
            .filter_map(|variant| variant.brightness.as_deref())
            .filter(|value| !value.trim().is_empty())
            .map(str::to_lowercase)
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

/// Pick the variant the product page should open on.
///
/// Tries a color+size match first, then a color-only match, then the
/// first in-stock variant. Returns `None` when nothing is in stock.
pub fn select_variant<'a>(
    product: &'a Product,
    color: Option<&str>,
    size: Option<&str>,
) -> Option<&'a ProductVariant> {
    let in_stock = product.in_stock_variants();

    if let (Some(color), Some(size)) = (color, size)
        && let Some(found) = in_stock
            .iter()
            .find(|v| {
                v.color.eq_ignore_ascii_case(color)
                    && v.size.eq_ignore_ascii_case(size)
            })
            .copied()
    {
        return Some(found);
    }

    if let Some(color) = color
        && let Some(found) = in_stock
            .iter()
            .find(|v| v.color.eq_ignore_ascii_case(color))
            .copied()
    {
        return Some(found);
    }

    in_stock.first().copied()
}

/// Sizes available for a color, among in-stock variants.
pub fn sizes_for_color(product: &Product, color: &str) -> Vec<String> {
    let mut sizes: Vec<String> = product
        .in_stock_variants()
        .iter()
        .filter(|v| v.color.eq_ignore_ascii_case(color))
        .map(|v| v.size.clone())
        .collect();
    sizes.sort();
    sizes.dedup();
    sizes
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
