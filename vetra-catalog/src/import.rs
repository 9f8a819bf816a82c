use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::CatalogError;
use crate::model::{
    CATALOG_VERSION, Catalog, Category, Product, ProductImage, ProductVariant,
};

/// Default stock assigned to imported variants.
const DEFAULT_STOCK: u32 = 10;
/// Images imported per variant, matching the scraper's capture depth.
const MAX_IMAGES_PER_VARIANT: usize = 5;

const DEFAULT_SIZES: [&str; 3] = ["S", "M", "L"];
const DEFAULT_COLOR: &str = "Universal";

/// One record of the scraper's results file.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// Import a scraped results file into a fresh catalog.
pub fn import_results(
    path: &Path,
    category_name: &str,
) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path)?;
    parse_results(&data, category_name)
}

/// Build a catalog from the raw results payload.
///
/// Records without a sku or name are skipped; records with a malformed
/// price are skipped with a warning. Records sharing a sku merge into
/// one product with one variant per (color, size).
pub fn parse_results(
    data: &str,
    category_name: &str,
) -> Result<Catalog, CatalogError> {
    let records: Vec<ResultRecord> = serde_json::from_str(data)?;

    let category = Category {
        name: String::from(category_name),
        slug: slugify(category_name),
    };

    let mut products: Vec<Product> = Vec::new();
    let mut next_variant_id: u64 = 1;

    for record in records {
        let (Some(sku), Some(name)) = (record.sku, record.name) else {
            continue;
        };

        let price_raw = record.price.as_deref().unwrap_or("0.00");
        let Some(price_cents) = parse_price_cents(price_raw) else {
            log::warn!("skipping {sku}: unparsable price {price_raw:?}");
            continue;
        };

        let color = record
            .color
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_COLOR));

        let images: Vec<ProductImage> = record
            .images
            .into_iter()
            .take(MAX_IMAGES_PER_VARIANT)
            .enumerate()
            .map(|(index, path)| ProductImage {
                path,
                is_main: index == 0,
            })
            .collect();

        let sizes = if record.sizes.is_empty() {
            DEFAULT_SIZES.iter().map(|s| String::from(*s)).collect()
        } else {
            record.sizes
        };

        let position = match products.iter().position(|p| p.sku == sku) {
            Some(position) => position,
            None => {
                let slug = unique_slug(&products, &name, &sku);
                products.push(Product {
                    sku: sku.clone(),
                    name,
                    slug,
                    description: record.description,
                    price_cents,
                    categories: vec![category.slug.clone()],
                    features: Default::default(),
                    variants: Vec::new(),
                });
                products.len() - 1
            },
        };

        let product = &mut products[position];
        for size in sizes {
            let exists = product
                .variants
                .iter()
                .any(|v| v.color == color && v.size == size);
            if exists {
                continue;
            }

            product.variants.push(ProductVariant {
                id: next_variant_id,
                color: color.clone(),
                size,
                brightness: None,
                stock_quantity: DEFAULT_STOCK,
                images: images.clone(),
            });
            next_variant_id += 1;
        }
    }

    Ok(Catalog {
        version: CATALOG_VERSION,
        categories: vec![category],
        products,
    })
}

/// Parse a scraped price with either decimal separator into cents.
fn parse_price_cents(raw: &str) -> Option<u32> {
    let normalized = raw.trim().replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * 100.0).round() as u32)
}

fn unique_slug(products: &[Product], name: &str, sku: &str) -> String {
    let base = slugify(name);
    if !products.iter().any(|p| p.slug == base) {
        return base;
    }
    format!("{base}-{}", slugify(sku))
}

/// Lowercase, alphanumerics kept, runs of anything else collapse to one
/// dash.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
