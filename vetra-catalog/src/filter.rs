use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, FeatureValue, Product};

/// How an attribute is rendered and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Boolean,
    Select,
    #[serde(rename = "string")]
    Text,
}

/// One filterable attribute of a category schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Per-category attribute schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySchema {
    #[serde(default)]
    pub attributes: Vec<AttributeSchema>,
}

/// Schema file payload: schema name to category schema.
pub type SchemaFile = BTreeMap<String, CategorySchema>;

/// Find the schema whose name occurs in the category name.
///
/// Matching is case-insensitive containment, so a "Coat" schema serves
/// the "Winter Coats" category.
pub fn schema_for_category<'a>(
    schemas: &'a SchemaFile,
    category_name: &str,
) -> Option<&'a CategorySchema> {
    let lowered = category_name.to_lowercase();
    schemas
        .iter()
        .find(|(name, _)| lowered.contains(&name.to_lowercase()))
        .map(|(_, schema)| schema)
}

/// Active filter selections applied to the product grid.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub colors: BTreeSet<String>,
    pub negative_colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub brightness: BTreeSet<String>,
    pub min_price_cents: Option<u32>,
    pub max_price_cents: Option<u32>,
    pub features: BTreeMap<String, Vec<FeatureValue>>,
    pub negative_features: BTreeMap<String, Vec<FeatureValue>>,
    pub search: Option<String>,
}

impl FilterQuery {
    /// True when no selection narrows the grid beyond the category.
    pub fn is_unfiltered(&self) -> bool {
        self.colors.is_empty()
            && self.negative_colors.is_empty()
            && self.sizes.is_empty()
            && self.brightness.is_empty()
            && self.min_price_cents.is_none()
            && self.max_price_cents.is_none()
            && self.features.is_empty()
            && self.negative_features.is_empty()
            && self.search.is_none()
    }
}

/// Apply a filter query to the catalog, schema-aware.
pub fn apply<'a>(
    catalog: &'a Catalog,
    query: &FilterQuery,
    schemas: &SchemaFile,
) -> Vec<&'a Product> {
    let schema = query
        .category
        .as_deref()
        .and_then(|slug| catalog.category(slug))
        .and_then(|category| schema_for_category(schemas, &category.name));
    let attributes: &[AttributeSchema] =
        schema.map(|s| s.attributes.as_slice()).unwrap_or(&[]);

    catalog
        .products
        .iter()
        .filter(|product| matches(product, query, attributes))
        .collect()
}

fn matches(
    product: &Product,
    query: &FilterQuery,
    attributes: &[AttributeSchema],
) -> bool {
    if let Some(category) = query.category.as_deref()
        && !product.in_category(category)
    {
        return false;
    }

    if let Some(search) = query.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty()
            && !product.name.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(min) = query.min_price_cents
        && product.price_cents < min
    {
        return false;
    }
    if let Some(max) = query.max_price_cents
        && product.price_cents > max
    {
        return false;
    }

    if !variant_selection_matches(product, query) {
        return false;
    }

    if !query.sizes.is_empty()
        && !product
            .variants
            .iter()
            .any(|variant| query.sizes.contains(&variant.size))
    {
        return false;
    }

    if product
        .variants
        .iter()
        .any(|variant| query.negative_colors.contains(&variant.color.to_lowercase()))
    {
        return false;
    }

    positive_features_match(product, &query.features, attributes)
        && negative_features_pass(product, &query.negative_features, attributes)
}

/// Color and brightness constrain the same variant when both are set.
fn variant_selection_matches(product: &Product, query: &FilterQuery) -> bool {
    let colors = &query.colors;
    let brightness = &query.brightness;

    if colors.is_empty() && brightness.is_empty() {
        return true;
    }

    product.variants.iter().any(|variant| {
        let color_ok = colors.is_empty()
            || colors.contains(&variant.color.to_lowercase());
        let brightness_ok = brightness.is_empty()
            || variant
                .brightness
                .as_deref()
                .is_some_and(|value| brightness.contains(&value.to_lowercase()));
        color_ok && brightness_ok
    })
}

fn positive_features_match(
    product: &Product,
    selected: &BTreeMap<String, Vec<FeatureValue>>,
    attributes: &[AttributeSchema],
) -> bool {
    for (key, values) in selected {
        if values.is_empty() {
            continue;
        }
        let Some(attribute) = attributes.iter().find(|a| &a.key == key) else {
            continue;
        };

        let actual = product.features.get(key).map(FeatureValue::normalized);
        match attribute.kind {
            // Every selected boolean must hold, mirroring chained
            // conjunctive filters.
            AttributeKind::Boolean => {
                for value in values {
                    if actual.as_ref() != Some(&value.normalized()) {
                        return false;
                    }
                }
            },
            // Select and free-text match any of the chosen options.
            AttributeKind::Select | AttributeKind::Text => {
                let any = values.iter().any(|value| {
                    actual.as_ref() == Some(&value.normalized())
                });
                if !any {
                    return false;
                }
            },
        }
    }
    true
}

fn negative_features_pass(
    product: &Product,
    excluded: &BTreeMap<String, Vec<FeatureValue>>,
    attributes: &[AttributeSchema],
) -> bool {
    for (key, values) in excluded {
        if values.is_empty() {
            continue;
        }
        let Some(attribute) = attributes.iter().find(|a| &a.key == key) else {
            continue;
        };

        let actual = product.features.get(key).map(FeatureValue::normalized);
        match attribute.kind {
            AttributeKind::Boolean
            | AttributeKind::Select
            | AttributeKind::Text => {
                let hit = values.iter().any(|value| {
                    actual.as_ref() == Some(&value.normalized())
                });
                if hit {
                    return false;
                }
            },
        }
    }
    true
}
