use std::collections::BTreeSet;

use crate::model::{Product, ProductImage, ProductVariant};

/// Variant and image chosen to represent a product in the grid.
#[derive(Debug, Clone, Copy)]
pub struct DisplaySelection<'a> {
    pub variant: &'a ProductVariant,
    pub image: &'a ProductImage,
}

/// Pick the grid thumbnail for a product under the active filters.
///
/// Tiers: a variant matching both active color and brightness; a color
/// match when only colors are active; a brightness match when only
/// brightness is active. The absolute fallbacks (first variant with a
/// main image, then the first variant) apply only when neither filter
/// is active, so a filtered grid never shows an off-filter image.
pub fn select_display_image<'a>(
    product: &'a Product,
    colors: &BTreeSet<String>,
    brightness: &BTreeSet<String>,
) -> Option<DisplaySelection<'a>> {
    let variants = &product.variants;

    let mut best: Option<&ProductVariant> = None;

    if !colors.is_empty() && !brightness.is_empty() {
        best = variants.iter().find(|v| {
            colors.contains(&v.color.to_lowercase())
                && v.brightness
                    .as_deref()
                    .is_some_and(|b| brightness.contains(&b.to_lowercase()))
        });
    }

    if best.is_none() && !colors.is_empty() && brightness.is_empty() {
        best = variants
            .iter()
            .find(|v| colors.contains(&v.color.to_lowercase()));
    }

    if best.is_none() && !brightness.is_empty() && colors.is_empty() {
        best = variants.iter().find(|v| {
            v.brightness
                .as_deref()
                .is_some_and(|b| brightness.contains(&b.to_lowercase()))
        });
    }

    if best.is_none() && colors.is_empty() && brightness.is_empty() {
        best = variants
            .iter()
            .find(|v| v.images.iter().any(|image| image.is_main))
            .or_else(|| variants.first());
    }

    let variant = best?;
    let image = variant.main_image()?;
    Some(DisplaySelection { variant, image })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::model::ProductVariant;

    fn image(path: &str, is_main: bool) -> ProductImage {
        ProductImage {
            path: String::from(path),
            is_main,
        }
    }

    fn variant(
        id: u64,
        color: &str,
        brightness: Option<&str>,
        images: Vec<ProductImage>,
    ) -> ProductVariant {
        ProductVariant {
            id,
            color: String::from(color),
            size: String::from("M"),
            brightness: brightness.map(String::from),
            stock_quantity: 5,
            images,
        }
    }

    fn product(variants: Vec<ProductVariant>) -> Product {
        Product {
            sku: String::from("sku-1"),
            name: String::from("Wool Coat"),
            slug: String::from("wool-coat"),
            description: String::new(),
            price_cents: 10_000,
            categories: Vec::new(),
            features: BTreeMap::new(),
            variants,
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| String::from(*v)).collect()
    }

    #[test]
    fn given_color_and_brightness_filters_when_selecting_then_joint_match_wins()
    {
        let product = product(vec![
            variant(1, "Black", Some("light"), vec![image("light.jpg", true)]),
            variant(2, "Black", Some("dark"), vec![image("dark.jpg", true)]),
        ]);

        let selection = select_display_image(
            &product,
            &set(&["black"]),
            &set(&["dark"]),
        )
        .expect("selection should resolve");

        assert_eq!(selection.variant.id, 2);
        assert_eq!(selection.image.path, "dark.jpg");
    }

    #[test]
    fn given_only_color_filter_when_selecting_then_color_match_wins() {
        let product = product(vec![
            variant(1, "Red", None, vec![image("red.jpg", true)]),
            variant(2, "Blue", None, vec![image("blue.jpg", true)]),
        ]);

        let selection =
            select_display_image(&product, &set(&["blue"]), &BTreeSet::new())
                .expect("selection should resolve");

        assert_eq!(selection.image.path, "blue.jpg");
    }

    #[test]
    fn given_active_filters_without_match_when_selecting_then_no_fallback_applies()
    {
        let product = product(vec![variant(
            1,
            "Red",
            None,
            vec![image("red.jpg", true)],
        )]);

        let selection =
            select_display_image(&product, &set(&["blue"]), &BTreeSet::new());

        assert!(selection.is_none());
    }

    #[test]
    fn given_no_filters_when_selecting_then_main_image_variant_wins() {
        let product = product(vec![
            variant(1, "Red", None, vec![image("red.jpg", false)]),
            variant(2, "Blue", None, vec![image("blue.jpg", true)]),
        ]);

        let selection = select_display_image(
            &product,
            &BTreeSet::new(),
            &BTreeSet::new(),
        )
        .expect("selection should resolve");

        assert_eq!(selection.variant.id, 2);
        assert_eq!(selection.image.path, "blue.jpg");
    }

    #[test]
    fn given_no_main_image_anywhere_when_selecting_then_first_variant_wins() {
        let product = product(vec![
            variant(1, "Red", None, vec![image("red.jpg", false)]),
            variant(2, "Blue", None, vec![image("blue.jpg", false)]),
        ]);

        let selection = select_display_image(
            &product,
            &BTreeSet::new(),
            &BTreeSet::new(),
        )
        .expect("selection should resolve");

        assert_eq!(selection.variant.id, 1);
        assert_eq!(selection.image.path, "red.jpg");
    }

    #[test]
    fn given_variant_without_images_when_selecting_then_none_is_returned() {
        let product = product(vec![variant(1, "Red", None, Vec::new())]);

        let selection = select_display_image(
            &product,
            &BTreeSet::new(),
            &BTreeSet::new(),
        );

        assert!(selection.is_none());
    }
}
