pub mod cart;
pub mod color;
pub mod display;
pub mod errors;
pub mod filter;
pub mod import;
pub mod model;
pub mod storage;

pub use cart::{Cart, CartLine};
pub use color::{COLOR_FAMILIES, color_family, family_hex};
pub use display::{DisplaySelection, select_display_image};
pub use errors::CatalogError;
pub use filter::{
    AttributeKind, AttributeSchema, CategorySchema, FilterQuery, SchemaFile,
    apply, schema_for_category,
};
pub use import::{import_results, parse_results, slugify};
pub use model::{
    CATALOG_VERSION, Catalog, Category, FeatureValue, Product, ProductImage,
    ProductVariant, select_variant, sizes_for_color,
};
pub use storage::{
    default_catalog_path, default_schemas_path, load_catalog, load_schemas,
    save_catalog,
};
