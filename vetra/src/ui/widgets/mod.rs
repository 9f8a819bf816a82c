pub(crate) mod action_bar;
pub(crate) mod cart_page;
pub(crate) mod category_panel;
pub(crate) mod filter_panel;
pub(crate) mod product_grid;
pub(crate) mod product_page;
pub(crate) mod search_bar;
