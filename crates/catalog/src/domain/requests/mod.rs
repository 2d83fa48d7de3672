pub mod product;
pub mod product_form;
