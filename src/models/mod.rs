pub mod brand;
pub mod product;
