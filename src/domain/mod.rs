pub mod brand;
pub mod product;
pub mod slug;
