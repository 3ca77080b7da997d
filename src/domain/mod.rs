pub mod category;
pub mod filter;
pub mod hierarchy;
pub mod listing;
pub mod product;
pub mod types;
