// Catalog data and request/response models

pub mod exercise;
pub mod recommendation;

pub use exercise::*;
pub use recommendation::*;
