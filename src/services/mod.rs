pub mod generation_service;
pub mod product_service;
