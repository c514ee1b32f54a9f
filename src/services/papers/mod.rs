pub mod paper_service;
pub mod address_service;
pub mod image_service;

pub use paper_service::*;
pub use address_service::*;
pub use image_service::*;
