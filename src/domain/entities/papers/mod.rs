pub mod paper;
pub mod address;
pub mod image;
pub mod bookmark;
