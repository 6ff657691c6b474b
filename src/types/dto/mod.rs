// API request and response models
pub mod audit;
pub mod catalog;
pub mod common;
pub mod directory;
