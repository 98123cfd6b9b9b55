pub mod core;
pub mod models;
pub mod catalog;
pub mod stores;
pub mod storage;
pub mod orders;
pub mod validation;
pub mod handlers;
