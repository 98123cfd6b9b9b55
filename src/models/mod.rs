pub mod user;
pub mod food;
pub mod api;
