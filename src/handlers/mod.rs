pub mod health;
pub mod catalog;
pub mod users;
pub mod orders;
pub mod fallback;
