pub mod conditions;
pub mod foods;
pub mod recommend;
