pub mod item;
pub mod limit;
