pub mod models;
pub mod theme;
