pub mod connections;
pub mod render;
