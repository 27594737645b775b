pub mod animation;
pub mod scheduler;
