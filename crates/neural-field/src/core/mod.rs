pub mod field;
pub mod particle;
pub mod pointer;
pub mod rng;
