//! Core building blocks that carry no game rules of their own.

pub mod rng;

pub use rng::GameRng;
