pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod layouts;
pub mod lm;
pub mod trie;
pub mod vocab;

pub use engine::{Candidate, Engine, WordEntry};
pub use error::{SkResult, SwipeKeyError};
