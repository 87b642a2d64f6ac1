pub mod error;
pub mod grid;
pub mod export;
pub mod render;
pub mod editor;
pub mod ht16k33;
#[cfg(feature = "serde")]
pub mod config;
