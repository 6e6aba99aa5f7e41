//! friends-rs
//! ==========
//!
//! Umbrella crate for the workspace. Re-exports [`friends_core`] so the demos
//! under `demos/` can `use friends_rs::prelude::*`.

pub use friends_core::*;
