//! Platform abstraction layer
//!
//! Browser bindings live in `web` (wasm32 only). Native builds drive the
//! session directly from `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;
