//! Folio browser bindings
//!
//! Wires the page's elements to the state machines in `folio-core`. Each
//! feature looks up its elements once at startup and is skipped when they
//! are missing.

#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod filter;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod panel;
#[cfg(target_arch = "wasm32")]
mod particles;
#[cfg(target_arch = "wasm32")]
mod prefs;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomError, DomResult};
#[cfg(target_arch = "wasm32")]
pub use web::{start, stop_particles};
