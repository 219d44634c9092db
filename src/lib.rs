//! Desktop 2D scene editor built on the `stage` engine.
//!
//! The engine crate owns the scene model, camera, gesture handling and the
//! inspector controls. This crate adds what makes it an application: the
//! command-line/environment configuration and panel layout, the hierarchy
//! and console panels, the [`editor::Editor`] that wires them together, Rust
//! source export, and (with the `desktop` feature) the raylib window host.

pub mod codegen;
pub mod config;
pub mod console;
pub mod editor;
pub mod hierarchy;
#[cfg(feature = "desktop")]
pub mod host;

#[cfg(test)]
#[path = "fake_surface_test.rs"]
mod fake_surface;
