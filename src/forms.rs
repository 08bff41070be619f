//! Forms module.
//!
//! This module provides the form type registry, form instances and the
//! bundled fields and renderers.
//!
//! # Examples
//!
//! ```rust
//! use reform::forms::{FieldOptions, FieldType, FormRegistry, TextField};
//!
//! let mut registry = FormRegistry::new();
//! registry
//!     .define("Search", |form| {
//!         form.declare_field("q", FieldType::of::<TextField>(), FieldOptions::new());
//!     })
//!     .unwrap();
//! ```

pub use reform_forms::*;
