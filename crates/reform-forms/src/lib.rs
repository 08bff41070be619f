//! Declarative form definitions for Reform
//!
//! This crate provides:
//! - A registry of form types, each owning its own field declarations
//! - Form instances that bind runtime values to the declared fields
//! - Markup rendering through swappable renderer strategies
//! - A small set of bundled fields and renderers

pub mod field;
pub mod fields;
pub mod form;
pub mod registry;
pub mod render;
pub mod renderer;
pub mod settings;

pub use field::{FieldConstructor, FieldError, FieldOptions, FieldResult, FieldType, FormField};
pub use fields::{
	CheckboxField, HiddenField, PASSWORD_REDACTED, PasswordField, SelectField, TextAreaField,
	TextField,
};
pub use form::{FormError, FormInstance, FormOptions, FormResult, ValidityCheck};
pub use registry::{FieldSpec, Fieldset, FormDefinition, FormRegistry, FormType, FormTypeDef, FormTypeMetadata};
pub use render::render_form;
pub use renderer::{
	OlRenderer, ParagraphRenderer, Renderer, RendererType, TableRenderer, UlRenderer,
};
pub use settings::FormSettings;
