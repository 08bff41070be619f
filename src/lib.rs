//! # Reform
//!
//! Declarative form definitions for Rust.
//!
//! A form type is registered once, declaring its fields in order. Instances
//! of that type bind runtime values to the fields and render themselves to
//! markup through a renderer strategy that can be swapped per type or per
//! instance.
//!
//! ## Feature Flags
//!
//! - `forms` - Form registry, instances, fields and renderers
//! - `full` (default) - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use reform::prelude::*;
//!
//! struct ContactForm;
//!
//! impl FormDefinition for ContactForm {
//!     const NAME: &'static str = "ContactForm";
//!
//!     fn define(form: &mut FormTypeDef) {
//!         form.declare_field("email", FieldType::of::<TextField>(), FieldOptions::new())
//!             .declare_field("subscribe", FieldType::of::<CheckboxField>(), FieldOptions::new());
//!     }
//! }
//!
//! let mut registry = FormRegistry::new();
//! registry.register::<ContactForm>().unwrap();
//!
//! let form = registry
//!     .construct(
//!         ContactForm::NAME,
//!         FormOptions::new().with_action("/submit").with_value("email", "a@b.com"),
//!     )
//!     .unwrap();
//! assert!(form.is_valid());
//! assert!(form.render().ends_with("</ol></form>"));
//! ```

#[cfg(feature = "forms")]
pub mod forms;

// Re-export forms
#[cfg(feature = "forms")]
pub use reform_forms::{
	FieldError, FieldOptions, FieldType, FormError, FormField, FormInstance, FormOptions,
	FormRegistry, FormResult, FormSettings, FormType, Renderer, RendererType,
};

/// Commonly used types
#[cfg(feature = "forms")]
pub mod prelude {
	pub use reform_forms::{
		CheckboxField, FieldConstructor, FieldOptions, FieldType, FormDefinition, FormField,
		FormInstance, FormOptions, FormRegistry, FormTypeDef, HiddenField, OlRenderer,
		ParagraphRenderer, PasswordField, Renderer, RendererType, SelectField, TableRenderer,
		TextAreaField, TextField, UlRenderer,
	};
}
