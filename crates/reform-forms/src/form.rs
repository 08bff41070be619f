use crate::field::{FieldError, FormField};
use crate::registry::FormType;
use crate::renderer::{Renderer, RendererType};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form type: {0}")]
	UnknownFormType(String),
	#[error("Form type already registered: {0}")]
	DuplicateFormType(String),
	#[error("Unknown renderer: {0}")]
	UnknownRenderer(String),
	#[error("Field error in {field}: {source}")]
	Field { field: String, source: FieldError },
	#[error("Settings error: {0}")]
	Settings(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Form-level validity hook installed by a form type
pub type ValidityCheck = fn(&FormInstance) -> bool;

/// Runtime overrides for [`FormInstance::new`]. Unset entries fall back to the
/// form type's defaults.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
	pub action: Option<String>,
	pub method: Option<String>,
	pub values: Option<HashMap<String, serde_json::Value>>,
	pub renderer: Option<RendererType>,
}

impl FormOptions {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}
	pub fn with_method(mut self, method: impl Into<String>) -> Self {
		self.method = Some(method.into());
		self
	}
	/// Replace the whole value map. The type's default values are not merged.
	pub fn with_values(mut self, values: HashMap<String, serde_json::Value>) -> Self {
		self.values = Some(values);
		self
	}
	/// Add a single value to the override map
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::FormOptions;
	/// use serde_json::json;
	///
	/// let options = FormOptions::new().with_value("email", "a@b.com");
	/// assert_eq!(options.values.unwrap().get("email"), Some(&json!("a@b.com")));
	/// ```
	pub fn with_value(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.values
			.get_or_insert_with(HashMap::new)
			.insert(name.into(), value.into());
		self
	}
	pub fn with_renderer(mut self, renderer: RendererType) -> Self {
		self.renderer = Some(renderer);
		self
	}
}

/// A form type bound to runtime values, ready to render
pub struct FormInstance {
	form_type: String,
	action: String,
	method: String,
	values: HashMap<String, serde_json::Value>,
	renderer: Box<dyn Renderer>,
	renderer_type: RendererType,
	fields: Vec<Box<dyn FormField>>,
	validity_check: Option<ValidityCheck>,
}

impl FormInstance {
	/// Build an instance of `form_type`.
	///
	/// Fields are instantiated in declaration order, each with its spec's
	/// options plus the value found under its name (or `None`). The type's
	/// metadata is only read.
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::{FieldOptions, FieldType, FormInstance, FormOptions, FormRegistry, TextField};
	/// use serde_json::json;
	///
	/// let mut registry = FormRegistry::new();
	/// registry
	///     .define("Search", |form| {
	///         form.declare_field("q", FieldType::of::<TextField>(), FieldOptions::new());
	///     })
	///     .unwrap();
	///
	/// let form_type = registry.form_type("Search").unwrap();
	/// let form = FormInstance::new(form_type, FormOptions::new().with_value("q", "rust")).unwrap();
	/// assert_eq!(form.fields()[0].value(), Some(&json!("rust")));
	/// assert!(form.is_valid());
	/// ```
	pub fn new(form_type: &FormType, options: FormOptions) -> FormResult<Self> {
		let meta = form_type.metadata();

		let action = options.action.unwrap_or_else(|| meta.action().to_string());
		let method = options.method.unwrap_or_else(|| meta.method().to_string());
		let values = options.values.unwrap_or_else(|| meta.values().clone());
		let renderer_type = options.renderer.unwrap_or_else(|| meta.renderer());
		let renderer = renderer_type.build();

		let fields = meta
			.fields()
			.iter()
			.map(|spec| {
				let value = values.get(spec.name()).cloned();
				spec.field_type()
					.build(spec.bind(value))
					.map_err(|source| FormError::Field {
						field: spec.name().to_string(),
						source,
					})
			})
			.collect::<FormResult<Vec<_>>>()?;

		tracing::debug!(
			form_type = form_type.name(),
			fields = fields.len(),
			renderer = renderer_type.name(),
			"Constructed form instance"
		);

		Ok(Self {
			form_type: form_type.name().to_string(),
			action,
			method,
			values,
			renderer,
			renderer_type,
			fields,
			validity_check: meta.validity_check(),
		})
	}
	pub fn form_type(&self) -> &str {
		&self.form_type
	}
	pub fn action(&self) -> &str {
		&self.action
	}
	pub fn method(&self) -> &str {
		&self.method
	}
	pub fn values(&self) -> &HashMap<String, serde_json::Value> {
		&self.values
	}
	pub fn renderer(&self) -> &dyn Renderer {
		self.renderer.as_ref()
	}
	pub fn renderer_type(&self) -> RendererType {
		self.renderer_type
	}
	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}
	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}
	pub fn field_count(&self) -> usize {
		self.fields.len()
	}
	/// Whether the form is valid.
	///
	/// With no validity hook on the form type and no field overriding
	/// [`FormField::is_valid`], this is always `true`.
	pub fn is_valid(&self) -> bool {
		self.fields.iter().all(|field| field.is_valid())
			&& self.validity_check.is_none_or(|check| check(self))
	}
	pub fn render(&self) -> String {
		crate::render::render_form(self)
	}
}

impl fmt::Display for FormInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl fmt::Debug for FormInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormInstance")
			.field("form_type", &self.form_type)
			.field("action", &self.action)
			.field("method", &self.method)
			.field("renderer", &self.renderer_type)
			.field(
				"fields",
				&self.fields.iter().map(|f| f.name()).collect::<Vec<_>>(),
			)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::{FieldConstructor, FieldOptions, FieldResult, FieldType};
	use crate::fields::{SelectField, TextField};
	use crate::registry::FormRegistry;
	use crate::renderer::UlRenderer;
	use rstest::{fixture, rstest};
	use serde_json::json;

	/// Records the options it was built with
	struct ProbeField {
		options: FieldOptions,
	}

	impl FieldConstructor for ProbeField {
		fn from_options(options: FieldOptions) -> FieldResult<Self> {
			Ok(Self { options })
		}
	}

	impl FormField for ProbeField {
		fn options(&self) -> &FieldOptions {
			&self.options
		}
		fn label(&self) -> String {
			format!("[{}]", self.name())
		}
		fn render(&self) -> String {
			format!("({})", self.id())
		}
	}

	fn probe() -> FieldType {
		FieldType::of::<ProbeField>()
	}

	#[fixture]
	fn registry() -> FormRegistry {
		let mut registry = FormRegistry::new();
		registry
			.define("Probe", |form| {
				form.declare_field("a", probe(), FieldOptions::new().with_option("extra", 1))
					.declare_field("b", probe(), FieldOptions::new())
					.declare_field("c", probe(), FieldOptions::new())
					.set_value("a", "default-a");
			})
			.unwrap();
		registry
	}

	#[rstest]
	fn test_fields_follow_declaration_order(registry: FormRegistry) {
		// Act
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		// Assert
		let names: Vec<&str> = form.fields().iter().map(|f| f.name()).collect();
		assert_eq!(names, ["a", "b", "c"]);
		assert_eq!(form.field_count(), 3);
	}

	#[rstest]
	fn test_default_values_bind_when_no_override(registry: FormRegistry) {
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		assert_eq!(form.fields()[0].value(), Some(&json!("default-a")));
		assert_eq!(form.fields()[1].value(), None);
		assert_eq!(form.fields()[2].value(), None);
	}

	#[rstest]
	fn test_values_override_replaces_defaults(registry: FormRegistry) {
		// Arrange
		let options = FormOptions::new().with_value("b", "x");

		// Act
		let form = registry.construct("Probe", options).unwrap();

		// Assert
		assert_eq!(form.get_field("a").unwrap().value(), None);
		assert_eq!(form.get_field("b").unwrap().value(), Some(&json!("x")));
		assert_eq!(form.values().len(), 1);
	}

	#[rstest]
	fn test_field_receives_declared_options(registry: FormRegistry) {
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		let options = form.fields()[0].options();
		assert_eq!(options.name.as_deref(), Some("a"));
		assert_eq!(options.id.as_deref(), Some("Probe_a"));
		assert_eq!(options.option("extra"), Some(&json!(1)));
	}

	#[rstest]
	fn test_construct_does_not_mutate_type(registry: FormRegistry) {
		// Act
		registry
			.construct("Probe", FormOptions::new().with_value("a", "bound"))
			.unwrap();

		// Assert
		let spec = &registry.form_type("Probe").unwrap().list_fields()[0];
		assert!(spec.options().value.is_none());
	}

	#[rstest]
	fn test_defaults_and_overrides(registry: FormRegistry) {
		let default = registry.construct("Probe", FormOptions::new()).unwrap();
		assert_eq!(default.action(), "");
		assert_eq!(default.method(), "post");
		assert_eq!(default.renderer_type().name(), "OlRenderer");

		let overridden = registry
			.construct(
				"Probe",
				FormOptions::new()
					.with_action("/go")
					.with_method("get")
					.with_renderer(RendererType::of::<UlRenderer>()),
			)
			.unwrap();
		assert_eq!(overridden.action(), "/go");
		assert_eq!(overridden.method(), "get");
		assert_eq!(overridden.renderer().inner_form_open(), "<ul>");
	}

	#[rstest]
	fn test_empty_string_override_wins(registry: FormRegistry) {
		let form = registry
			.construct("Probe", FormOptions::new().with_method(""))
			.unwrap();

		assert_eq!(form.method(), "");
	}

	#[rstest]
	fn test_unmodified_instance_is_valid(registry: FormRegistry) {
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		assert!(form.is_valid());
	}

	#[rstest]
	fn test_validity_check_hook() {
		// Arrange
		fn requires_b(form: &FormInstance) -> bool {
			form.get_field("b").and_then(|f| f.value()).is_some()
		}
		let mut registry = FormRegistry::new();
		registry
			.define("Strict", |form| {
				form.declare_field("b", probe(), FieldOptions::new())
					.set_validity_check(requires_b);
			})
			.unwrap();

		// Act
		let empty = registry.construct("Strict", FormOptions::new()).unwrap();
		let filled = registry
			.construct("Strict", FormOptions::new().with_value("b", 1))
			.unwrap();

		// Assert
		assert!(!empty.is_valid());
		assert!(filled.is_valid());
	}

	#[rstest]
	fn test_field_validity_composes() {
		let mut registry = FormRegistry::new();
		registry
			.define("Order", |form| {
				form.declare_field(
					"size",
					FieldType::of::<SelectField>(),
					FieldOptions::new().with_option("choices", json!(["s", "m"])),
				);
			})
			.unwrap();

		let valid = registry
			.construct("Order", FormOptions::new().with_value("size", "m"))
			.unwrap();
		let invalid = registry
			.construct("Order", FormOptions::new().with_value("size", "xxl"))
			.unwrap();

		assert!(valid.is_valid());
		assert!(!invalid.is_valid());
	}

	#[rstest]
	fn test_field_construction_error_is_propagated() {
		// Arrange
		let mut registry = FormRegistry::new();
		registry
			.define("Broken", |form| {
				form.declare_field(
					"nick",
					FieldType::of::<TextField>(),
					FieldOptions::new().with_option("maxlength", "long"),
				);
			})
			.unwrap();

		// Act
		let result = registry.construct("Broken", FormOptions::new());

		// Assert
		match result {
			Err(FormError::Field { field, source }) => {
				assert_eq!(field, "nick");
				assert!(matches!(source, FieldError::InvalidOption { .. }));
			}
			other => panic!("expected field error, got {:?}", other),
		}
	}

	#[rstest]
	fn test_display_matches_render(registry: FormRegistry) {
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		assert_eq!(form.to_string(), form.render());
	}

	#[rstest]
	fn test_debug_lists_field_names(registry: FormRegistry) {
		let form = registry.construct("Probe", FormOptions::new()).unwrap();

		let debug = format!("{:?}", form);
		assert!(debug.contains("form_type: \"Probe\""));
		assert!(debug.contains("[\"a\", \"b\", \"c\"]"));
	}
}
