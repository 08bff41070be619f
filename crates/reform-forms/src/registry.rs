//! Form type registry
//!
//! Every form type owns a [`FormTypeMetadata`] record. The record is
//! allocated when the type is registered, filled in by the declarations made
//! inside that type's definition, and never mutated afterwards. Types never
//! share metadata: a derived type starts from a deep copy of its parent, so
//! declarations on either side stay invisible to the other.
//!
//! ```
//! use reform_forms::{CheckboxField, FieldOptions, FieldType, FormOptions, FormRegistry, TextField};
//!
//! let mut registry = FormRegistry::new();
//! registry
//!     .define("ContactForm", |form| {
//!         form.declare_field("email", FieldType::of::<TextField>(), FieldOptions::new());
//!         form.declare_field("subscribe", FieldType::of::<CheckboxField>(), FieldOptions::new());
//!     })
//!     .unwrap();
//!
//! let form = registry
//!     .construct("ContactForm", FormOptions::new().with_action("/submit"))
//!     .unwrap();
//! assert!(form.render().starts_with(r#"<form method="post" action="/submit"><ol>"#));
//! ```

use crate::field::{FieldOptions, FieldType};
use crate::form::{FormError, FormInstance, FormOptions, FormResult, ValidityCheck};
use crate::renderer::RendererType;
use crate::settings::FormSettings;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Declaration-time record of one field.
///
/// `options.name` and `options.id` are always set; the name cannot change
/// once the spec exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
	field_type: FieldType,
	options: FieldOptions,
}

impl FieldSpec {
	pub fn field_type(&self) -> FieldType {
		self.field_type
	}
	pub fn options(&self) -> &FieldOptions {
		&self.options
	}
	pub fn name(&self) -> &str {
		self.options.name.as_deref().unwrap_or_default()
	}
	pub fn id(&self) -> &str {
		self.options.id.as_deref().unwrap_or_default()
	}
	/// Per-instance copy of the options carrying the resolved value
	pub(crate) fn bind(&self, value: Option<serde_json::Value>) -> FieldOptions {
		let mut options = self.options.clone();
		options.value = value;
		options
	}
}

/// Named grouping of declared fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fieldset {
	pub legend: String,
	pub fields: Vec<String>,
}

#[derive(Clone)]
pub struct FormTypeMetadata {
	action: String,
	method: String,
	renderer: RendererType,
	values: HashMap<String, serde_json::Value>,
	fields: Vec<FieldSpec>,
	field_names: Vec<String>,
	field_lookup: HashMap<String, Vec<usize>>,
	fieldsets: Vec<Fieldset>,
	validity_check: Option<ValidityCheck>,
}

impl FormTypeMetadata {
	/// Fresh metadata seeded from registry settings
	pub fn from_settings(settings: &FormSettings) -> FormResult<Self> {
		Ok(Self {
			action: settings.default_action.clone(),
			method: settings.default_method.clone(),
			renderer: settings.renderer_type()?,
			..Self::default()
		})
	}
	pub fn action(&self) -> &str {
		&self.action
	}
	pub fn method(&self) -> &str {
		&self.method
	}
	pub fn renderer(&self) -> RendererType {
		self.renderer
	}
	pub fn values(&self) -> &HashMap<String, serde_json::Value> {
		&self.values
	}
	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}
	pub fn field_names(&self) -> &[String] {
		&self.field_names
	}
	pub fn fieldsets(&self) -> &[Fieldset] {
		&self.fieldsets
	}
	pub fn validity_check(&self) -> Option<ValidityCheck> {
		self.validity_check
	}
	/// All specs bound to `name`, in declaration order
	pub fn field_specs(&self, name: &str) -> Vec<&FieldSpec> {
		self.field_lookup
			.get(name)
			.map(|indices| indices.iter().map(|&i| &self.fields[i]).collect())
			.unwrap_or_default()
	}
}

impl Default for FormTypeMetadata {
	fn default() -> Self {
		Self {
			action: String::new(),
			method: "post".to_string(),
			renderer: RendererType::default(),
			values: HashMap::new(),
			fields: vec![],
			field_names: vec![],
			field_lookup: HashMap::new(),
			fieldsets: vec![],
			validity_check: None,
		}
	}
}

impl fmt::Debug for FormTypeMetadata {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormTypeMetadata")
			.field("action", &self.action)
			.field("method", &self.method)
			.field("renderer", &self.renderer)
			.field("values", &self.values)
			.field("fields", &self.fields)
			.field("fieldsets", &self.fieldsets)
			.field("has_validity_check", &self.validity_check.is_some())
			.finish()
	}
}

/// Handle used while a form type is being defined.
///
/// This is the only way to mutate a type's metadata; it is dropped once the
/// definition closure returns.
pub struct FormTypeDef {
	name: String,
	meta: FormTypeMetadata,
}

impl FormTypeDef {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Append a field spec.
	///
	/// `options.name` defaults to `name` and `options.id` to
	/// `"<TypeName>_<name>"`. Repeating a name is allowed and yields a second
	/// spec that renders as its own field.
	pub fn declare_field(
		&mut self,
		name: impl Into<String>,
		field_type: FieldType,
		mut options: FieldOptions,
	) -> &mut Self {
		let name = name.into();
		let field_name = options.name.get_or_insert_with(|| name.clone()).clone();
		options
			.id
			.get_or_insert_with(|| format!("{}_{}", self.name, name));

		if self.meta.field_lookup.contains_key(&field_name) {
			tracing::warn!(
				form_type = %self.name,
				field = %field_name,
				"Field declared more than once; it will render once per declaration"
			);
		}

		let index = self.meta.fields.len();
		self.meta
			.field_lookup
			.entry(field_name.clone())
			.or_default()
			.push(index);
		self.meta.field_names.push(field_name);
		tracing::trace!(
			form_type = %self.name,
			field = %name,
			field_type = field_type.name(),
			"Declared field"
		);
		self.meta.fields.push(FieldSpec {
			field_type,
			options,
		});
		self
	}

	pub fn renderer(&self) -> RendererType {
		self.meta.renderer
	}
	pub fn set_renderer(&mut self, renderer: RendererType) -> &mut Self {
		self.meta.renderer = renderer;
		self
	}
	pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
		self.meta.action = action.into();
		self
	}
	pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
		self.meta.method = method.into();
		self
	}
	/// Set a default value used when an instance is built without `values`
	pub fn set_value(
		&mut self,
		name: impl Into<String>,
		value: impl Into<serde_json::Value>,
	) -> &mut Self {
		self.meta.values.insert(name.into(), value.into());
		self
	}
	pub fn declare_fieldset<I, S>(&mut self, legend: impl Into<String>, fields: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.meta.fieldsets.push(Fieldset {
			legend: legend.into(),
			fields: fields.into_iter().map(Into::into).collect(),
		});
		self
	}
	pub fn set_validity_check(&mut self, check: ValidityCheck) -> &mut Self {
		self.meta.validity_check = Some(check);
		self
	}
	pub fn list_fields(&self) -> &[FieldSpec] {
		&self.meta.fields
	}
}

/// Statically typed form definition.
///
/// ```
/// use reform_forms::{FieldOptions, FieldType, FormDefinition, FormRegistry, FormTypeDef, TextField};
///
/// struct LoginForm;
///
/// impl FormDefinition for LoginForm {
///     const NAME: &'static str = "LoginForm";
///
///     fn define(form: &mut FormTypeDef) {
///         form.declare_field("username", FieldType::of::<TextField>(), FieldOptions::new());
///     }
/// }
///
/// let mut registry = FormRegistry::new();
/// registry.register::<LoginForm>().unwrap();
/// assert_eq!(registry.form_type("LoginForm").unwrap().list_fields()[0].id(), "LoginForm_username");
/// ```
pub trait FormDefinition {
	const NAME: &'static str;

	fn define(form: &mut FormTypeDef);
}

/// A registered form type. Read-only.
#[derive(Debug, Clone)]
pub struct FormType {
	name: String,
	meta: FormTypeMetadata,
}

impl FormType {
	pub fn name(&self) -> &str {
		&self.name
	}
	pub fn metadata(&self) -> &FormTypeMetadata {
		&self.meta
	}
	pub fn list_fields(&self) -> &[FieldSpec] {
		self.meta.fields()
	}
	pub fn field_names(&self) -> &[String] {
		self.meta.field_names()
	}
	pub fn renderer(&self) -> RendererType {
		self.meta.renderer()
	}
	pub fn fieldsets(&self) -> &[Fieldset] {
		self.meta.fieldsets()
	}
	/// First spec bound to `name`
	pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
		self.meta.field_specs(name).into_iter().next()
	}
	pub fn construct(&self, options: FormOptions) -> FormResult<FormInstance> {
		FormInstance::new(self, options)
	}
}

/// Registry of form types keyed by type name.
///
/// Build it once during start-up and pass it by reference to the code that
/// constructs form instances.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
	defaults: FormTypeMetadata,
	types: HashMap<String, FormType>,
}

impl FormRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry whose new types start from `settings` instead of the
	/// built-in defaults
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::{FormRegistry, FormSettings};
	///
	/// let settings = FormSettings::from_toml_str(r#"default_renderer = "ul""#).unwrap();
	/// let mut registry = FormRegistry::with_settings(&settings).unwrap();
	/// let form_type = registry.define("Search", |_| {}).unwrap();
	/// assert_eq!(form_type.renderer().name(), "UlRenderer");
	/// ```
	pub fn with_settings(settings: &FormSettings) -> FormResult<Self> {
		Ok(Self {
			defaults: FormTypeMetadata::from_settings(settings)?,
			types: HashMap::new(),
		})
	}

	/// Register a type with fresh default metadata and run its definition
	pub fn define<F>(&mut self, name: impl Into<String>, define: F) -> FormResult<&FormType>
	where
		F: FnOnce(&mut FormTypeDef),
	{
		let meta = self.defaults.clone();
		self.insert(name.into(), meta, define)
	}

	/// Register a type seeded with an independent copy of `parent`'s metadata
	pub fn derive<F>(
		&mut self,
		name: impl Into<String>,
		parent: &str,
		define: F,
	) -> FormResult<&FormType>
	where
		F: FnOnce(&mut FormTypeDef),
	{
		let meta = self.form_type(parent)?.meta.clone();
		self.insert(name.into(), meta, define)
	}

	pub fn register<D: FormDefinition>(&mut self) -> FormResult<&FormType> {
		self.define(D::NAME, D::define)
	}

	fn insert<F>(&mut self, name: String, meta: FormTypeMetadata, define: F) -> FormResult<&FormType>
	where
		F: FnOnce(&mut FormTypeDef),
	{
		match self.types.entry(name) {
			Entry::Occupied(entry) => Err(FormError::DuplicateFormType(entry.key().clone())),
			Entry::Vacant(entry) => {
				let mut def = FormTypeDef {
					name: entry.key().clone(),
					meta,
				};
				define(&mut def);
				tracing::debug!(
					form_type = %def.name,
					fields = def.meta.fields.len(),
					renderer = def.meta.renderer.name(),
					"Registered form type"
				);
				Ok(&*entry.insert(FormType {
					name: def.name,
					meta: def.meta,
				}))
			}
		}
	}

	pub fn get(&self, name: &str) -> Option<&FormType> {
		self.types.get(name)
	}

	pub fn form_type(&self, name: &str) -> FormResult<&FormType> {
		self.get(name)
			.ok_or_else(|| FormError::UnknownFormType(name.to_string()))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Registered type names, sorted
	pub fn type_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn construct(&self, name: &str, options: FormOptions) -> FormResult<FormInstance> {
		self.form_type(name)?.construct(options)
	}
}
