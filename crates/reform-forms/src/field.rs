//! Field contract consumed by form types and form instances.
//!
//! A field implementation is any type that can be built from a
//! [`FieldOptions`] record and that knows how to render its label and its
//! own markup. Form types refer to implementations through [`FieldType`]
//! handles so that field specs stay plain data.

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
	#[error("Missing required option: {0}")]
	MissingOption(String),
	#[error("Invalid option '{option}': {reason}")]
	InvalidOption { option: String, reason: String },
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Options record a field is constructed from.
///
/// `name`, `id` and `value` are the options every field receives from a form
/// instance. Anything else a field implementation understands goes into
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
	pub name: Option<String>,
	pub id: Option<String>,
	pub value: Option<serde_json::Value>,
	pub label: Option<String>,
	#[serde(default, flatten)]
	pub extra: HashMap<String, serde_json::Value>,
}

impl FieldOptions {
	/// Create an empty options record
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::FieldOptions;
	///
	/// let options = FieldOptions::new();
	/// assert!(options.name.is_none());
	/// assert!(options.extra.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
		self.value = Some(value.into());
		self
	}
	/// Set an implementation-specific option
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::FieldOptions;
	/// use serde_json::json;
	///
	/// let options = FieldOptions::new().with_option("rows", 4);
	/// assert_eq!(options.option("rows"), Some(&json!(4)));
	/// ```
	pub fn with_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
	pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
		self.extra.get(key)
	}
	/// Read a string option, rejecting values of any other JSON type
	pub fn option_str(&self, key: &str) -> FieldResult<Option<&str>> {
		match self.extra.get(key) {
			None | Some(serde_json::Value::Null) => Ok(None),
			Some(serde_json::Value::String(s)) => Ok(Some(s)),
			Some(_) => Err(FieldError::InvalidOption {
				option: key.to_string(),
				reason: "expected a string".to_string(),
			}),
		}
	}
	/// Read a non-negative integer option
	pub fn option_u64(&self, key: &str) -> FieldResult<Option<u64>> {
		match self.extra.get(key) {
			None | Some(serde_json::Value::Null) => Ok(None),
			Some(v) => v.as_u64().map(Some).ok_or_else(|| FieldError::InvalidOption {
				option: key.to_string(),
				reason: "expected a non-negative integer".to_string(),
			}),
		}
	}
	/// Flag options count as set when they are `true`
	pub fn flag(&self, key: &str) -> bool {
		matches!(self.extra.get(key), Some(serde_json::Value::Bool(true)))
	}
	/// The `name` option, which every bundled field requires
	pub fn require_name(&self) -> FieldResult<&str> {
		self.name
			.as_deref()
			.ok_or_else(|| FieldError::MissingOption("name".to_string()))
	}
}

/// A field bound to a single value for the lifetime of a form instance.
pub trait FormField: Send + Sync {
	fn options(&self) -> &FieldOptions;

	fn name(&self) -> &str {
		self.options().name.as_deref().unwrap_or_default()
	}

	fn id(&self) -> &str {
		self.options()
			.id
			.as_deref()
			.unwrap_or_else(|| self.name())
	}

	fn value(&self) -> Option<&serde_json::Value> {
		self.options().value.as_ref()
	}

	/// Markup of the field's label
	fn label(&self) -> String;

	/// Markup of the field itself
	fn render(&self) -> String;

	/// Check the bound value. Fields with no constraints accept anything.
	fn validate(&self) -> FieldResult<()> {
		Ok(())
	}

	fn is_valid(&self) -> bool {
		self.validate().is_ok()
	}
}

/// Field implementations that can be named by a [`FieldType`].
pub trait FieldConstructor: FormField + Sized + 'static {
	fn from_options(options: FieldOptions) -> FieldResult<Self>;
}

type BuildField = fn(FieldOptions) -> FieldResult<Box<dyn FormField>>;

/// Identifier of a field implementation, used in field specs.
///
/// Handles from [`FieldType::of`] are equal when they name the same Rust
/// type. Handles from [`FieldType::new`] are equal when both the name and the
/// constructor function match.
#[derive(Clone, Copy)]
pub struct FieldType {
	name: &'static str,
	type_id: Option<TypeId>,
	build: BuildField,
}

impl FieldType {
	/// Handle for a [`FieldConstructor`] implementation
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::{FieldType, TextField};
	///
	/// let field_type = FieldType::of::<TextField>();
	/// assert_eq!(field_type.name(), "TextField");
	/// ```
	pub fn of<F: FieldConstructor>() -> Self {
		Self {
			name: short_type_name::<F>(),
			type_id: Some(TypeId::of::<F>()),
			build: build_boxed::<F>,
		}
	}
	/// Handle for a custom constructor function
	pub fn new(name: &'static str, build: BuildField) -> Self {
		Self {
			name,
			type_id: None,
			build,
		}
	}
	pub fn name(&self) -> &'static str {
		self.name
	}
	pub fn build(&self, options: FieldOptions) -> FieldResult<Box<dyn FormField>> {
		(self.build)(options)
	}
}

impl fmt::Debug for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FieldType").field(&self.name).finish()
	}
}

impl PartialEq for FieldType {
	fn eq(&self, other: &Self) -> bool {
		match (self.type_id, other.type_id) {
			(Some(a), Some(b)) => a == b,
			(None, None) => self.name == other.name && std::ptr::fn_addr_eq(self.build, other.build),
			_ => false,
		}
	}
}

impl Eq for FieldType {}

fn build_boxed<F: FieldConstructor>(options: FieldOptions) -> FieldResult<Box<dyn FormField>> {
	Ok(Box::new(F::from_options(options)?))
}

pub(crate) fn short_type_name<T>() -> &'static str {
	let full = std::any::type_name::<T>();
	full.rsplit("::").next().unwrap_or(full)
}

/// Escape text for use inside an element body
///
/// # Examples
///
/// ```
/// use reform_forms::field::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escape text for use inside a double-quoted attribute value
///
/// # Examples
///
/// ```
/// use reform_forms::field::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#x27;bye&#x27;");
/// ```
pub fn escape_attribute(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

/// Textual form of a bound value. `null` renders as an empty string.
pub fn value_to_text(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Null => String::new(),
		serde_json::Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Label markup shared by the bundled fields
pub(crate) fn render_label(options: &FieldOptions, name: &str, id: &str) -> String {
	let text = options.label.as_deref().unwrap_or(name);
	format!(
		r#"<label for="{}">{}</label>"#,
		escape_attribute(id),
		escape_html(text)
	)
}
