//! Renderer strategies
//!
//! A renderer supplies the markup fragments that wrap the form body and each
//! field block. Form types select one through a [`RendererType`]; every form
//! instance builds its own renderer from it with no arguments.

use crate::field::short_type_name;
use std::any::TypeId;
use std::fmt;

pub trait Renderer: Send + Sync {
	fn inner_form_open(&self) -> String;
	fn inner_form_close(&self) -> String;
	fn label_outer_open(&self) -> String;
	fn field_outer_close(&self) -> String;
}

type BuildRenderer = fn() -> Box<dyn Renderer>;

/// Identifier of a renderer implementation.
///
/// Equality follows the renderer's Rust type for [`RendererType::of`]
/// handles, and the name plus constructor for [`RendererType::new`] handles.
#[derive(Clone, Copy)]
pub struct RendererType {
	name: &'static str,
	type_id: Option<TypeId>,
	build: BuildRenderer,
}

impl RendererType {
	/// Handle for any renderer with a `Default` constructor
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::{RendererType, UlRenderer};
	///
	/// let renderer_type = RendererType::of::<UlRenderer>();
	/// assert_eq!(renderer_type.name(), "UlRenderer");
	/// assert_eq!(renderer_type.build().inner_form_open(), "<ul>");
	/// ```
	pub fn of<R: Renderer + Default + 'static>() -> Self {
		Self {
			name: short_type_name::<R>(),
			type_id: Some(TypeId::of::<R>()),
			build: build_boxed::<R>,
		}
	}
	pub fn new(name: &'static str, build: BuildRenderer) -> Self {
		Self {
			name,
			type_id: None,
			build,
		}
	}
	/// Resolve one of the bundled renderers by its short name
	///
	/// Recognised names are `ol`, `ul`, `p` and `table`.
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::RendererType;
	///
	/// assert_eq!(RendererType::builtin("table").unwrap().name(), "TableRenderer");
	/// assert!(RendererType::builtin("grid").is_none());
	/// ```
	pub fn builtin(name: &str) -> Option<Self> {
		match name {
			"ol" => Some(Self::of::<OlRenderer>()),
			"ul" => Some(Self::of::<UlRenderer>()),
			"p" => Some(Self::of::<ParagraphRenderer>()),
			"table" => Some(Self::of::<TableRenderer>()),
			_ => None,
		}
	}
	pub fn name(&self) -> &'static str {
		self.name
	}
	pub fn build(&self) -> Box<dyn Renderer> {
		(self.build)()
	}
}

impl Default for RendererType {
	fn default() -> Self {
		Self::of::<OlRenderer>()
	}
}

impl fmt::Debug for RendererType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("RendererType").field(&self.name).finish()
	}
}

impl PartialEq for RendererType {
	fn eq(&self, other: &Self) -> bool {
		match (self.type_id, other.type_id) {
			(Some(a), Some(b)) => a == b,
			(None, None) => self.name == other.name && std::ptr::fn_addr_eq(self.build, other.build),
			_ => false,
		}
	}
}

impl Eq for RendererType {}

fn build_boxed<R: Renderer + Default + 'static>() -> Box<dyn Renderer> {
	Box::new(R::default())
}

/// Ordered list layout, one `<li>` per field. Default for new form types.
#[derive(Debug, Clone, Copy, Default)]
pub struct OlRenderer;

impl Renderer for OlRenderer {
	fn inner_form_open(&self) -> String {
		"<ol>".to_string()
	}
	fn inner_form_close(&self) -> String {
		"</ol>".to_string()
	}
	fn label_outer_open(&self) -> String {
		"<li>".to_string()
	}
	fn field_outer_close(&self) -> String {
		"</li>".to_string()
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UlRenderer;

impl Renderer for UlRenderer {
	fn inner_form_open(&self) -> String {
		"<ul>".to_string()
	}
	fn inner_form_close(&self) -> String {
		"</ul>".to_string()
	}
	fn label_outer_open(&self) -> String {
		"<li>".to_string()
	}
	fn field_outer_close(&self) -> String {
		"</li>".to_string()
	}
}

/// One `<p>` per field with no wrapper around the form body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphRenderer;

impl Renderer for ParagraphRenderer {
	fn inner_form_open(&self) -> String {
		String::new()
	}
	fn inner_form_close(&self) -> String {
		String::new()
	}
	fn label_outer_open(&self) -> String {
		"<p>".to_string()
	}
	fn field_outer_close(&self) -> String {
		"</p>".to_string()
	}
}

/// One table row per field
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl Renderer for TableRenderer {
	fn inner_form_open(&self) -> String {
		"<table>".to_string()
	}
	fn inner_form_close(&self) -> String {
		"</table>".to_string()
	}
	fn label_outer_open(&self) -> String {
		"<tr><td>".to_string()
	}
	fn field_outer_close(&self) -> String {
		"</td></tr>".to_string()
	}
}
