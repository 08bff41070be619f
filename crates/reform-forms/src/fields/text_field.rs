//! Single-line `<input>` fields

use crate::field::{
	FieldConstructor, FieldOptions, FieldResult, FormField, escape_attribute, render_label,
	value_to_text,
};

/// Redacted text used in place of password values in debug output
pub const PASSWORD_REDACTED: &str = "[REDACTED]";

// Renders `<input type=.. name=.. id=..>` with the optional `value`,
// `placeholder`, `maxlength` and `required` attributes.
fn render_input(input_type: &str, options: &FieldOptions, include_value: bool) -> FieldResult<String> {
	let name = options.require_name()?;
	let id = options.id.as_deref().unwrap_or(name);
	let mut html = format!(
		r#"<input type="{}" name="{}" id="{}""#,
		input_type,
		escape_attribute(name),
		escape_attribute(id)
	);
	if include_value
		&& let Some(value) = options.value.as_ref().filter(|v| !v.is_null())
	{
		html.push_str(&format!(r#" value="{}""#, escape_attribute(&value_to_text(value))));
	}
	if let Some(placeholder) = options.option_str("placeholder")? {
		html.push_str(&format!(r#" placeholder="{}""#, escape_attribute(placeholder)));
	}
	if let Some(max_length) = options.option_u64("maxlength")? {
		html.push_str(&format!(r#" maxlength="{}""#, max_length));
	}
	if options.flag("required") {
		html.push_str(" required");
	}
	html.push_str(" />");
	Ok(html)
}

/// `<input type="text">`
///
/// # Examples
///
/// ```
/// use reform_forms::{FieldConstructor, FieldOptions, FormField, TextField};
///
/// let field = TextField::from_options(
///     FieldOptions::new().with_name("email").with_id("Contact_email").with_value("a@b.com"),
/// ).unwrap();
/// assert_eq!(
///     field.render(),
///     r#"<input type="text" name="email" id="Contact_email" value="a@b.com" />"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextField {
	options: FieldOptions,
	markup: String,
}

impl FieldConstructor for TextField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		let markup = render_input("text", &options, true)?;
		Ok(Self { options, markup })
	}
}

impl FormField for TextField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}
	fn label(&self) -> String {
		render_label(&self.options, self.name(), self.id())
	}
	fn render(&self) -> String {
		self.markup.clone()
	}
}

/// `<input type="password">`. The bound value is never written to markup.
#[derive(Clone)]
pub struct PasswordField {
	options: FieldOptions,
	markup: String,
}

impl std::fmt::Debug for PasswordField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PasswordField")
			.field("name", &self.options.name)
			.field("id", &self.options.id)
			.field("value", &self.options.value.as_ref().map(|_| PASSWORD_REDACTED))
			.finish()
	}
}

impl FieldConstructor for PasswordField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		let markup = render_input("password", &options, false)?;
		Ok(Self { options, markup })
	}
}

impl FormField for PasswordField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}
	fn label(&self) -> String {
		render_label(&self.options, self.name(), self.id())
	}
	fn render(&self) -> String {
		self.markup.clone()
	}
}

/// `<input type="hidden">` with an empty label
#[derive(Debug, Clone)]
pub struct HiddenField {
	options: FieldOptions,
	markup: String,
}

impl FieldConstructor for HiddenField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		let markup = render_input("hidden", &options, true)?;
		Ok(Self { options, markup })
	}
}

impl FormField for HiddenField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}
	fn label(&self) -> String {
		String::new()
	}
	fn render(&self) -> String {
		self.markup.clone()
	}
}
