//! Single choice `<select>` field

use crate::field::{
	FieldConstructor, FieldError, FieldOptions, FieldResult, FormField, escape_attribute,
	escape_html, render_label, value_to_text,
};

/// `<select>` built from the `choices` option.
///
/// `choices` is a JSON array whose entries are either plain strings (used as
/// both value and text) or `[value, text]` pairs.
///
/// # Examples
///
/// ```
/// use reform_forms::{FieldConstructor, FieldOptions, FormField, SelectField};
/// use serde_json::json;
///
/// let field = SelectField::from_options(
///     FieldOptions::new()
///         .with_name("color")
///         .with_option("choices", json!([["r", "Red"], "blue"]))
///         .with_value("blue"),
/// ).unwrap();
/// assert_eq!(
///     field.render(),
///     r#"<select name="color" id="color"><option value="r">Red</option><option value="blue" selected>blue</option></select>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SelectField {
	options: FieldOptions,
	pub choices: Vec<(String, String)>,
}

fn parse_choices(raw: Option<&serde_json::Value>) -> FieldResult<Vec<(String, String)>> {
	let invalid = |reason: &str| FieldError::InvalidOption {
		option: "choices".to_string(),
		reason: reason.to_string(),
	};
	let entries = match raw {
		None | Some(serde_json::Value::Null) => return Ok(vec![]),
		Some(serde_json::Value::Array(entries)) => entries,
		Some(_) => return Err(invalid("expected an array")),
	};

	entries
		.iter()
		.map(|entry| match entry {
			serde_json::Value::String(s) => Ok((s.clone(), s.clone())),
			serde_json::Value::Array(pair) if pair.len() == 2 => {
				Ok((value_to_text(&pair[0]), value_to_text(&pair[1])))
			}
			_ => Err(invalid("entries must be strings or [value, text] pairs")),
		})
		.collect()
}

impl SelectField {
	fn selected(&self) -> Option<String> {
		self.value()
			.filter(|v| !v.is_null())
			.map(value_to_text)
	}
}

impl FieldConstructor for SelectField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		options.require_name()?;
		let choices = parse_choices(options.option("choices"))?;
		Ok(Self { options, choices })
	}
}

impl FormField for SelectField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}

	fn label(&self) -> String {
		render_label(&self.options, self.name(), self.id())
	}

	fn render(&self) -> String {
		let selected = self.selected();
		let mut html = format!(
			r#"<select name="{}" id="{}">"#,
			escape_attribute(self.name()),
			escape_attribute(self.id())
		);
		for (value, text) in &self.choices {
			let marker = if selected.as_deref() == Some(value.as_str()) {
				" selected"
			} else {
				""
			};
			html.push_str(&format!(
				r#"<option value="{}"{}>{}</option>"#,
				escape_attribute(value),
				marker,
				escape_html(text)
			));
		}
		html.push_str("</select>");
		html
	}

	/// A bound value must name one of the choices
	fn validate(&self) -> FieldResult<()> {
		match self.selected() {
			Some(selected) if !self.choices.iter().any(|(value, _)| *value == selected) => Err(
				FieldError::Validation(format!("'{}' is not one of the available choices", selected)),
			),
			_ => Ok(()),
		}
	}
}
