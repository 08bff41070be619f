//! Multi-line text field

use crate::field::{
	FieldConstructor, FieldOptions, FieldResult, FormField, escape_attribute, escape_html,
	render_label, value_to_text,
};

/// `<textarea>` with optional `rows` and `cols` options
#[derive(Debug, Clone)]
pub struct TextAreaField {
	options: FieldOptions,
	pub rows: Option<u64>,
	pub cols: Option<u64>,
}

impl FieldConstructor for TextAreaField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		options.require_name()?;
		let rows = options.option_u64("rows")?;
		let cols = options.option_u64("cols")?;
		Ok(Self {
			options,
			rows,
			cols,
		})
	}
}

impl FormField for TextAreaField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}

	fn label(&self) -> String {
		render_label(&self.options, self.name(), self.id())
	}

	fn render(&self) -> String {
		let mut html = format!(
			r#"<textarea name="{}" id="{}""#,
			escape_attribute(self.name()),
			escape_attribute(self.id())
		);
		if let Some(rows) = self.rows {
			html.push_str(&format!(r#" rows="{}""#, rows));
		}
		if let Some(cols) = self.cols {
			html.push_str(&format!(r#" cols="{}""#, cols));
		}
		html.push('>');
		if let Some(value) = self.value() {
			html.push_str(&escape_html(&value_to_text(value)));
		}
		html.push_str("</textarea>");
		html
	}
}
