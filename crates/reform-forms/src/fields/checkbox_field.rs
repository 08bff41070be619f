//! Boolean checkbox field

use crate::field::{
	FieldConstructor, FieldOptions, FieldResult, FormField, escape_attribute, render_label,
};

/// `<input type="checkbox">`, checked when the bound value is truthy
#[derive(Debug, Clone)]
pub struct CheckboxField {
	options: FieldOptions,
	pub checked: bool,
}

impl CheckboxField {
	pub fn is_checked(value: Option<&serde_json::Value>) -> bool {
		match value {
			None | Some(serde_json::Value::Null) => false,
			Some(serde_json::Value::Bool(b)) => *b,
			Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
			Some(serde_json::Value::String(s)) => {
				!matches!(s.to_lowercase().as_str(), "" | "0" | "false" | "off" | "no")
			}
			Some(_) => true,
		}
	}
}

impl FieldConstructor for CheckboxField {
	fn from_options(options: FieldOptions) -> FieldResult<Self> {
		options.require_name()?;
		let checked = Self::is_checked(options.value.as_ref());
		Ok(Self { options, checked })
	}
}

impl FormField for CheckboxField {
	fn options(&self) -> &FieldOptions {
		&self.options
	}

	fn label(&self) -> String {
		render_label(&self.options, self.name(), self.id())
	}

	fn render(&self) -> String {
		format!(
			r#"<input type="checkbox" name="{}" id="{}" value="1"{} />"#,
			escape_attribute(self.name()),
			escape_attribute(self.id()),
			if self.checked { " checked" } else { "" }
		)
	}
}
