//! Render composer
//!
//! Joins the form tag, the renderer's fragments and each field's label and
//! markup. Nothing is escaped here; fields and renderers own their output.

use crate::form::FormInstance;

/// Render `form` to markup.
///
/// The output is `<form method=.. action=..>`, the renderer's inner-form
/// open fragment, one `label_outer_open + label + field + field_outer_close`
/// block per field in instance order, the inner-form close fragment and
/// `</form>`.
pub fn render_form(form: &FormInstance) -> String {
	let renderer = form.renderer();

	let mut html = format!(
		r#"<form method="{}" action="{}">"#,
		form.method(),
		form.action()
	);
	html.push_str(&renderer.inner_form_open());
	for field in form.fields() {
		html.push_str(&renderer.label_outer_open());
		html.push_str(&field.label());
		html.push_str(&field.render());
		html.push_str(&renderer.field_outer_close());
	}
	html.push_str(&renderer.inner_form_close());
	html.push_str("</form>");
	html
}
