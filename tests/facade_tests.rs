//! Facade re-export tests

use reform::FormSettings;
use reform::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_prelude_covers_definition_to_render() {
	// Arrange
	let settings = FormSettings::from_toml_str("default_renderer = \"p\"").unwrap();
	let mut registry = FormRegistry::with_settings(&settings).unwrap();
	registry
		.define("Feedback", |form| {
			form.declare_field("comment", FieldType::of::<TextAreaField>(), FieldOptions::new())
				.declare_field("token", FieldType::of::<HiddenField>(), FieldOptions::new())
				.set_action("/feedback");
		})
		.unwrap();

	// Act
	let form = registry
		.construct(
			"Feedback",
			FormOptions::new()
				.with_value("comment", "Great")
				.with_value("token", json!(42)),
		)
		.unwrap();

	// Assert
	assert_eq!(
		form.render(),
		concat!(
			r#"<form method="post" action="/feedback">"#,
			r#"<p><label for="Feedback_comment">comment</label>"#,
			r#"<textarea name="comment" id="Feedback_comment">Great</textarea></p>"#,
			r#"<p><input type="hidden" name="token" id="Feedback_token" value="42" /></p>"#,
			"</form>"
		)
	);
}
