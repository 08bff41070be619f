//! Registry-wide defaults for newly registered form types
//!
//! ```toml
//! default_action = "/submit"
//! default_method = "post"
//! default_renderer = "table"
//! ```

use crate::form::{FormError, FormResult};
use crate::renderer::RendererType;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	pub default_action: String,
	pub default_method: String,
	/// Short name of a bundled renderer (`ol`, `ul`, `p`, `table`)
	pub default_renderer: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			default_action: String::new(),
			default_method: "post".to_string(),
			default_renderer: "ol".to_string(),
		}
	}
}

impl FormSettings {
	/// Parse settings from TOML, falling back to defaults for missing keys
	///
	/// # Examples
	///
	/// ```
	/// use reform_forms::FormSettings;
	///
	/// let settings = FormSettings::from_toml_str(r#"default_method = "get""#).unwrap();
	/// assert_eq!(settings.default_method, "get");
	/// assert_eq!(settings.default_renderer, "ol");
	/// ```
	pub fn from_toml_str(source: &str) -> FormResult<Self> {
		toml::from_str(source).map_err(|e| FormError::Settings(e.to_string()))
	}

	pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)
			.map_err(|e| FormError::Settings(format!("{}: {}", path.display(), e)))?;
		Self::from_toml_str(&source)
	}

	pub fn renderer_type(&self) -> FormResult<RendererType> {
		RendererType::builtin(&self.default_renderer)
			.ok_or_else(|| FormError::UnknownRenderer(self.default_renderer.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = FormSettings::default();

		assert_eq!(settings.default_action, "");
		assert_eq!(settings.default_method, "post");
		assert_eq!(settings.renderer_type().unwrap().name(), "OlRenderer");
	}

	#[rstest]
	fn test_empty_document_uses_defaults() {
		assert_eq!(FormSettings::from_toml_str("").unwrap(), FormSettings::default());
	}

	#[rstest]
	fn test_invalid_toml_is_settings_error() {
		let result = FormSettings::from_toml_str("default_method = ");

		assert!(matches!(result, Err(FormError::Settings(_))));
	}

	#[rstest]
	fn test_unknown_renderer() {
		let settings = FormSettings {
			default_renderer: "grid".to_string(),
			..FormSettings::default()
		};

		assert!(matches!(
			settings.renderer_type(),
			Err(FormError::UnknownRenderer(ref name)) if name == "grid"
		));
	}

	#[rstest]
	fn test_from_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "default_action = \"/signup\"").unwrap();
		writeln!(file, "default_renderer = \"p\"").unwrap();

		// Act
		let settings = FormSettings::from_file(file.path()).unwrap();

		// Assert
		assert_eq!(settings.default_action, "/signup");
		assert_eq!(settings.default_method, "post");
		assert_eq!(settings.renderer_type().unwrap().name(), "ParagraphRenderer");
	}

	#[rstest]
	fn test_from_missing_file() {
		let result = FormSettings::from_file("/nonexistent/reform.toml");

		assert!(matches!(result, Err(FormError::Settings(_))));
	}
}
