// Input fields
pub mod checkbox_field;
pub mod text_field;
pub mod textarea_field;

// Choice fields
pub mod select_field;

pub use checkbox_field::CheckboxField;
pub use select_field::SelectField;
pub use text_field::{HiddenField, PASSWORD_REDACTED, PasswordField, TextField};
pub use textarea_field::TextAreaField;
