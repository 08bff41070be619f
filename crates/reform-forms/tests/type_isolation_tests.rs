//! Form type isolation tests
//!
//! Declarations on one form type must never be visible through another, and
//! instantiation must leave type metadata untouched.

use proptest::prelude::*;
use reform_forms::{FieldOptions, FieldType, FormOptions, FormRegistry, TextField};
use rstest::rstest;

fn declared_names(registry: &FormRegistry, form_type: &str) -> Vec<String> {
	registry
		.form_type(form_type)
		.unwrap()
		.list_fields()
		.iter()
		.map(|spec| spec.name().to_string())
		.collect()
}

proptest! {
	#[test]
	fn prop_sibling_declarations_stay_isolated(
		first in prop::collection::vec("[a-z]{1,8}", 0..6),
		second in prop::collection::vec("[a-z]{1,8}", 0..6),
	) {
		let mut registry = FormRegistry::new();
		registry
			.define("First", |form| {
				for name in &first {
					form.declare_field(name.as_str(), FieldType::of::<TextField>(), FieldOptions::new());
				}
			})
			.unwrap();
		registry
			.define("Second", |form| {
				for name in &second {
					form.declare_field(name.as_str(), FieldType::of::<TextField>(), FieldOptions::new());
				}
			})
			.unwrap();

		prop_assert_eq!(declared_names(&registry, "First"), first);
		prop_assert_eq!(declared_names(&registry, "Second"), second);
	}

	#[test]
	fn prop_derived_declarations_stay_isolated(
		parent in prop::collection::vec("[a-z]{1,8}", 0..4),
		child in prop::collection::vec("[a-z]{1,8}", 0..4),
	) {
		let mut registry = FormRegistry::new();
		registry
			.define("Parent", |form| {
				for name in &parent {
					form.declare_field(name.as_str(), FieldType::of::<TextField>(), FieldOptions::new());
				}
			})
			.unwrap();
		registry
			.derive("Child", "Parent", |form| {
				for name in &child {
					form.declare_field(name.as_str(), FieldType::of::<TextField>(), FieldOptions::new());
				}
			})
			.unwrap();

		let mut expected_child = parent.clone();
		expected_child.extend(child.iter().cloned());
		prop_assert_eq!(declared_names(&registry, "Parent"), parent);
		prop_assert_eq!(declared_names(&registry, "Child"), expected_child);
	}
}

#[rstest]
fn test_concurrent_instantiation_from_one_type() {
	// Arrange
	let mut registry = FormRegistry::new();
	registry
		.define("Shared", |form| {
			form.declare_field("q", FieldType::of::<TextField>(), FieldOptions::new());
		})
		.unwrap();
	let registry = &registry;

	// Act
	let rendered: Vec<String> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|i| {
				scope.spawn(move || {
					registry
						.construct("Shared", FormOptions::new().with_value("q", i))
						.unwrap()
						.render()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	// Assert
	for (i, html) in rendered.iter().enumerate() {
		assert!(html.contains(&format!(r#"value="{}""#, i)));
	}
	assert!(
		registry.form_type("Shared").unwrap().list_fields()[0]
			.options()
			.value
			.is_none()
	);
}
