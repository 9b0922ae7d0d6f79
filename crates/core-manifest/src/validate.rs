//! JSON Schema validation of assembled manifests
//!
//! Each layout has its own schema document, embedded at build time and compiled
//! once on first use.

use crate::classify::Layout;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use jsonschema::{ValidationError, Validator};
use serde_json::Value;
use std::sync::OnceLock;

const FLAT_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/cumulus_sns_v1.4.schema.json"
));

const NESTED_SCHEMA_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/cumulus_sns_v1.4.1.schema.json"
));

static FLAT_VALIDATOR: OnceLock<std::result::Result<Validator, String>> = OnceLock::new();
static NESTED_VALIDATOR: OnceLock<std::result::Result<Validator, String>> = OnceLock::new();

/// Embedded schema document for a layout
pub fn schema_document(layout: Layout) -> &'static str {
    match layout {
        Layout::Flat => FLAT_SCHEMA_JSON,
        Layout::Nested { .. } => NESTED_SCHEMA_JSON,
    }
}

fn compiled_validator(layout: Layout) -> Result<&'static Validator> {
    let cell = match layout {
        Layout::Flat => &FLAT_VALIDATOR,
        Layout::Nested { .. } => &NESTED_VALIDATOR,
    };

    cell.get_or_init(|| {
        let schema: Value = serde_json::from_str(schema_document(layout))
            .map_err(|e| format!("invalid JSON: {}", e))?;
        Validator::new(&schema).map_err(|e| format!("failed to compile: {}", e))
    })
    .as_ref()
    .map_err(|message| Error::schema_compile(layout.schema_name(), message.as_str()))
}

/// Validate a manifest against the schema matching its product shape
pub fn validate_manifest(manifest: &Manifest) -> Result<()> {
    let layout = if manifest.is_flat() {
        Layout::Flat
    } else {
        Layout::Nested { gibs: false }
    };
    let value = serde_json::to_value(manifest)?;
    validate_value(layout, &value)
}

/// Validate a raw JSON document against a layout's schema
pub fn validate_value(layout: Layout, value: &Value) -> Result<()> {
    let validator = compiled_validator(layout)?;

    if let Err(errors) = validator.validate(value) {
        let error_messages: Vec<String> = errors.map(|e| format_validation_error(&e)).collect();

        return Err(Error::validation(format!(
            "manifest does not conform to {}:\n  - {}",
            layout.schema_name(),
            error_messages.join("\n  - ")
        )));
    }

    Ok(())
}

fn format_validation_error(error: &ValidationError) -> String {
    let path = error.instance_path.to_string();
    if path.is_empty() {
        error.to_string()
    } else {
        format!("{}: {}", path, error)
    }
}
