//! Sparse patch documents and the generic applier.
//!
//! A `Patch` holds only the keys a caller explicitly supplied. A key mapped to `null` is a
//! deliberate null-out and is kept distinct from an absent key, which leaves the target's
//! value untouched. Applying works on the serde representation of the model, so any
//! entity model can be patched by the same function.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::server::error::AppError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a request body into a patch restricted to `allowed` fields.
    ///
    /// # Arguments
    /// - `body` - Request body; must be a JSON object
    /// - `allowed` - Mutable field names of the target resource
    ///
    /// # Returns
    /// - `Ok(Patch)` - Patch holding exactly the keys present in `body`
    /// - `Err(AppError::Validation)` - Body is not an object or names an unknown field
    pub fn from_json(body: Value, allowed: &[&str]) -> Result<Self, AppError> {
        let Value::Object(fields) = body else {
            return Err(AppError::Validation(
                "Patch body must be a JSON object".to_string(),
            ));
        };

        let patch = Self { fields };
        patch.ensure_only(allowed)?;

        Ok(patch)
    }

    /// Sets `field` to `value`.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Sets `field` to an explicit null.
    pub fn null(mut self, field: &str) -> Self {
        self.fields.insert(field.to_string(), Value::Null);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Rejects keys that are not mutable fields of the target.
    ///
    /// # Returns
    /// - `Ok(())` - Every key is in `allowed`
    /// - `Err(AppError::Validation)` - Names the first unknown key
    pub fn ensure_only(&self, allowed: &[&str]) -> Result<(), AppError> {
        match self.keys().find(|key| !allowed.contains(key)) {
            Some(key) => Err(AppError::Validation(format!("Unknown field: {}", key))),
            None => Ok(()),
        }
    }

    /// Reads an integer field, if present.
    ///
    /// # Returns
    /// - `Ok(None)` - Field is absent
    /// - `Ok(Some(i32))` - Field holds an integer in `i32` range
    /// - `Err(AppError::Validation)` - Field is null, not an integer or out of range
    pub fn get_i32(&self, field: &str) -> Result<Option<i32>, AppError> {
        let Some(value) = self.fields.get(field) else {
            return Ok(None);
        };

        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{} must be an integer", field)))
    }
}

/// Applies `patch` onto a copy of `target`.
///
/// Every key present in the patch replaces the corresponding attribute; attributes not
/// named by the patch keep their exact prior value. Field names are assumed to be
/// validated already by `Patch::from_json` or `Patch::ensure_only`.
///
/// # Arguments
/// - `target` - Current state of the resource
/// - `patch` - Sparse set of new values
///
/// # Returns
/// - `Ok(M)` - Patched copy of the resource
/// - `Err(AppError::Validation)` - A value does not fit the field's type (e.g. null on a
///   required field)
pub fn apply<M>(target: &M, patch: &Patch) -> Result<M, AppError>
where
    M: Serialize + DeserializeOwned,
{
    let mut value = serde_json::to_value(target)?;

    let Some(object) = value.as_object_mut() else {
        return Err(AppError::InternalError(
            "Patch target does not serialize to an object".to_string(),
        ));
    };

    for (field, new_value) in &patch.fields {
        object.insert(field.clone(), new_value.clone());
    }

    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Card {
        id: i32,
        title: Option<String>,
        description: Option<String>,
        color: Option<i32>,
        inline: bool,
    }

    fn card() -> Card {
        Card {
            id: 4,
            title: Some("Old".to_string()),
            description: Some("Keep me".to_string()),
            color: Some(0x00ff00),
            inline: true,
        }
    }

    #[test]
    fn leaves_absent_fields_untouched() {
        let patch = Patch::new().set("title", "New");

        let patched = apply(&card(), &patch).unwrap();

        assert_eq!(patched.title.as_deref(), Some("New"));
        assert_eq!(patched.description, card().description);
        assert_eq!(patched.color, card().color);
        assert_eq!(patched.id, 4);
    }

    #[test]
    fn explicit_null_clears_field() {
        let patch = Patch::new().null("description");

        let patched = apply(&card(), &patch).unwrap();

        assert_eq!(patched.description, None);
        assert_eq!(patched.title, card().title);
    }

    #[test]
    fn null_on_required_field_is_validation_error() {
        let patch = Patch::new().null("inline");

        assert!(matches!(
            apply(&card(), &patch),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn empty_patch_is_identity() {
        assert_eq!(apply(&card(), &Patch::new()).unwrap(), card());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = Patch::from_json(json!({ "title": "x", "id": 9 }), &["title"]);

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("id")));
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(matches!(
            Patch::from_json(json!(["title"]), &["title"]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn distinguishes_null_from_absent() {
        let patch = Patch::from_json(json!({ "color": null }), &["color", "title"]).unwrap();

        assert!(patch.contains("color"));
        assert!(!patch.contains("title"));
        assert_eq!(patch.get("color"), Some(&Value::Null));
    }

    #[test]
    fn reads_integer_fields() {
        let patch = Patch::new().set("sort_order", 2).set("name", "x");

        assert_eq!(patch.get_i32("sort_order").unwrap(), Some(2));
        assert_eq!(patch.get_i32("missing").unwrap(), None);
        assert!(patch.get_i32("name").is_err());
    }
}
