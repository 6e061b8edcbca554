//! Object copying helpers.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectsError {
    #[error("Cannot have both 'allowed' and 'blocked' options provided")]
    ConflictingFilters,
    #[error("Can only copy properties of an object")]
    NotObject,
}

/// Key filters for [`copy_props`].
///
/// At most one of `allowed` and `blocked` may be set.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Copy only these keys.
    pub allowed: Option<Vec<String>>,
    /// Copy every key except these.
    pub blocked: Option<Vec<String>>,
}

impl CopyOptions {
    pub fn allowed<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: Some(keys.into_iter().map(Into::into).collect()),
            blocked: None,
        }
    }

    pub fn blocked<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: None,
            blocked: Some(keys.into_iter().map(Into::into).collect()),
        }
    }

    fn keeps(&self, key: &str) -> bool {
        if let Some(allowed) = &self.allowed {
            if !allowed.iter().any(|k| k == key) {
                return false;
            }
        }
        if let Some(blocked) = &self.blocked {
            if blocked.iter().any(|k| k == key) {
                return false;
            }
        }
        true
    }
}

/// Shallow copy of an object's entries, filtered by `options`.
///
/// Values are cloned one level deep; key order is preserved.
///
/// # Examples
///
/// ```
/// use goodish_util::objects::{copy_props, CopyOptions};
/// use serde_json::json;
///
/// let obj = json!({"one": 1, "two": 2, "three": 3});
/// let obj = obj.as_object().unwrap();
///
/// let copy = copy_props(obj, &CopyOptions::allowed(["two"])).unwrap();
/// assert_eq!(serde_json::Value::Object(copy), json!({"two": 2}));
/// ```
///
/// # Errors
///
/// Returns [`ObjectsError::ConflictingFilters`] when both `allowed` and
/// `blocked` are set.
pub fn copy_props(
    obj: &Map<String, Value>,
    options: &CopyOptions,
) -> Result<Map<String, Value>, ObjectsError> {
    if options.allowed.is_some() && options.blocked.is_some() {
        return Err(ObjectsError::ConflictingFilters);
    }
    Ok(obj
        .iter()
        .filter(|(key, _)| options.keeps(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// [`copy_props`] over a `Value`, which must be an object.
pub fn copy_props_value(value: &Value, options: &CopyOptions) -> Result<Value, ObjectsError> {
    match value {
        Value::Object(map) => copy_props(map, options).map(Value::Object),
        _ => Err(ObjectsError::NotObject),
    }
}
