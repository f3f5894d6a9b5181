use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Message surfaced to clients when a person payload fails validation.
pub const INVALID_PERSON_DATA: &str = "Invalid person data";

/// A person record.
///
/// `id` is assigned by the store; whatever a client sends in that field is
/// discarded on create and overwritten on update. Every field defaults when
/// absent from a payload so that missing values are reported by
/// [`Person::validate`] instead of the decoder.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl Person {
    /// Candidate record without an identifier.
    pub fn new(name: impl Into<String>, age: i64, hobbies: Vec<String>) -> Self {
        Self { id: String::new(), name: name.into(), age, hobbies }
    }

    /// Name non-empty, age positive, at least one hobby.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() || self.age <= 0 || self.hobbies.is_empty() {
            return Err(ModelError::Validation(INVALID_PERSON_DATA.into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbies(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_person_passes() {
        let p = Person::new("John Doe", 30, hobbies(&["reading", "swimming"]));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_empty_name_non_positive_age_and_no_hobbies() {
        let bad = [
            Person::new("", 30, hobbies(&["reading"])),
            Person::new("John", 0, hobbies(&["reading"])),
            Person::new("John", -3, hobbies(&["reading"])),
            Person::new("John", 30, Vec::new()),
        ];
        for p in bad {
            assert_eq!(
                p.validate(),
                Err(ModelError::Validation(INVALID_PERSON_DATA.into())),
                "{p:?}"
            );
        }
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let p: Person = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(p.age, 0);
        assert!(p.hobbies.is_empty());
        assert!(p.id.is_empty());
        assert!(p.validate().is_err());
    }

    #[test]
    fn json_shape_matches_wire_format() {
        let p = Person {
            id: "abc".into(),
            name: "Jane".into(),
            age: 28,
            hobbies: hobbies(&["hiking"]),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": "abc", "name": "Jane", "age": 28, "hobbies": ["hiking"]})
        );
    }
}
