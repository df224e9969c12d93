//! Persisted student record and writable field set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-assigned primary key
pub type StudentId = i64;

/// A student row as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub cellphone: String,
}

impl Student {
    /// The writable fields of this record
    pub fn fields(&self) -> StudentFields {
        StudentFields::new(
            self.name.clone(),
            self.email.clone(),
            self.age,
            self.cellphone.clone(),
        )
    }
}

/// Values written by create and update.
///
/// Values keep the JSON type the client sent; the store coerces them to the
/// column types (`"21"` becomes 21, `5` becomes `"5"`) and rejects what
/// cannot be coerced. A `None` is written as SQL NULL. Every column is
/// NOT NULL, so the store reports it as a constraint violation rather than
/// inventing a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub age: Option<Value>,
    pub cellphone: Option<Value>,
}

impl StudentFields {
    /// Fields with every value present
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        cellphone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            age: Some(Value::from(age)),
            cellphone: Some(Value::String(cellphone.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Student {
        Student {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            cellphone: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_serializes_flat_object_with_five_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Ada",
                "email": "ada@example.com",
                "age": 36,
                "cellphone": "5551234567"
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_json_preserves_writable_fields() {
        let student = sample();
        let text = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&text).unwrap();
        assert_eq!(back.fields(), student.fields());
    }
}
