//! Request body decoding and the write rules built on it.
//!
//! Every key keeps three states: absent (`None`), explicit null
//! (`Some(None)`) and a value (`Some(Some(v))`). Create, partial update and
//! full replace treat those states differently. Values are kept as raw JSON;
//! type coercion is left to the store.

use serde::Deserialize;
use serde_json::Value;

use super::record::{Student, StudentFields};

/// A student JSON body as sent by a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentPayload {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<Value>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub email: Option<Option<Value>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub age: Option<Option<Value>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cellphone: Option<Option<Value>>,
}

impl StudentPayload {
    /// Decode a request body. Field values are never rejected for their type.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Fields for a new record. Absent and null keys are both written as NULL.
    pub fn into_new_fields(self) -> StudentFields {
        StudentFields {
            name: self.name.flatten(),
            email: self.email.flatten(),
            age: self.age.flatten(),
            cellphone: self.cellphone.flatten(),
        }
    }

    /// Partial update: only keys carrying a non-null value replace the
    /// current value.
    pub fn patch(self, current: &Student) -> StudentFields {
        let mut fields = current.fields();
        if let Some(name) = self.name.flatten() {
            fields.name = Some(name);
        }
        if let Some(email) = self.email.flatten() {
            fields.email = Some(email);
        }
        if let Some(age) = self.age.flatten() {
            fields.age = Some(age);
        }
        if let Some(cellphone) = self.cellphone.flatten() {
            fields.cellphone = Some(cellphone);
        }
        fields
    }

    /// Full replace: every field is overwritten.
    ///
    /// Absent keys fall back to `""` or `0`, so omitting a key blanks the
    /// stored value. An explicit null is written as NULL and fails the write.
    pub fn replace(self) -> StudentFields {
        let empty = || Some(Value::String(String::new()));
        StudentFields {
            name: self.name.unwrap_or_else(empty),
            email: self.email.unwrap_or_else(empty),
            age: self.age.unwrap_or_else(|| Some(Value::from(0))),
            cellphone: self.cellphone.unwrap_or_else(empty),
        }
    }
}
