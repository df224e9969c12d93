//! # Student Records
//!
//! The single entity served by the API and its JSON shapes.
//!
//! - [`Student`] is a persisted row, serialized as a flat object with
//!   `id`, `name`, `email`, `age` and `cellphone`.
//! - [`StudentFields`] is the writable field set handed to the store.
//! - [`StudentPayload`] is a decoded request body and knows how to turn
//!   itself into fields for create, partial update and full replace.

mod payload;
mod record;

pub use payload::StudentPayload;
pub use record::{Student, StudentFields, StudentId};
