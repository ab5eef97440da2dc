//! Output envelope
//!
//! Every command writes exactly one of two JSON shapes to stdout:
//!
//! ```json
//! { "success": true,  "data": { ... } }
//! { "success": false, "error": { "code": "...", "message": "...", ... } }
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::io::Write;

use crate::error::Error;

const UNRENDERABLE: &str = r#"{"success":false,"error":{"code":"internal_error","message":"unrenderable"}}"#;

/// The `success` flag is derived from the variant when serializing
#[derive(Debug)]
pub enum Envelope {
    Success(Value),
    Failure(ErrorBody),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

impl Envelope {
    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self::Success(data),
            // Payload types are plain structs; this only fires on a map with non-string keys
            Err(e) => Self::failure(&Error::Internal(format!("failed to serialize payload: {}", e))),
        }
    }

    pub fn failure(err: &Error) -> Self {
        Self::Failure(ErrorBody {
            code: err.code(),
            message: err.to_string(),
            context: err.context(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Process exit code for this envelope
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn render(&self, pretty: bool) -> String {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        // Envelope fields are all JSON-native, so serialization cannot fail
        rendered.unwrap_or_else(|_| UNRENDERABLE.to_string())
    }

    pub fn print(&self, pretty: bool) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.render(pretty));
    }
}
