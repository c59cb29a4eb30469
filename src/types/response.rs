use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::config::{RESPONSE_OK, WELCOME_MESSAGE};

/// Success sentinel for mutations, serialized as the JSON string `"OK"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

impl Serialize for Ack {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(RESPONSE_OK)
    }
}

impl IntoResponse for Ack {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

/// Root greeting, serialized as a JSON string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome;

impl IntoResponse for Welcome {
    fn into_response(self) -> axum::response::Response {
        Json(WELCOME_MESSAGE).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_serializes_as_ok_string() {
        assert_eq!(serde_json::to_string(&Ack).unwrap(), r#""OK""#);
    }
}
