//! IDs as sent by clients, which may be either JSON integers or numeric strings.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An integer ID that a client sent either as a number or as a string.
///
/// The web client sends category IDs as strings in some requests and as
/// numbers in others. Convert to an integer with [IdParam::to_integer] at the
/// edge so that only canonical IDs reach the database layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdParam {
    /// An ID sent as a JSON number.
    Integer(i64),
    /// An ID sent as a JSON string.
    Text(String),
}

impl IdParam {
    /// The ID as an integer, or `None` if it is a string that does not parse as one.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            IdParam::Integer(id) => Some(*id),
            IdParam::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl Display for IdParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdParam::Integer(id) => write!(f, "{id}"),
            IdParam::Text(text) => write!(f, "{text}"),
        }
    }
}
