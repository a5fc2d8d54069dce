//! Source attributes (`(* key = value *)`) carried through elaboration.

use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// The value half of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// A bare key with no value.
    Void,
    /// A string value.
    Str(String),
    /// An integer value.
    Num(i64),
}

/// A key/value attribute attached to a scope, signal, gate, or process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute key.
    pub key: Ident,
    /// The attribute value.
    pub value: AttrValue,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(key: Ident, value: AttrValue) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let attr = Attribute::new(Ident::from_raw(3), AttrValue::Str("yes".into()));
        let json = serde_json::to_string(&attr).unwrap();
        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(attr, back);
    }

    #[test]
    fn values_distinct() {
        assert_ne!(AttrValue::Void, AttrValue::Num(0));
        assert_ne!(AttrValue::Str("0".into()), AttrValue::Num(0));
    }
}
