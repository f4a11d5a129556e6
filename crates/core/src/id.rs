//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a product (unique within one inventory).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_bare_integer() {
        assert_eq!(ProductId::new(-3).to_string(), "-3");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::from(12)).unwrap();
        assert_eq!(json, "12");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 12);
    }
}
