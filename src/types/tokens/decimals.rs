//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// Number of decimal places a currency uses for display.
///
/// Stored as `u8`, so it is non-negative by construction. Carried through
/// unchanged by [`Token`](crate::Token) and [`NativeCurrency`](crate::NativeCurrency);
/// it never participates in equality or ordering.
///
/// # Examples
///
/// ```
/// use dexcore::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert_eq!(u8::from(TokenDecimals::new(6)), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// 18 decimals, used by native coins and their wrapped forms
    pub const STANDARD: Self = Self(18);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TokenDecimals> for u8 {
    fn from(value: TokenDecimals) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_u8_range_is_preserved() {
        assert_eq!(TokenDecimals::new(0).as_u8(), 0);
        assert_eq!(TokenDecimals::from(255).as_u8(), 255);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(TokenDecimals::default(), TokenDecimals::STANDARD);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TokenDecimals::new(8)).unwrap();
        assert_eq!(json, "8");
        let back: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_u8(), 8);
    }
}
