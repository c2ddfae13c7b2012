//! Wallet address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A hex-encoded EVM wallet address, always prefixed with `0x`.
///
/// Sessions are bound to the wallet the Discord bot provisioned for the user;
/// the proof request carries this address as its user identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("address must be 40 hex digits, got {0}")]
    BadLength(usize),

    #[error("address contains non-hex characters: {0}")]
    NotHex(String),
}

impl WalletAddress {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "0x";

    /// Hex digits after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Parse and validate a raw address string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressError> {
        let s = raw.into();
        if !s.starts_with(Self::PREFIX) {
            return Err(AddressError::MissingPrefix(s));
        }
        let body_len = s.len() - Self::PREFIX.len();
        if body_len != Self::HEX_LEN {
            return Err(AddressError::BadLength(body_len));
        }
        if hex::decode(&s[Self::PREFIX.len()..]).is_err() {
            return Err(AddressError::NotHex(s));
        }
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the all-zero placeholder address. A zero address
    /// parses, but no wallet was actually bound to the session.
    pub fn is_zero(&self) -> bool {
        self.0[Self::PREFIX.len()..].bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<WalletAddress> for String {
    fn from(a: WalletAddress) -> Self {
        a.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_address() {
        let addr = WalletAddress::parse("0xabcDEF0123456789abcdef0123456789abcdef01").unwrap();
        assert_eq!(addr.as_str(), "0xabcDEF0123456789abcdef0123456789abcdef01");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            WalletAddress::parse("abcdef0123456789abcdef0123456789abcdef01"),
            Err(AddressError::MissingPrefix(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            WalletAddress::parse("0xabc"),
            Err(AddressError::BadLength(3))
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(
            WalletAddress::parse("0xzzcdef0123456789abcdef0123456789abcdef01"),
            Err(AddressError::NotHex(_))
        ));
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let addr = WalletAddress::parse("0xabcdef0123456789abcdef0123456789abcdef01").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0xabcdef0123456789abcdef0123456789abcdef01\"");
        let back: WalletAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn zero_address_is_placeholder() {
        let zero = WalletAddress::parse(format!("0x{}", "0".repeat(40))).unwrap();
        assert!(zero.is_zero());
        let real = WalletAddress::parse("0xabcdef0123456789abcdef0123456789abcdef01").unwrap();
        assert!(!real.is_zero());
    }

    #[test]
    fn serde_rejects_malformed_string() {
        assert!(serde_json::from_str::<WalletAddress>("\"not-an-address\"").is_err());
    }
}
