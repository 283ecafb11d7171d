//! Account addresses

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Address parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Missing `0x` prefix
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),
    /// Not 20 bytes of hex
    #[error("invalid address {input}: {reason}")]
    Invalid { input: String, reason: String },
}

/// A 20-byte account address, displayed in checksummed form
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(Address);

impl AccountAddress {
    /// Address from raw bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0 .0 .0
    }

    /// Abbreviated form for display, e.g. `0x8A7C...cBD6`
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !(s.starts_with("0x") || s.starts_with("0X")) {
            return Err(AddressError::MissingPrefix(s.to_string()));
        }

        // Mixed-case input is accepted without checksum validation
        Address::from_str(&s[2..])
            .map(Self)
            .map_err(|e| AddressError::Invalid {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<Address> for AccountAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<AccountAddress> for Address {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.to_string()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_checksum(None))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "0xA531D8A9a62a694e4C8520c52f2d9968fa3B3E7c";

    #[test]
    fn test_parse_any_case() {
        let lower: AccountAddress = OWNER.to_lowercase().parse().unwrap();
        let mixed: AccountAddress = OWNER.parse().unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(
            mixed.to_string().to_lowercase(),
            "0xa531d8a9a62a694e4c8520c52f2d9968fa3b3e7c"
        );
    }

    #[test]
    fn test_display_round_trips() {
        let address: AccountAddress = OWNER.parse().unwrap();
        let again: AccountAddress = address.to_string().parse().unwrap();
        assert_eq!(again, address);
    }

    #[test]
    fn test_short() {
        let address: AccountAddress = OWNER.parse().unwrap();
        assert_eq!(address.short().to_lowercase(), "0xa531...3e7c");
    }

    #[test]
    fn test_from_bytes() {
        let mut bytes = [0u8; 20];
        bytes[19] = 0xaa;
        let address = AccountAddress::from_bytes(bytes);
        assert_eq!(address.as_bytes(), &bytes);
        assert_eq!(Address::from(address), Address::new(bytes));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "a531d8a9a62a694e4c8520c52f2d9968fa3b3e7c".parse::<AccountAddress>(),
            Err(AddressError::MissingPrefix(_))
        ));
        assert!(matches!(
            "0x1234".parse::<AccountAddress>(),
            Err(AddressError::Invalid { .. })
        ));
        assert!(matches!(
            "0xz531d8a9a62a694e4c8520c52f2d9968fa3b3e7c".parse::<AccountAddress>(),
            Err(AddressError::Invalid { .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let address: AccountAddress = OWNER.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json.to_lowercase(), "\"0xa531d8a9a62a694e4c8520c52f2d9968fa3b3e7c\"");
        let back: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<AccountAddress>("\"not-an-address\"").is_err());
    }
}
