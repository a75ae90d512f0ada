use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_ASSET_ID_LEN: usize = 64;

/// Opaque identifier of a tradable asset in the price source's namespace
/// (e.g. `solana`, `avalanche-2`).
///
/// Normalized to the source's lowercase slug form on parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAssetId);
        }

        let normalized = trimmed.to_ascii_lowercase();
        let len = normalized.chars().count();
        if len > MAX_ASSET_ID_LEN {
            return Err(ValidationError::AssetIdTooLong {
                len,
                max: MAX_ASSET_ID_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-';
            if !valid {
                return Err(ValidationError::AssetIdInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AssetId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for AssetId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AssetId> for String {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

/// Validate and normalize a quote currency to a lowercase 3-letter code.
///
/// Lowercase because the price source keys its per-currency prices that way.
pub fn validate_currency_code(input: &str) -> Result<String, ValidationError> {
    let normalized = input.trim().to_ascii_lowercase();
    let is_valid = normalized.len() == 3 && normalized.chars().all(|ch| ch.is_ascii_alphabetic());

    if !is_valid {
        return Err(ValidationError::InvalidCurrency {
            value: input.to_owned(),
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_asset_id() {
        let parsed = AssetId::parse(" Avalanche-2 ").expect("id should parse");
        assert_eq!(parsed.as_str(), "avalanche-2");
    }

    #[test]
    fn rejects_empty_asset_id() {
        let err = AssetId::parse("   ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyAssetId));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = AssetId::parse("injective_protocol").expect_err("must fail");
        assert!(matches!(err, ValidationError::AssetIdInvalidChar { .. }));
    }

    #[test]
    fn validates_currency() {
        assert_eq!(
            validate_currency_code("AUD").expect("must normalize"),
            "aud"
        );
        assert!(matches!(
            validate_currency_code("dollars"),
            Err(ValidationError::InvalidCurrency { .. })
        ));
    }
}
