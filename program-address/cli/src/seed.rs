//! Typed seed arguments, `<kind>:<value>`

use {
    solana_program::pubkey::Pubkey,
    std::{fmt::Display, str::FromStr},
    strum_macros::{EnumString, IntoStaticStr},
    thiserror::Error,
};

/// Errors that may be returned while parsing a seed argument.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SeedParseError {
    /// No `<kind>:` prefix
    #[error("seed `{0}` must be of the form <kind>:<value>")]
    MissingKind(String),
    /// Prefix is not a known seed kind
    #[error("unknown seed kind `{0}`")]
    UnknownKind(String),
    /// Value cannot be parsed as the given kind
    #[error("invalid {kind} seed value `{value}`: {reason}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum SeedKind {
    String,
    Pubkey,
    Hex,
    U8,
    U16le,
    U16be,
    U32le,
    U32be,
    U64le,
    U64be,
    U128le,
    U128be,
}

/// Encodes a `<kind>:<value>` argument into raw seed bytes
pub fn parse_seed(arg: &str) -> Result<Vec<u8>, SeedParseError> {
    let (kind, value) = arg
        .split_once(':')
        .ok_or_else(|| SeedParseError::MissingKind(arg.to_string()))?;
    let kind = SeedKind::from_str(kind)
        .map_err(|_| SeedParseError::UnknownKind(kind.to_string()))?;
    let invalid = |reason: &dyn Display| SeedParseError::InvalidValue {
        kind: kind.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let bytes = match kind {
        SeedKind::String => value.as_bytes().to_vec(),
        SeedKind::Pubkey => Pubkey::from_str(value)
            .map_err(|e| invalid(&e))?
            .to_bytes()
            .to_vec(),
        SeedKind::Hex => hex::decode(value).map_err(|e| invalid(&e))?,
        SeedKind::U8 => vec![u8::from_str(value).map_err(|e| invalid(&e))?],
        SeedKind::U16le => u16::from_str(value).map_err(|e| invalid(&e))?.to_le_bytes().to_vec(),
        SeedKind::U16be => u16::from_str(value).map_err(|e| invalid(&e))?.to_be_bytes().to_vec(),
        SeedKind::U32le => u32::from_str(value).map_err(|e| invalid(&e))?.to_le_bytes().to_vec(),
        SeedKind::U32be => u32::from_str(value).map_err(|e| invalid(&e))?.to_be_bytes().to_vec(),
        SeedKind::U64le => u64::from_str(value).map_err(|e| invalid(&e))?.to_le_bytes().to_vec(),
        SeedKind::U64be => u64::from_str(value).map_err(|e| invalid(&e))?.to_be_bytes().to_vec(),
        SeedKind::U128le => u128::from_str(value)
            .map_err(|e| invalid(&e))?
            .to_le_bytes()
            .to_vec(),
        SeedKind::U128be => u128::from_str(value)
            .map_err(|e| invalid(&e))?
            .to_be_bytes()
            .to_vec(),
    };
    Ok(bytes)
}

/// clap validator for seed arguments
pub fn is_seed<T>(string: T) -> Result<(), String>
where
    T: AsRef<str> + Display,
{
    parse_seed(string.as_ref())
        .map(|_| ())
        .map_err(|err| err.to_string())
}
