//! Error types

use {
    num_derive::FromPrimitive,
    solana_program::{decode_error::DecodeError, program_error::ProgramError},
    thiserror::Error,
};

/// Errors that may be returned while deriving a program address.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum ProgramAddressError {
    // 0
    /// A seed is longer than `MAX_SEED_LEN` bytes
    #[error("Seed is longer than the maximum seed length")]
    SeedTooLong,
    /// More than `MAX_SEEDS` seeds were provided
    #[error("Too many seeds provided")]
    TooManySeeds,
    /// No bump seed produced an address off the curve
    #[error("Unable to find a viable program address bump seed")]
    Exhausted,
    /// The candidate address for the given bump lies on the curve
    #[error("Provided seeds do not result in a valid address")]
    InvalidSeeds,
    /// The address is not the canonical derivation of the seeds
    #[error("Address does not match the seed derivation")]
    AddressMismatch,
}
impl From<ProgramAddressError> for ProgramError {
    fn from(e: ProgramAddressError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
impl<T> DecodeError<T> for ProgramAddressError {
    fn type_of() -> &'static str {
        "ProgramAddressError"
    }
}
