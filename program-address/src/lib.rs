//! Derivation of program addresses: deterministic, off-curve addresses
//! computed from a program id and a list of seeds
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod derivation;
pub mod error;

pub use {
    derivation::{
        create_program_address, find_program_address, find_program_address_with_max_bump,
        verify_program_address, PDA_MARKER,
    },
    error::ProgramAddressError,
    solana_program::pubkey::{Pubkey, MAX_SEEDS, MAX_SEED_LEN},
};
