//! Program derived address search

use {
    crate::{curve::is_on_curve, error::ProgramAddressError},
    solana_program::{
        hash::Hasher,
        pubkey::{Pubkey, MAX_SEEDS, MAX_SEED_LEN},
    },
};

/// Marker appended to every preimage, separating program derived addresses
/// from other hashes of the same inputs
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// Finds the program derived address for the given seeds and program id,
/// along with the highest bump seed that puts it off the curve
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramAddressError> {
    find_program_address_with_max_bump(seeds, u8::MAX, program_id)
}

/// Same as `find_program_address`, but the search starts at `max_bump`
/// instead of 255
pub fn find_program_address_with_max_bump(
    seeds: &[&[u8]],
    max_bump: u8,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramAddressError> {
    check_seeds(seeds)?;
    search_bumps(max_bump, |bump| {
        let candidate = hash_candidate(seeds, bump, program_id);
        (!is_on_curve(&candidate)).then(|| Pubkey::new_from_array(candidate))
    })
}

/// Creates the address for a single bump seed, failing if it lands on the
/// curve
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey, ProgramAddressError> {
    check_seeds(seeds)?;
    let candidate = hash_candidate(seeds, bump, program_id);
    if is_on_curve(&candidate) {
        return Err(ProgramAddressError::InvalidSeeds);
    }
    Ok(Pubkey::new_from_array(candidate))
}

/// Checks that `address` is the canonical program derived address for the
/// seeds, returning its bump seed
pub fn verify_program_address(
    address: &Pubkey,
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<u8, ProgramAddressError> {
    let (expected, bump) = find_program_address(seeds, program_id)?;
    if expected != *address {
        return Err(ProgramAddressError::AddressMismatch);
    }
    Ok(bump)
}

/// Seed bounds also cap the preimage at
/// `MAX_SEEDS * MAX_SEED_LEN + 1 + 32 + PDA_MARKER.len()` bytes
fn check_seeds(seeds: &[&[u8]]) -> Result<(), ProgramAddressError> {
    if seeds.len() > MAX_SEEDS {
        return Err(ProgramAddressError::TooManySeeds);
    }
    if seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(ProgramAddressError::SeedTooLong);
    }
    Ok(())
}

fn hash_candidate(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> [u8; 32] {
    let mut hasher = Hasher::default();
    for seed in seeds {
        hasher.hash(seed);
    }
    hasher.hashv(&[&[bump], program_id.as_ref(), PDA_MARKER]);
    hasher.result().to_bytes()
}

/// Walks bumps from `max_bump` down to 0, returning the first accepted one
fn search_bumps<F>(max_bump: u8, mut try_bump: F) -> Result<(Pubkey, u8), ProgramAddressError>
where
    F: FnMut(u8) -> Option<Pubkey>,
{
    (0..=max_bump)
        .rev()
        .find_map(|bump| try_bump(bump).map(|address| (address, bump)))
        .ok_or(ProgramAddressError::Exhausted)
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*, test_case::test_case};

    #[test]
    fn test_search_exhausted() {
        let mut calls = 0;
        let result = search_bumps(u8::MAX, |_| {
            calls += 1;
            None
        });
        assert_eq!(result, Err(ProgramAddressError::Exhausted));
        assert_eq!(calls, 256);
    }

    #[test]
    fn test_search_prefers_highest_bump() {
        let accepted = Pubkey::new_unique();
        let result = search_bumps(u8::MAX, |bump| {
            (bump == 200 || bump == 100).then_some(accepted)
        });
        assert_eq!(result, Ok((accepted, 200)));
    }

    #[test_case(255, 255 ; "full range")]
    #[test_case(254, 200 ; "ceiling above hit")]
    #[test_case(199, 100 ; "ceiling between hits")]
    #[test_case(100, 100 ; "ceiling on hit")]
    #[test_case(99, 0 ; "only zero left")]
    fn test_search_ceiling(max_bump: u8, expected_bump: u8) {
        let accepted = Pubkey::new_unique();
        let result = search_bumps(max_bump, |bump| {
            matches!(bump, 255 | 200 | 100 | 0).then_some(accepted)
        });
        assert_eq!(result, Ok((accepted, expected_bump)));
    }

    #[test]
    fn test_seed_too_long() {
        let program_id = Pubkey::new_unique();
        let long_seed = [0u8; MAX_SEED_LEN + 1];
        assert_eq!(
            find_program_address(&[b"ok", &long_seed], &program_id),
            Err(ProgramAddressError::SeedTooLong)
        );
        assert_eq!(
            create_program_address(&[&long_seed], 255, &program_id),
            Err(ProgramAddressError::SeedTooLong)
        );
        let max_seed = [0u8; MAX_SEED_LEN];
        assert!(find_program_address(&[&max_seed], &program_id).is_ok());
    }

    #[test]
    fn test_too_many_seeds() {
        let program_id = Pubkey::new_unique();
        let seeds = vec![&b"seed"[..]; MAX_SEEDS + 1];
        assert_eq!(
            find_program_address(&seeds, &program_id),
            Err(ProgramAddressError::TooManySeeds)
        );
        assert!(find_program_address(&seeds[..MAX_SEEDS], &program_id).is_ok());
    }

    #[test]
    fn test_no_seeds() {
        let program_id = Pubkey::new_unique();
        let (address, bump) = find_program_address(&[], &program_id).unwrap();
        assert_eq!(create_program_address(&[], bump, &program_id), Ok(address));
    }

    #[test]
    fn test_create_matches_preimage_layout() {
        let program_id = Pubkey::new_unique();
        let bump = 7;
        let expected = solana_program::hash::hashv(&[
            b"alpha",
            b"beta",
            &[bump],
            program_id.as_ref(),
            PDA_MARKER,
        ])
        .to_bytes();
        assert_eq!(hash_candidate(&[b"alpha", b"beta"], bump, &program_id), expected);
    }

    #[test]
    fn test_verify() {
        let program_id = Pubkey::new_unique();
        let seeds: &[&[u8]] = &[b"vault", program_id.as_ref()];
        let (address, bump) = find_program_address(seeds, &program_id).unwrap();
        assert_eq!(verify_program_address(&address, seeds, &program_id), Ok(bump));
        assert_eq!(
            verify_program_address(&Pubkey::new_unique(), seeds, &program_id),
            Err(ProgramAddressError::AddressMismatch)
        );
    }

    proptest! {
        #[test]
        fn test_find_is_deterministic_and_off_curve(
            program_id in any::<[u8; 32]>(),
            seeds in prop::collection::vec(
                prop::collection::vec(any::<u8>(), 0..=MAX_SEED_LEN),
                0..=MAX_SEEDS,
            ),
        ) {
            let program_id = Pubkey::new_from_array(program_id);
            let seeds: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
            let first = find_program_address(&seeds, &program_id).unwrap();
            let second = find_program_address(&seeds, &program_id).unwrap();
            prop_assert_eq!(first, second);
            prop_assert!(!is_on_curve(&first.0.to_bytes()));
        }

        #[test]
        fn test_find_returns_highest_bump(
            program_id in any::<[u8; 32]>(),
            seed in prop::collection::vec(any::<u8>(), 0..=MAX_SEED_LEN),
        ) {
            let program_id = Pubkey::new_from_array(program_id);
            let seeds = [seed.as_slice()];
            let (address, bump) = find_program_address(&seeds, &program_id).unwrap();
            prop_assert_eq!(create_program_address(&seeds, bump, &program_id), Ok(address));
            for higher in (bump..=u8::MAX).skip(1) {
                prop_assert_eq!(
                    create_program_address(&seeds, higher, &program_id),
                    Err(ProgramAddressError::InvalidSeeds)
                );
            }
        }

        #[test]
        fn test_seed_order_matters(
            program_id in any::<[u8; 32]>(),
            a in prop::collection::vec(any::<u8>(), 1..=MAX_SEED_LEN),
            b in prop::collection::vec(any::<u8>(), 1..=MAX_SEED_LEN),
        ) {
            // seeds are hashed back to back, so only distinct concatenations differ
            let forward_seeds = [a.as_slice(), b.as_slice()];
            let backward_seeds = [b.as_slice(), a.as_slice()];
            prop_assume!(forward_seeds.concat() != backward_seeds.concat());
            let program_id = Pubkey::new_from_array(program_id);
            let (forward, _) = find_program_address(&forward_seeds, &program_id).unwrap();
            let (backward, _) = find_program_address(&backward_seeds, &program_id).unwrap();
            prop_assert_ne!(forward, backward);
        }
    }
}
