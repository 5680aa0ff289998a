use {
    crate::{
        clap_app::{CommandName, Error, PROGRAM_ID_ARG, SEEDS_ARG},
        config::Config,
        output::{CliBumpCandidate, CliBumpCandidates, CliProgramAddress},
        seed::parse_seed,
    },
    clap::ArgMatches,
    log::debug,
    solana_clap_utils::input_parsers::{pubkey_of, value_of},
    solana_program::pubkey::Pubkey,
    spl_program_address::{
        create_program_address, find_program_address_with_max_bump, verify_program_address,
        ProgramAddressError,
    },
};

pub type CommandResult = Result<String, Error>;

fn seeds_of(matches: &ArgMatches<'_>) -> Result<Vec<Vec<u8>>, Error> {
    matches
        .values_of(SEEDS_ARG.name)
        .map(|values| {
            values
                .map(|value| parse_seed(value).map_err(Into::into))
                .collect()
        })
        .unwrap_or_else(|| Ok(vec![]))
}

fn program_address_output(
    program_id: &Pubkey,
    seeds: &[Vec<u8>],
    address: &Pubkey,
    bump: u8,
) -> CliProgramAddress {
    CliProgramAddress {
        program_id: program_id.to_string(),
        seeds: seeds.iter().map(hex::encode).collect(),
        address: address.to_string(),
        bump,
    }
}

fn command_derive(
    config: &Config,
    program_id: &Pubkey,
    seeds: Vec<Vec<u8>>,
    max_bump: u8,
) -> CommandResult {
    let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
    debug!(
        "Deriving address for program {} from {} seeds, starting at bump {}",
        program_id,
        seeds.len(),
        max_bump
    );
    let (address, bump) = find_program_address_with_max_bump(&seed_refs, max_bump, program_id)?;
    Ok(config
        .output_format
        .formatted_string(&program_address_output(program_id, &seeds, &address, bump)))
}

fn command_create(
    config: &Config,
    program_id: &Pubkey,
    seeds: Vec<Vec<u8>>,
    bump: u8,
) -> CommandResult {
    let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
    let address = create_program_address(&seed_refs, bump, program_id).map_err(|err| {
        if err == ProgramAddressError::InvalidSeeds {
            format!("Bump seed {} puts the address on the curve", bump).into()
        } else {
            Error::from(err)
        }
    })?;
    Ok(config
        .output_format
        .formatted_string(&program_address_output(program_id, &seeds, &address, bump)))
}

fn command_bumps(
    config: &Config,
    program_id: &Pubkey,
    seeds: Vec<Vec<u8>>,
    limit: u16,
) -> CommandResult {
    let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
    let mut candidates = vec![];
    for bump in (0..=u8::MAX).rev().take(limit as usize) {
        let address = match create_program_address(&seed_refs, bump, program_id) {
            Ok(address) => Some(address.to_string()),
            Err(ProgramAddressError::InvalidSeeds) => {
                debug!("Bump {} is on the curve", bump);
                None
            }
            Err(err) => return Err(err.into()),
        };
        candidates.push(CliBumpCandidate { bump, address });
    }
    Ok(config.output_format.formatted_string(&CliBumpCandidates {
        program_id: program_id.to_string(),
        candidates,
    }))
}

fn command_verify(
    config: &Config,
    address: &Pubkey,
    program_id: &Pubkey,
    seeds: Vec<Vec<u8>>,
) -> CommandResult {
    let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
    let bump = verify_program_address(address, &seed_refs, program_id).map_err(|err| {
        if err == ProgramAddressError::AddressMismatch {
            format!(
                "{} is not the program derived address of these seeds for program {}",
                address, program_id
            )
            .into()
        } else {
            Error::from(err)
        }
    })?;
    Ok(config
        .output_format
        .formatted_string(&program_address_output(program_id, &seeds, address, bump)))
}

pub fn process_command(
    sub_command: &CommandName,
    sub_matches: &ArgMatches<'_>,
    config: &Config,
) -> CommandResult {
    let program_id = pubkey_of(sub_matches, PROGRAM_ID_ARG.name).unwrap();
    let seeds = seeds_of(sub_matches)?;
    match sub_command {
        CommandName::Derive => {
            let max_bump = value_of::<u8>(sub_matches, "max_bump").unwrap_or(u8::MAX);
            command_derive(config, &program_id, seeds, max_bump)
        }
        CommandName::Create => {
            let bump = value_of::<u8>(sub_matches, "bump").unwrap();
            command_create(config, &program_id, seeds, bump)
        }
        CommandName::Bumps => {
            let limit = value_of::<u16>(sub_matches, "limit").unwrap();
            command_bumps(config, &program_id, seeds, limit)
        }
        CommandName::Verify => {
            let address = pubkey_of(sub_matches, "address").unwrap();
            command_verify(config, &address, &program_id, seeds)
        }
    }
}
