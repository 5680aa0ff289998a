use {
    crate::seed::is_seed,
    clap::{App, AppSettings, Arg, SubCommand},
    solana_clap_utils::{
        input_validators::{is_parsable, is_pubkey},
        ArgConstant,
    },
    strum_macros::{AsRefStr, EnumString, IntoStaticStr},
};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub const PROGRAM_ID_ARG: ArgConstant<'static> = ArgConstant {
    name: "program_id",
    long: "program-id",
    help: "Address of the program the address is derived for",
};

pub const SEEDS_ARG: ArgConstant<'static> = ArgConstant {
    name: "seeds",
    long: "seeds",
    help: "Seeds, in order, as <kind>:<value>. Kinds: string, pubkey, hex, u8, \
           u16le, u16be, u32le, u32be, u64le, u64be, u128le, u128be",
};

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandName {
    Derive,
    Create,
    Bumps,
    Verify,
}

fn program_id_arg<'a, 'b>(index: u64) -> Arg<'a, 'b> {
    Arg::with_name(PROGRAM_ID_ARG.name)
        .value_name("PROGRAM_ID")
        .validator(is_pubkey)
        .index(index)
        .required(true)
        .help(PROGRAM_ID_ARG.help)
}

fn seeds_arg<'a, 'b>(index: u64) -> Arg<'a, 'b> {
    Arg::with_name(SEEDS_ARG.name)
        .value_name("SEED")
        .validator(is_seed)
        .index(index)
        .multiple(true)
        .help(SEEDS_ARG.help)
}

pub fn app<'a>(name: &str, about: &'a str, version: &'a str) -> App<'a, 'a> {
    App::new(name)
        .about(about)
        .version(version)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .takes_value(false)
                .global(true)
                .help("Show additional information"),
        )
        .arg(
            Arg::with_name("output_format")
                .long("output")
                .value_name("FORMAT")
                .global(true)
                .takes_value(true)
                .possible_values(&["json", "json-compact"])
                .help("Return information in specified output format"),
        )
        .subcommand(
            SubCommand::with_name(CommandName::Derive.into())
                .about("Find the program derived address and its canonical bump seed")
                .arg(program_id_arg(1))
                .arg(seeds_arg(2))
                .arg(
                    Arg::with_name("max_bump")
                        .long("max-bump")
                        .value_name("BUMP")
                        .takes_value(true)
                        .validator(is_parsable::<u8>)
                        .help("Start the bump seed search here instead of at 255"),
                ),
        )
        .subcommand(
            SubCommand::with_name(CommandName::Create.into())
                .about("Create the address for a single bump seed")
                .arg(program_id_arg(1))
                .arg(seeds_arg(2))
                .arg(
                    Arg::with_name("bump")
                        .long("bump")
                        .value_name("BUMP")
                        .takes_value(true)
                        .required(true)
                        .validator(is_parsable::<u8>)
                        .help("Bump seed appended after the seeds"),
                ),
        )
        .subcommand(
            SubCommand::with_name(CommandName::Bumps.into())
                .about("List candidate addresses from bump seed 255 downward")
                .arg(program_id_arg(1))
                .arg(seeds_arg(2))
                .arg(
                    Arg::with_name("limit")
                        .long("limit")
                        .value_name("COUNT")
                        .takes_value(true)
                        .default_value("3")
                        .validator(is_parsable::<u16>)
                        .help("Number of bump seeds to list"),
                ),
        )
        .subcommand(
            SubCommand::with_name(CommandName::Verify.into())
                .about("Check that an address is the canonical derivation of the seeds")
                .arg(
                    Arg::with_name("address")
                        .value_name("ADDRESS")
                        .validator(is_pubkey)
                        .index(1)
                        .required(true)
                        .help("The address to check"),
                )
                .arg(program_id_arg(2))
                .arg(seeds_arg(3)),
        )
}
