use {
    clap::{crate_description, crate_name, crate_version},
    spl_program_address_cli::{
        clap_app::{app, CommandName},
        command::process_command,
        config::Config,
    },
    std::{process::exit, str::FromStr},
};

fn main() {
    let app_matches = app(crate_name!(), crate_description!(), crate_version!()).get_matches();

    let (sub_command, sub_matches) = app_matches.subcommand();
    let sub_command = CommandName::from_str(sub_command).unwrap();
    let matches = sub_matches.unwrap();

    let config = Config::new(matches);

    solana_logger::setup_with_default("solana=info");
    match process_command(&sub_command, matches, &config) {
        Ok(result) => println!("{}", result),
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    }
}
