use {clap::ArgMatches, solana_cli_output::OutputFormat};

pub struct Config {
    pub output_format: OutputFormat,
}

impl Config {
    pub fn new(matches: &ArgMatches<'_>) -> Self {
        let verbose = matches.is_present("verbose");
        Self {
            output_format: OutputFormat::from_matches(matches, "output_format", verbose),
        }
    }
}
