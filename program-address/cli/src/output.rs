use {
    serde_derive::{Deserialize, Serialize},
    solana_cli_output::{QuietDisplay, VerboseDisplay},
    std::fmt::{self, Display, Formatter},
};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliProgramAddress {
    pub program_id: String,
    /// Hex encoded seed bytes, in order
    pub seeds: Vec<String>,
    pub address: String,
    pub bump: u8,
}

impl QuietDisplay for CliProgramAddress {
    fn write_str(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        write!(w, "{}", self.address)
    }
}

impl VerboseDisplay for CliProgramAddress {
    fn write_str(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(w, "Program Id: {}", self.program_id)?;
        for (i, seed) in self.seeds.iter().enumerate() {
            writeln!(w, "Seed {}: {}", i, seed)?;
        }
        writeln!(w, "Address: {}", self.address)?;
        write!(w, "Bump: {}", self.bump)
    }
}

impl Display for CliProgramAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Address: {}", self.address)?;
        write!(f, "Bump: {}", self.bump)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliBumpCandidate {
    pub bump: u8,
    /// None when the candidate lies on the curve
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliBumpCandidates {
    pub program_id: String,
    pub candidates: Vec<CliBumpCandidate>,
}

impl QuietDisplay for CliBumpCandidates {}
impl VerboseDisplay for CliBumpCandidates {
    fn write_str(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(w, "Program Id: {}", self.program_id)?;
        write!(w, "{}", self)
    }
}

impl Display for CliBumpCandidates {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut candidates = self.candidates.iter().peekable();
        while let Some(candidate) = candidates.next() {
            match &candidate.address {
                Some(address) => write!(f, "Bump {}: {}", candidate.bump, address)?,
                None => write!(f, "Bump {}: on curve", candidate.bump)?,
            }
            if candidates.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
