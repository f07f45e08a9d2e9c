use std::path::PathBuf;

use clap::Parser;

use crate::io::{DEFAULT_CPS, MAX_CPS, MIN_CPS};

/// Hunt down the Klingon fleet before time runs out.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output speed in characters per second (1-200)
    #[arg(long, default_value_t = DEFAULT_CPS)]
    pub cps: u32,

    /// Print output at full speed
    #[arg(long)]
    pub no_pacing: bool,

    /// JSON file overriding the game tunables
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn cps(&self) -> u32 {
        self.cps.clamp(MIN_CPS, MAX_CPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["tinytrek"]);
        assert_eq!(args.seed, None);
        assert_eq!(args.cps(), 30);
        assert!(!args.no_pacing);
        assert!(args.config.is_none());
    }

    #[test]
    fn cps_is_clamped() {
        let args = Args::parse_from(["tinytrek", "--cps", "0"]);
        assert_eq!(args.cps(), 1);
        let args = Args::parse_from(["tinytrek", "--cps", "5000"]);
        assert_eq!(args.cps(), 200);
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "tinytrek",
            "--seed",
            "77",
            "--no-pacing",
            "--config",
            "trek.json",
        ]);
        assert_eq!(args.seed, Some(77));
        assert!(args.no_pacing);
        assert_eq!(args.config, Some(PathBuf::from("trek.json")));
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Args::try_parse_from(["tinytrek", "--seed", "soon"]).is_err());
    }
}
