//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use numseq_core::{Algorithm, NumError, Options};

/// numseq: Fibonacci numbers at any index and perfect numbers in a range.
#[derive(Parser, Debug)]
#[command(name = "numseq", version, about)]
pub struct AppConfig {
    /// Verbose output and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the Nth Fibonacci number (1-based, F(1) = F(2) = 1).
    Fib {
        /// Fibonacci index.
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Algorithm to use: auto, iter, fast, or rec.
        #[arg(long, default_value = "auto", env = "NUMSEQ_ALGO")]
        algo: String,

        /// Index at which auto switches to fast doubling (0 = default).
        #[arg(long, default_value = "0", env = "NUMSEQ_THRESHOLD")]
        threshold: u64,
    },

    /// List the perfect numbers in [BEGIN, END].
    Perfect {
        /// Start of the range (inclusive).
        #[arg(allow_negative_numbers = true)]
        begin: i32,

        /// End of the range (inclusive).
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },

    /// Check whether a number is perfect.
    IsPerfect {
        /// Number to test.
        #[arg(allow_negative_numbers = true)]
        number: i32,
    },

    /// Time fast doubling against iteration for every n in 1..=MAX_N.
    Evaluate {
        /// Largest index to evaluate.
        #[arg(long, default_value = "450")]
        max_n: u64,

        /// Timed runs per algorithm and index.
        #[arg(long, default_value = "1")]
        repetitions: u32,

        /// Also time the recursive reference (small n only).
        #[arg(long)]
        recursive: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Re-derive the dispatch threshold on this machine.
    Calibrate {
        /// Shorter, noisier calibration.
        #[arg(long)]
        quick: bool,

        /// Print the profile as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Resolve `--algo` and `--threshold` into core types.
pub fn fib_settings(algo: &str, threshold: u64) -> Result<(Algorithm, Options), NumError> {
    let algorithm = algo.parse::<Algorithm>()?;
    Ok((algorithm, Options::with_threshold(threshold).normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("numseq").chain(args.iter().copied()))
    }

    #[test]
    fn parse_fib_defaults() {
        let config = parse(&["fib", "100"]).unwrap();
        assert!(!config.verbose);
        assert_eq!(
            config.command,
            Command::Fib {
                n: 100,
                algo: "auto".into(),
                threshold: 0
            }
        );
    }

    #[test]
    fn parse_negative_values() {
        let config = parse(&["fib", "-5"]).unwrap();
        assert!(matches!(config.command, Command::Fib { n: -5, .. }));

        let config = parse(&["perfect", "-2147483648", "2147483647"]).unwrap();
        assert_eq!(
            config.command,
            Command::Perfect {
                begin: i32::MIN,
                end: i32::MAX
            }
        );
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let config = parse(&["is-perfect", "28", "-q"]).unwrap();
        assert!(config.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(parse(&["fib", "10", "-q", "-v"]).is_err());
    }

    #[test]
    fn parse_evaluate() {
        let config = parse(&["evaluate", "--max-n", "20", "--recursive"]).unwrap();
        assert_eq!(
            config.command,
            Command::Evaluate {
                max_n: 20,
                repetitions: 1,
                recursive: true,
                json: false
            }
        );
    }

    #[test]
    fn fib_settings_resolve() {
        let (algo, opts) = fib_settings("fast", 0).unwrap();
        assert_eq!(algo, Algorithm::FastDoubling);
        assert_eq!(opts.doubling_threshold, 440);

        let (_, opts) = fib_settings("auto", 100).unwrap();
        assert_eq!(opts.doubling_threshold, 100);

        assert!(matches!(fib_settings("matrix", 0), Err(NumError::Config(_))));
    }
}
