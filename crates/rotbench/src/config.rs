//! Application configuration from CLI flags and environment.

use clap::Parser;

use rotbench_core::error::RotateError;
use rotbench_core::generator::SequenceSource;
use rotbench_orchestration::interfaces::InputSource;
use rotbench_orchestration::options::BenchmarkOptions;

/// rotbench — rotate integer vectors sequentially and in parallel, and report the speedup.
///
/// Size, shift, and thread count are prompted for when not given as flags.
#[derive(Parser, Debug)]
#[command(name = "rotbench", version, about)]
pub struct AppConfig {
    /// Vector size.
    #[arg(short = 'n', long, env = "ROTBENCH_SIZE", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Shift amount; negative values rotate toward lower indices.
    #[arg(short, long, env = "ROTBENCH_SHIFT", allow_negative_numbers = true)]
    pub shift: Option<i64>,

    /// Number of worker threads for the parallel run.
    #[arg(short, long, env = "ROTBENCH_THREADS", allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Seed for reproducible input generation.
    #[arg(long, env = "ROTBENCH_SEED")]
    pub seed: Option<u64>,

    /// Number of leading elements to print.
    #[arg(long, default_value = "10")]
    pub preview: usize,

    /// Cross-check both strategies on identical input.
    #[arg(long)]
    pub verify: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit without waiting for a key press.
    #[arg(long)]
    pub no_wait: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build benchmark options, prompting through `input` for missing values.
    pub fn benchmark_options(
        &self,
        input: &mut dyn InputSource,
    ) -> Result<BenchmarkOptions, RotateError> {
        let options = BenchmarkOptions::resolve(self.size, self.shift, self.threads, input)?;
        Ok(BenchmarkOptions {
            source: SequenceSource::from_seed(self.seed),
            verify: self.verify,
            preview_len: self.preview,
            ..options
        }
        .normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoInput;

    impl InputSource for NoInput {
        fn read_integer(&mut self, field: &str, _default: i64) -> Result<i64, RotateError> {
            panic!("unexpected prompt for {field}");
        }
    }

    #[test]
    fn parse_flags() {
        let config =
            AppConfig::try_parse_from(["rotbench", "-n", "100", "-s", "-3", "-t", "4"]).unwrap();
        assert_eq!(config.size, Some(100));
        assert_eq!(config.shift, Some(-3));
        assert_eq!(config.threads, Some(4));
        assert_eq!(config.preview, 10);
        assert!(!config.json);
    }

    #[test]
    fn negative_threads_parse() {
        let config = AppConfig::try_parse_from(["rotbench", "--threads", "-1"]).unwrap();
        assert_eq!(config.threads, Some(-1));
    }

    #[test]
    fn options_from_flags() {
        let config = AppConfig::try_parse_from([
            "rotbench", "-n", "8", "-s", "2", "-t", "3", "--seed", "11", "--verify", "--preview",
            "0",
        ])
        .unwrap();
        let opts = config.benchmark_options(&mut NoInput).unwrap();
        assert_eq!((opts.size, opts.shift, opts.workers), (8, 2, 3));
        assert_eq!(opts.source, SequenceSource::Seeded(11));
        assert!(opts.verify);
        assert_eq!(opts.preview_len, 10);
    }

    #[test]
    fn rejects_non_integer_size() {
        assert!(AppConfig::try_parse_from(["rotbench", "-n", "big"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
