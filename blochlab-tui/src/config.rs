//! Command-line configuration.

use std::path::PathBuf;

use blochlab::{TransitionOptions, MAX_FPG, MAX_SPG};
use clap::Parser;

/// Interactive single-qubit Bloch sphere visualizer.
#[derive(Debug, Clone, Parser)]
#[command(name = "blochlab", version, about)]
pub struct Config {
    /// Animation frames per gate
    #[arg(long, env = "BLOCHLAB_FPG", default_value_t = 100,
          value_parser = clap::value_parser!(u32).range(1..=MAX_FPG as i64))]
    pub fpg: u32,

    /// Animation seconds per gate
    #[arg(long, env = "BLOCHLAB_SPG", default_value_t = 2.0, value_parser = parse_seconds)]
    pub spg: f64,

    /// Leave a trail behind the state vector
    #[arg(long)]
    pub trace: bool,

    /// Show visualization failures in the status line instead of ignoring them
    #[arg(long)]
    pub show_visualization_errors: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn transition_options(&self) -> TransitionOptions {
        TransitionOptions {
            fpg: self.fpg,
            spg: self.spg,
            trace: self.trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let options = TransitionOptions::default();
        Self {
            fpg: options.fpg,
            spg: options.spg,
            trace: options.trace,
            show_visualization_errors: false,
            log_file: None,
        }
    }
}

fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 && value <= MAX_SPG {
        Ok(value)
    } else {
        Err(format!("must be in (0, {MAX_SPG}] seconds, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that read or write `BLOCHLAB_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_match_library() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = Config::try_parse_from(["blochlab"]).unwrap();
        assert_eq!(config.transition_options(), TransitionOptions::default());
        assert!(!config.show_visualization_errors);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "blochlab",
            "--fpg",
            "25",
            "--spg",
            "0.5",
            "--trace",
            "--show-visualization-errors",
        ])
        .unwrap();
        let options = config.transition_options();
        assert_eq!(options.fpg, 25);
        assert_eq!(options.spg, 0.5);
        assert!(options.trace);
        assert!(config.show_visualization_errors);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::try_parse_from(["blochlab", "--fpg", "0"]).is_err());
        assert!(Config::try_parse_from(["blochlab", "--spg", "-1"]).is_err());
        assert!(Config::try_parse_from(["blochlab", "--spg", "abc"]).is_err());
        assert!(Config::try_parse_from(["blochlab", "--fpg", "1001"]).is_err());
    }

    #[test]
    fn test_rejects_huge_spg() {
        assert!(Config::try_parse_from(["blochlab", "--spg", "1e30", "--fpg", "1"]).is_err());
        assert!(Config::try_parse_from(["blochlab", "--spg", "inf"]).is_err());
        let config = Config::try_parse_from(["blochlab", "--spg", "3600", "--fpg", "1"]).unwrap();
        assert_eq!(config.spg, MAX_SPG);
    }

    #[test]
    fn test_log_file() {
        let config = Config::try_parse_from(["blochlab", "--log-file", "/tmp/blochlab.log"]).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/blochlab.log")));
        assert!(Config::try_parse_from(["blochlab"]).unwrap().log_file.is_none());
    }

    #[test]
    fn test_env_fallbacks() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("BLOCHLAB_FPG", "40");
        std::env::set_var("BLOCHLAB_SPG", "0.25");
        let from_env = Config::try_parse_from(["blochlab"]);
        let overridden = Config::try_parse_from(["blochlab", "--fpg", "7"]);
        std::env::remove_var("BLOCHLAB_FPG");
        std::env::remove_var("BLOCHLAB_SPG");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.fpg, 40);
        assert_eq!(from_env.spg, 0.25);
        assert_eq!(overridden.unwrap().fpg, 7);
    }
}
