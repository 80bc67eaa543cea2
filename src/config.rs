//=========================================================================
// Command-Line Configuration
//=========================================================================
//
// RawConfig is what clap parses; clean() turns it into a Config the
// binary can use without further checks.
//
//=========================================================================

//=== External Dependencies ===============================================

use clap::Parser;
use log::warn;

//=== Defaults ============================================================

pub const DEFAULT_TPS: f64 = 60.0;
pub const DEFAULT_SCALE: u32 = 1;
pub const DEFAULT_HEADLESS_TICKS: u64 = 600;

const MAX_SCALE: u32 = 8;
const MIN_TPS: f64 = 1.0;
const MAX_TPS: f64 = 1000.0;

//=== RawConfig ===========================================================

#[derive(Parser, Debug)]
#[command(version, about = "Collect the stars, dodge the bombs", long_about = None)]
pub struct RawConfig {
    /// Logic ticks per second
    #[arg(long, default_value_t = DEFAULT_TPS)]
    tps: f64,

    /// Window scale factor
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// RNG seed for star bounce and bomb placement
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window and print the final score
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = DEFAULT_HEADLESS_TICKS)]
    ticks: u64,
}

//=== Config ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tps: f64,
    pub scale: u32,
    pub seed: Option<u64>,
    pub headless: bool,
    pub ticks: u64,
}

impl RawConfig {
    /// Replaces out-of-range values with defaults, warning about each.
    pub fn clean(self) -> Config {
        let tps = if (MIN_TPS..=MAX_TPS).contains(&self.tps) {
            self.tps
        } else {
            warn!(
                "TPS {} outside {}..={}, using {}",
                self.tps, MIN_TPS, MAX_TPS, DEFAULT_TPS
            );
            DEFAULT_TPS
        };

        let scale = match self.scale {
            0 => {
                warn!("Scale must be at least 1, using {}", DEFAULT_SCALE);
                DEFAULT_SCALE
            }
            s if s > MAX_SCALE => {
                warn!("Scale {} too large, clamping to {}", s, MAX_SCALE);
                MAX_SCALE
            }
            s => s,
        };

        Config {
            tps,
            scale,
            seed: self.seed,
            headless: self.headless,
            ticks: self.ticks,
        }
    }
}

impl Default for Config {
    /// Same as running with no arguments.
    fn default() -> Self {
        RawConfig::parse_from(std::iter::empty::<&str>()).clean()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("star-catcher").chain(args.iter().copied());
        RawConfig::try_parse_from(argv)
            .expect("arguments should parse")
            .clean()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tps, 60.0);
        assert_eq!(config.scale, 1);
        assert_eq!(config.seed, None);
        assert!(!config.headless);
        assert_eq!(config.ticks, 600);
    }

    #[test]
    fn all_flags() {
        let config = parse(&["--tps", "120", "-s", "2", "--seed", "7", "--headless", "--ticks", "90"]);
        assert_eq!(
            config,
            Config {
                tps: 120.0,
                scale: 2,
                seed: Some(7),
                headless: true,
                ticks: 90,
            }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = parse(&["--tps", "0", "--scale", "0"]);
        assert_eq!(config.tps, DEFAULT_TPS);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn out_of_range_tps_falls_back() {
        assert_eq!(parse(&["--tps", "1e-30"]).tps, DEFAULT_TPS);
        assert_eq!(parse(&["--tps", "0.5"]).tps, DEFAULT_TPS);
        assert_eq!(parse(&["--tps", "5000"]).tps, DEFAULT_TPS);
        assert_eq!(parse(&["--tps", "NaN"]).tps, DEFAULT_TPS);
    }

    #[test]
    fn tps_range_edges_are_kept() {
        assert_eq!(parse(&["--tps", "1"]).tps, MIN_TPS);
        assert_eq!(parse(&["--tps", "1000"]).tps, MAX_TPS);
    }

    #[test]
    fn huge_scale_is_clamped() {
        assert_eq!(parse(&["--scale", "40"]).scale, MAX_SCALE);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let argv = ["star-catcher", "--fullscreen"];
        assert!(RawConfig::try_parse_from(argv).is_err());
    }
}
