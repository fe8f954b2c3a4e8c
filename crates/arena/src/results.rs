//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::{MatchConfig, MatchResult};

/// A finished match, with enough context to reproduce it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Which game was played ("abalone" or "martian")
    pub game: String,
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    /// Configuration used
    pub config: MatchConfig,
}

impl MatchRecord {
    pub fn new(
        game: &str,
        engine1: &str,
        engine2: &str,
        result: MatchResult,
        config: MatchConfig,
    ) -> Self {
        Self {
            game: game.to_string(),
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
            config,
        }
    }

    /// Save the record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a record from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== {} match: {} vs {} ===\n",
            self.game, self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}\n",
            self.config.num_games, self.config.depth
        ));
        report.push_str(&format!(
            "Result: {}-{}-{} (Score: {:.1}%)\n",
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Load a match configuration from a TOML file
pub fn load_config(path: &Path) -> Result<MatchConfig, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_runner::MatchConfig;

    #[test]
    fn record_round_trips_through_json() {
        let record = MatchRecord::new(
            "martian",
            "minimax",
            "random",
            MatchResult {
                wins: 7,
                losses: 2,
                draws: 1,
            },
            MatchConfig::default(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.game, "martian");
        assert_eq!(back.result.wins, 7);
        assert_eq!(back.config.num_games, 10);
    }

    #[test]
    fn config_parses_from_toml_with_defaults() {
        let config: MatchConfig = toml::from_str("num_games = 50\ndepth = 2\n").unwrap();
        assert_eq!(config.num_games, 50);
        assert_eq!(config.depth, 2);
        assert!(config.alternate_seats);
    }

    #[test]
    fn report_mentions_the_score() {
        let record = MatchRecord::new(
            "abalone",
            "minimax",
            "random",
            MatchResult {
                wins: 1,
                losses: 0,
                draws: 1,
            },
            MatchConfig::default(),
        );
        let report = record.generate_report();
        assert!(report.contains("abalone"));
        assert!(report.contains("75.0%"));
    }
}
