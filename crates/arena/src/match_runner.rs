//! Match runner for playing games between engines

use games_core::{Engine, Game, Player, Status, Verdict};
use serde::{Deserialize, Serialize};

/// Result of a single game, from the first engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn add(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Hard cap on plies per game, beyond the games' own round caps,
    /// so a broken engine cannot hang the runner
    pub max_plies: u32,
    /// Alternate seats each game; when false, seats are drawn at random
    pub alternate_seats: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_plies: 2000,
            alternate_seats: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines on any game
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines, starting each game from the
    /// position `new_game` produces.
    ///
    /// Returns the result from engine1's perspective.
    pub fn run_match<G, F>(
        &self,
        new_game: F,
        engine1: &mut dyn Engine<G>,
        engine2: &mut dyn Engine<G>,
    ) -> MatchResult
    where
        G: Game + Clone,
        F: Fn() -> G,
    {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = if self.config.alternate_seats {
                game_num % 2 == 0
            } else {
                rand::random::<bool>()
            };

            let game_result = if engine1_first {
                self.play_game(new_game(), engine1, engine2)
            } else {
                // Flip the result since engine1 played the second seat
                match self.play_game(new_game(), engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            result.add(game_result);

            if self.config.verbose {
                let seat = if engine1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; the result is from the first seat's perspective
    /// (the engine moving as Player One).
    fn play_game<G: Game + Clone>(
        &self,
        mut game: G,
        first: &mut dyn Engine<G>,
        second: &mut dyn Engine<G>,
    ) -> GameResult {
        first.new_game();
        second.new_game();

        for _ in 0..self.config.max_plies {
            if let Status::Over(verdict) = game.status() {
                return match verdict {
                    Verdict::Draw => GameResult::Draw,
                    Verdict::Winner(Player::One) => GameResult::Win,
                    Verdict::Winner(Player::Two) => GameResult::Loss,
                };
            }

            let report = if game.player_turn() == Player::One {
                first.search(&game, self.config.depth)
            } else {
                second.search(&game, self.config.depth)
            };

            match report.best_move {
                Some(mv) => game.make_move(mv),
                // No move offered in a live position; call it a draw rather
                // than corrupt the game.
                None => return GameResult::Draw,
            }
        }

        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match<G, F>(
    new_game: F,
    engine1: &mut dyn Engine<G>,
    engine2: &mut dyn Engine<G>,
    num_games: u32,
    depth: u8,
) -> MatchResult
where
    G: Game + Clone,
    F: Fn() -> G,
{
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(new_game, engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_core::abalone::Abalone;
    use games_core::martian::MartianChess;
    use minimax_engine::MinimaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn random_self_play_finishes_every_game() {
        let mut engine1 = RandomEngine::new();
        let mut engine2 = RandomEngine::new();
        let result = quick_match(MartianChess::startpos, &mut engine1, &mut engine2, 2, 1);
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn minimax_plays_abalone_within_the_ply_cap() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = RandomEngine::new();
        let config = MatchConfig {
            num_games: 1,
            depth: 1,
            max_plies: 40,
            verbose: false,
            ..Default::default()
        };
        let result = MatchRunner::new(config).run_match(
            Abalone::startpos,
            &mut engine1,
            &mut engine2,
        );
        assert_eq!(result.total_games(), 1);
    }

    #[test]
    fn match_score_averages_outcomes() {
        let result = MatchResult {
            wins: 2,
            losses: 1,
            draws: 1,
        };
        assert_eq!(result.total_games(), 4);
        assert!((result.score() - 0.625).abs() < 1e-9);
    }
}
