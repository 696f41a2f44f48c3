//! Win/draw/loss tallies per game. Storage is left to the caller through [StatsStore].
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::board::{Outcome, Player};
use crate::wdl::{OutcomeWDL, POV, WDL};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameKey {
    Othello,
    Gomoku,
    Xiangqi,
}

impl GameKey {
    /// A stable name, suitable as a storage key.
    pub fn name(self) -> &'static str {
        match self {
            GameKey::Othello => "othello",
            GameKey::Gomoku => "gomoku",
            GameKey::Xiangqi => "xiangqi",
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GameStats {
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl GameStats {
    /// Count one finished game with `outcome`, seen from `pov`.
    pub fn record(&mut self, outcome: Outcome, pov: Player) {
        self.played += 1;
        match outcome.pov(pov) {
            OutcomeWDL::Win => self.wins += 1,
            OutcomeWDL::Draw => self.draws += 1,
            OutcomeWDL::Loss => self.losses += 1,
        }
    }

    pub fn wdl(&self) -> WDL<u32> {
        WDL::new(self.wins, self.draws, self.losses)
    }
}

impl Display for GameStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "played {}: {} wins, {} draws, {} losses",
            self.played, self.wins, self.draws, self.losses
        )
    }
}

pub trait StatsStore {
    /// The stats for `key`, all zero if nothing was saved yet.
    fn get_stats(&self, key: GameKey) -> GameStats;

    fn save_stats(&mut self, key: GameKey, stats: GameStats);

    /// Load, record one outcome and save again, returning the new stats.
    fn record(&mut self, key: GameKey, outcome: Outcome, pov: Player) -> GameStats {
        let mut stats = self.get_stats(key);
        stats.record(outcome, pov);
        self.save_stats(key, stats);
        stats
    }
}

/// A [StatsStore] that lives as long as the value itself.
#[derive(Debug, Default, Clone)]
pub struct MemoryStatsStore {
    stats: HashMap<GameKey, GameStats>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStatsStore {
    fn get_stats(&self, key: GameKey) -> GameStats {
        self.stats.get(&key).copied().unwrap_or_default()
    }

    fn save_stats(&mut self, key: GameKey, stats: GameStats) {
        self.stats.insert(key, stats);
    }
}
