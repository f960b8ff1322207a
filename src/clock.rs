use std::ops;
use std::time::Duration;

use instant::Instant;
use serde::{Deserialize, Serialize};


// Time since game start. The engine never reads the wall clock itself: callers pass the
// current instant in, which keeps tests deterministic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct GameInstant {
    elapsed_since_start: Duration,
}

impl GameInstant {
    pub const fn game_start() -> Self { GameInstant { elapsed_since_start: Duration::ZERO } }
    pub const fn from_duration(elapsed_since_start: Duration) -> Self {
        GameInstant { elapsed_since_start }
    }
    pub fn from_millis(ms: u64) -> Self { Self::from_duration(Duration::from_millis(ms)) }

    // Maps a wall-clock instant onto game time. Instants before `game_start` clamp to zero.
    pub fn from_instant(game_start: Instant, now: Instant) -> Self {
        Self::from_duration(now.saturating_duration_since(game_start))
    }

    pub fn elapsed_since_start(self) -> Duration { self.elapsed_since_start }

    pub fn duration_until(self, later: GameInstant) -> Duration {
        later.elapsed_since_start.saturating_sub(self.elapsed_since_start)
    }
}

impl ops::Add<Duration> for GameInstant {
    type Output = Self;
    fn add(self, other: Duration) -> Self {
        GameInstant { elapsed_since_start: self.elapsed_since_start + other }
    }
}
