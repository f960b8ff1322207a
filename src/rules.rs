use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::force::Force;


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    // The side driven by the presentation layer. The other side is played by the engine.
    pub human_force: Force,
    // Pause between an accepted human move and the engine's reply, so that the human move
    // gets rendered first. Part of the ruleset, not a user setting.
    pub opponent_reply_delay: Duration,
}

impl Rules {
    pub fn classic() -> Self {
        Self {
            human_force: Force::Black,
            opponent_reply_delay: Duration::from_millis(500),
        }
    }

    pub fn opponent_force(&self) -> Force { self.human_force.opponent() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let rules = Rules::classic();
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(serde_json::from_str::<Rules>(&json).unwrap(), rules);
        assert_eq!(rules.opponent_force(), Force::White);
    }
}
