//! Sensor signals delivered to the agent each turn.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The five boolean sensors
///
/// `stench`, `breeze`, and `glitter` are read off the agent's current
/// tile; `bump` and `scream` are transient and describe only the
/// immediately preceding action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percepts {
    pub stench: bool,
    pub breeze: bool,
    pub glitter: bool,
    pub bump: bool,
    pub scream: bool,
}

impl fmt::Display for Percepts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.stench {
            names.push("Stench");
        }
        if self.breeze {
            names.push("Breeze");
        }
        if self.glitter {
            names.push("Glitter");
        }
        if self.bump {
            names.push("Bump");
        }
        if self.scream {
            names.push("Scream");
        }
        write!(f, "Percepts: {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_active_sensors() {
        let p = Percepts {
            stench: true,
            breeze: true,
            ..Default::default()
        };
        assert_eq!(p.to_string(), "Percepts: Stench, Breeze");
        assert_eq!(Percepts::default().to_string(), "Percepts: ");
    }
}
