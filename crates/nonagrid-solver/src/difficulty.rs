use std::fmt::{self, Display};

use crate::technique::{self, BoxedTechnique};

/// Difficulty tier of a puzzle.
///
/// The tier controls which deduction techniques the solver may use, and the
/// generator additionally matches the accumulated difficulty score against
/// the tier's score band. [`Random`](Self::Random) solves with the full
/// ladder and accepts any score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Solvable with naked and hidden singles alone.
    Easy,
    /// Adds candidate-line (pointing pair) eliminations.
    #[default]
    Medium,
    /// Adds naked and hidden pair eliminations.
    Hard,
    /// The full ladder with no score filtering.
    Random,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Random];

    /// Returns the technique ladder enabled for this tier, in priority order.
    #[must_use]
    pub fn technique_set(self) -> Vec<BoxedTechnique> {
        match self {
            Self::Easy => technique::single_techniques(),
            Self::Medium => technique::line_techniques(),
            Self::Hard | Self::Random => technique::all_techniques(),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_sets_grow_with_tier() {
        assert_eq!(Difficulty::Easy.technique_set().len(), 2);
        assert_eq!(Difficulty::Medium.technique_set().len(), 3);
        assert_eq!(Difficulty::Hard.technique_set().len(), 5);
        assert_eq!(Difficulty::Random.technique_set().len(), 5);
    }
}
