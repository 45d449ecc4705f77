//! Difficulty classification policy.
//!
//! The accumulated solve score of a reduced puzzle is mapped onto the three
//! named tiers: scores below 200 are easy, scores from 200 up to but not
//! including 400 are medium, and anything from 400 up is hard. The random
//! tier accepts every score.

use nonagrid_solver::Difficulty;

/// Classifies a difficulty score into a named tier.
///
/// Never returns [`Difficulty::Random`].
#[must_use]
pub fn classify(score: u32) -> Difficulty {
    match score {
        0..200 => Difficulty::Easy,
        200..400 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Returns `true` if a score falls into the band of the requested tier.
#[must_use]
pub fn matches_band(difficulty: Difficulty, score: u32) -> bool {
    match difficulty {
        Difficulty::Random => true,
        _ => classify(score) == difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(0), Difficulty::Easy);
        assert_eq!(classify(199), Difficulty::Easy);
        assert_eq!(classify(200), Difficulty::Medium);
        assert_eq!(classify(399), Difficulty::Medium);
        assert_eq!(classify(400), Difficulty::Hard);
        assert_eq!(classify(u32::MAX), Difficulty::Hard);
    }

    #[test]
    fn test_random_accepts_everything() {
        for score in [0, 199, 200, 400, 10_000] {
            assert!(matches_band(Difficulty::Random, score));
        }
    }

    #[test]
    fn test_named_tiers_filter() {
        assert!(matches_band(Difficulty::Easy, 10));
        assert!(!matches_band(Difficulty::Easy, 250));
        assert!(matches_band(Difficulty::Medium, 250));
        assert!(!matches_band(Difficulty::Medium, 450));
        assert!(matches_band(Difficulty::Hard, 450));
        assert!(!matches_band(Difficulty::Hard, 250));
    }
}
