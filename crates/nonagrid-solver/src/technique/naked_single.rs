use nonagrid_core::{Grid, Position};

use crate::{
    SolveStats, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Naked Single";

/// Weight added to the difficulty score per placed digit.
const WEIGHT: u32 = 1;

/// A technique that fills cells whose candidate set has exactly one member.
///
/// Each placement is followed by retracting the placed digit from all peers,
/// which is the solver's constraint propagation mechanism. The sweep repeats
/// until a full pass places nothing, so cascades of singles resolve before
/// control moves to more expensive techniques.
///
/// A cell that is empty but has no candidate left proves the grid
/// unsolvable; the technique reports this as an error rather than leaving
/// the ladder to spin.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, stats: &mut SolveStats) -> Result<bool, SolverError> {
        let mut changed = false;
        loop {
            let mut progressed = false;
            for pos in Position::ALL {
                if !grid.cell(pos).is_empty() {
                    continue;
                }
                let candidates = grid.candidates(pos);
                if candidates.is_empty() {
                    return Err(SolverError::Contradiction { position: pos });
                }
                if let Some(digit) = candidates.as_single() {
                    grid.set_digit(pos, Some(digit));
                    grid.retract_candidate_from_peers(pos, digit);
                    stats.add_score(WEIGHT);
                    progressed = true;
                    changed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        Ok(changed)
    }
}
