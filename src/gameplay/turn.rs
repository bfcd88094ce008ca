use crate::dice::Roll;

/// How one roll segment of a turn resolves, once the player has answered.
/// The farkle check happens before the player is ever asked, so a farkle is
/// not represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// no move: the full current roll is banked and the turn ends
    Bank,
    /// a valid keep: its score accrues and this many dice are rerolled
    Continue(Roll, usize),
    /// an invalid keep: auto-banked like Bank, but flagged as an anomaly
    Foul(Roll),
}

/// Validates a player's answer against the offered roll. Strategies are not
/// trusted: the keep must be a subset of the offer, trimmed, and worth
/// points, or the segment is a foul. Keeping every die rerolls the full
/// pool again (hot dice).
pub fn resolve(roll: &Roll, answer: Option<Roll>) -> Segment {
    match answer {
        None => Segment::Bank,
        Some(keep) => {
            if keep.is_subset_of(roll) && keep.is_trimmed() && keep.score() > 0 {
                let remainder = roll.size() - keep.size();
                match remainder {
                    0 => Segment::Continue(keep, crate::DICE),
                    _ => Segment::Continue(keep, remainder),
                }
            } else {
                Segment::Foul(keep)
            }
        }
    }
}
