use crate::dice::Roll;
use crate::Points;

/// One state transition in a game, broadcast to every sink in order:
/// console, transcript, each remote connection. Display produces the exact
/// narration line; game logic never concatenates strings ad hoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// fresh dice hit the table
    Rolled { player: String, roll: Roll },
    /// the roll scored zero and the turn is over
    Farkled { player: String },
    /// the player kept a scoring subset and continues rerolling
    Kept { player: String, keep: Roll, points: Points },
    /// the player stopped and banked the full current roll
    Banked { player: String, keep: Roll, points: Points },
    /// an invalid move, auto-resolved by banking
    Foul { player: String, response: Roll },
    /// the turn total was committed to the player's score
    Awarded { player: String, points: Points, total: Points },
    /// the end-game countdown expired
    Over { turns: usize, rounds: usize },
    /// one line of the final ranking, best first
    Ranked { player: String, points: Points },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rolled { player, roll } => {
                write!(f, "{} rolls {}.", player, roll)
            }
            Self::Farkled { player } => {
                write!(f, "{} farkles.", player)
            }
            Self::Kept { player, keep, points } => {
                write!(f, "{} keeps {} ({} points) and continues.", player, keep, points)
            }
            Self::Banked { player, keep, points } => {
                write!(f, "{} ends turn, keeping {} ({} points).", player, keep, points)
            }
            Self::Foul { player, response } => {
                write!(f, "Bad response from {}: {}.", player, response)
            }
            Self::Awarded { player, points, total } => {
                write!(f, "{} scores {} points for a total of {}.\n", player, points, total)
            }
            Self::Over { turns, rounds } => {
                write!(f, "Game complete in {} turns ({} rounds):\n", turns, rounds)
            }
            Self::Ranked { player, points } => {
                write!(f, "{} scored {}", player, points)
            }
        }
    }
}
