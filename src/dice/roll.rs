use crate::Face;
use crate::Points;
use rand::Rng;

/// Roll represents an unordered multiset of die faces. it is immutable once
/// constructed: a fresh roll comes off the dice cup, a kept sub-roll comes off
/// a player's declared subset, and derived rolls come off ::trim(). faces are
/// stored sorted so that equality and Display are order-independent.
///
/// scoring is the classic Farkle table:
/// - three 1s are 1000, each leftover 1 is 100
/// - three 5s are 500, each leftover 5 is 50
/// - three of any other face v is 100 * v, leftovers of those faces are dead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll(Vec<Face>);

impl Roll {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        Self::from(
            (0..n)
                .map(|_| rng.random_range(1..=crate::FACES))
                .collect::<Vec<Face>>(),
        )
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn count(&self, face: Face) -> usize {
        self.0.iter().filter(|&&f| f == face).count()
    }

    /// total points for this multiset. an empty roll scores zero, which the
    /// turn engine reads as a farkle.
    pub fn score(&self) -> Points {
        (1..=crate::FACES)
            .map(|face| (face, self.count(face) as Points))
            .map(|(face, reps)| match face {
                1 => 1000 * (reps / 3) + 100 * (reps % 3),
                5 => 500 * (reps / 3) + 50 * (reps % 3),
                _ => 100 * face as Points * (reps / 3),
            })
            .sum()
    }

    /// a new roll with non-scoring dice omitted. 1s and 5s always survive;
    /// any other face survives only up to the largest multiple of three of
    /// its group, so partial groups of 2/3/4/6 are discarded down to their
    /// complete triples.
    pub fn trim(&self) -> Self {
        let mut dice = Vec::new();
        for face in 1..=crate::FACES {
            let reps = self.count(face);
            let keep = match face {
                1 | 5 => reps,
                _ => reps - reps % 3,
            };
            dice.extend(std::iter::repeat(face).take(keep));
        }
        Self::from(dice)
    }

    /// every die in this roll is necessary for the total score.
    /// vacuously true of the empty roll.
    pub fn is_trimmed(&self) -> bool {
        (1..=crate::FACES)
            .map(|face| (face, self.count(face)))
            .all(|(face, reps)| face == 1 || face == 5 || reps % 3 == 0)
    }

    /// multiset containment, accounting for duplicate counts: two 5s are a
    /// subset of three 5s but not of one 5.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|&face| self.count(face) <= other.count(face))
    }
}

/// Vec<Face> isomorphism (up to permutation, this always comes out sorted)
impl From<Vec<Face>> for Roll {
    fn from(mut dice: Vec<Face>) -> Self {
        dice.sort_unstable();
        Self(dice)
    }
}
impl From<Roll> for Vec<Face> {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

/// renders in bracketed list form, e.g. [1, 2, 5]. this exact rendering is
/// the payload of the outgoing move-request frame, so it is part of the wire
/// contract with remote peers.
impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
