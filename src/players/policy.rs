use crate::dice::Roll;

/// Fixed, stateless heuristics over the current roll. No learning, no
/// history: each policy is a pure function from the offered roll to a
/// decision. Returning None banks; returning a keep continues rerolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// keep the trimmed roll and continue while it has at least 2 dice
    RerollWithTwo,
    /// keep the trimmed roll and continue while it has at least 3 dice
    RerollWithThree,
    /// keep the trimmed roll and continue while it has at least 4 dice
    RerollWithFour,
    /// with 3+ dice on the table keep only the 1s, otherwise keep the
    /// trimmed roll. keeping zero 1s is left for the engine to reject.
    TakeOnes,
}

impl Policy {
    pub fn choose(&self, roll: &Roll) -> Option<Roll> {
        match self {
            Self::RerollWithTwo => Self::threshold(roll, 2),
            Self::RerollWithThree => Self::threshold(roll, 3),
            Self::RerollWithFour => Self::threshold(roll, 4),
            Self::TakeOnes => match roll.size() >= 3 {
                true => Some(Roll::from(vec![1; roll.count(1)])),
                false => Some(roll.trim()),
            },
        }
    }

    fn threshold(roll: &Roll, n: usize) -> Option<Roll> {
        let keep = roll.trim();
        match keep.size() >= n {
            true => Some(keep),
            false => None,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RerollWithTwo => write!(f, "RerollWithTwo"),
            Self::RerollWithThree => write!(f, "RerollWithThree"),
            Self::RerollWithFour => write!(f, "RerollWithFour"),
            Self::TakeOnes => write!(f, "TakeOnes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_bank_small_keeps() {
        let roll = Roll::from(vec![1, 5, 2, 3, 4, 6]); // trim is {1, 5}
        assert!(Policy::RerollWithTwo.choose(&roll) == Some(Roll::from(vec![1, 5])));
        assert!(Policy::RerollWithThree.choose(&roll) == None);
        assert!(Policy::RerollWithFour.choose(&roll) == None);
    }

    #[test]
    fn thresholds_continue_on_big_keeps() {
        let roll = Roll::from(vec![1, 1, 1, 5, 2, 3]); // trim is {1, 1, 1, 5}
        assert!(Policy::RerollWithFour.choose(&roll) == Some(Roll::from(vec![1, 1, 1, 5])));
    }

    #[test]
    fn take_ones_keeps_only_ones() {
        let roll = Roll::from(vec![1, 1, 2, 3, 4, 6]);
        assert!(Policy::TakeOnes.choose(&roll) == Some(Roll::from(vec![1, 1])));
    }

    #[test]
    fn take_ones_falls_back_to_trim() {
        let roll = Roll::from(vec![5, 5]);
        assert!(Policy::TakeOnes.choose(&roll) == Some(Roll::from(vec![5, 5])));
    }

    #[test]
    fn take_ones_with_no_ones_is_an_empty_keep() {
        // the turn engine resolves this as a violation and auto-banks
        let roll = Roll::from(vec![2, 2, 3, 4, 6, 6]);
        assert!(Policy::TakeOnes.choose(&roll) == Some(Roll::empty()));
    }
}
