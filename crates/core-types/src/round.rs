use core::{cmp, fmt};

/// A consensus round within a height.
///
/// Rounds start at 0. [`Round::Nil`] stands for the round before the first one
/// and orders below every other round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    /// No round computed yet, `-1` in signed form
    #[default]
    Nil,

    /// Round `r`
    Some(u32),
}

impl Round {
    /// The first round of a height.
    pub const ZERO: Self = Self::Some(0);

    /// Round `round`.
    pub const fn new(round: u32) -> Self {
        Self::Some(round)
    }

    /// The round as a signed number, [`Round::Nil`] being `-1`.
    pub fn as_i64(&self) -> i64 {
        match self {
            Round::Nil => -1,
            Round::Some(r) => i64::from(*r),
        }
    }

    /// Whether no round was entered.
    pub fn is_nil(&self) -> bool {
        matches!(self, Round::Nil)
    }

    /// The round after this one, saturating at `u32::MAX`.
    pub fn increment(&self) -> Round {
        match self {
            Round::Nil => Round::ZERO,
            Round::Some(r) => Round::new(r.saturating_add(1)),
        }
    }

    /// How many rounds have to be started to go from `self` to `other`,
    /// `None` if `other` comes first.
    ///
    /// ```rust
    /// use polybft_core_types::Round;
    ///
    /// assert_eq!(Round::Nil.distance_to(Round::new(0)), Some(1));
    /// assert_eq!(Round::new(2).distance_to(Round::new(5)), Some(3));
    /// assert_eq!(Round::new(5).distance_to(Round::new(5)), Some(0));
    /// assert_eq!(Round::new(5).distance_to(Round::new(2)), None);
    /// ```
    pub fn distance_to(&self, other: Round) -> Option<u64> {
        u64::try_from(other.as_i64() - self.as_i64()).ok()
    }
}

impl PartialOrd for Round {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Round {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_i64().cmp(&other.as_i64())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_i64().fmt(f)
    }
}
