use core::fmt;

/// A blockchain height.
///
/// A height denotes the number of blocks created since the chain began.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Height(u64);

impl Height {
    /// The height of a chain which has not yet produced a block.
    pub const ZERO: Self = Self(0);

    /// Create a new height.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Convert the height to a `u64`.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Increment the height by one.
    pub fn increment(&self) -> Self {
        self.increment_by(1)
    }

    /// Increment the height by the given amount, saturating at `u64::MAX`.
    pub fn increment_by(&self, n: u64) -> Self {
        Self(self.0.saturating_add(n))
    }

    /// Decrement the height by one.
    /// Returns `None` if the height is zero.
    pub fn decrement(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<u64> for Height {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Height({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_decrement() {
        let h = Height::new(1);
        assert_eq!(h.increment(), Height::new(2));
        assert_eq!(h.decrement(), Some(Height::ZERO));
        assert_eq!(Height::ZERO.decrement(), None);
        assert_eq!(Height::new(u64::MAX).increment(), Height::new(u64::MAX));
    }
}
