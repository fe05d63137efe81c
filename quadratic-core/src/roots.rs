use std::slice;

/// The real roots of an equation of degree at most two.
///
/// Storage is sized by the variant, so there are no unused slots to read.
/// Roots keep the order the solver produced them in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Roots {
    /// No real roots.
    Zero,
    /// Exactly one real root.
    One([f64; 1]),
    /// Exactly two real roots.
    Two([f64; 2]),
}

impl Roots {
    /// Number of roots, always in `0..=2`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// The roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Zero => &[],
            Self::One(roots) => roots,
            Self::Two(roots) => roots,
        }
    }

    /// Iterates over the roots in order.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
