use crate::Roots;

/// The outcome of solving a linear or quadratic equation.
///
/// All variants are successful outcomes except [`EquationSolution::IllegalInput`],
/// which reports that some coefficient was NaN or infinite. Which coefficient
/// was at fault is not recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum EquationSolution {
    /// At least one coefficient was not finite.
    IllegalInput,
    /// Every real number satisfies the equation (`0 = 0`).
    InfiniteRoots,
    /// The equation has exactly `roots.count()` real solutions.
    FiniteRoots(Roots),
}

impl EquationSolution {
    /// A solution with no real roots.
    pub const NO_ROOTS: Self = Self::FiniteRoots(Roots::Zero);

    /// A solution with a single root.
    #[must_use]
    pub fn one_root(root: f64) -> Self {
        Self::FiniteRoots(Roots::One([root]))
    }

    /// A solution with two roots, kept in the given order.
    #[must_use]
    pub fn two_roots(first: f64, second: f64) -> Self {
        Self::FiniteRoots(Roots::Two([first, second]))
    }

    /// Returns the roots if the solution has finitely many.
    #[must_use]
    pub fn roots(&self) -> Option<&Roots> {
        match self {
            Self::FiniteRoots(roots) => Some(roots),
            Self::IllegalInput | Self::InfiniteRoots => None,
        }
    }
}
