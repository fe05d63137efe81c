use crate::{EquationSolution, Roots, SolutionError};

/// Status codes of a [`RawSolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    FiniteRoots = 0,
    InfiniteRoots = 1,
    IllegalInput = 2,
}

impl TryFrom<i32> for Status {
    type Error = SolutionError;

    fn try_from(status: i32) -> Result<Self, Self::Error> {
        match status {
            0 => Ok(Self::FiniteRoots),
            1 => Ok(Self::InfiniteRoots),
            2 => Ok(Self::IllegalInput),
            _ => Err(SolutionError::CorruptedStatus { status }),
        }
    }
}

/// Fixed-layout form of an [`EquationSolution`] for foreign boundaries.
///
/// Only the first `number_of_roots` entries of `roots` are meaningful, and
/// only when `status` is [`Status::FiniteRoots`]. Nothing about the layout
/// prevents a caller from handing over an unknown status or an impossible
/// root count, so conversion back into an [`EquationSolution`] is checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct RawSolution {
    pub status: i32,
    pub number_of_roots: i32,
    pub roots: [f64; 2],
}

impl From<&EquationSolution> for RawSolution {
    fn from(solution: &EquationSolution) -> Self {
        let (status, roots) = match solution {
            EquationSolution::IllegalInput => (Status::IllegalInput, Roots::Zero),
            EquationSolution::InfiniteRoots => (Status::InfiniteRoots, Roots::Zero),
            EquationSolution::FiniteRoots(roots) => (Status::FiniteRoots, *roots),
        };

        let mut slots = [0.0; 2];
        slots[..roots.count()].copy_from_slice(roots.as_slice());

        // At most two roots, so the count always fits.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let number_of_roots = roots.count() as i32;

        Self {
            status: status as i32,
            number_of_roots,
            roots: slots,
        }
    }
}

impl From<EquationSolution> for RawSolution {
    fn from(solution: EquationSolution) -> Self {
        Self::from(&solution)
    }
}

impl TryFrom<&RawSolution> for EquationSolution {
    type Error = SolutionError;

    /// Decodes a raw solution.
    ///
    /// The root count is ignored for non-finite statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the status is unknown or a finite solution claims
    /// fewer than zero or more than two roots.
    fn try_from(raw: &RawSolution) -> Result<Self, Self::Error> {
        match Status::try_from(raw.status)? {
            Status::IllegalInput => Ok(Self::IllegalInput),
            Status::InfiniteRoots => Ok(Self::InfiniteRoots),
            Status::FiniteRoots => {
                let [first, second] = raw.roots;
                let roots = match raw.number_of_roots {
                    0 => Roots::Zero,
                    1 => Roots::One([first]),
                    2 => Roots::Two([first, second]),
                    count => return Err(SolutionError::InvalidRootCount { count }),
                };
                Ok(Self::FiniteRoots(roots))
            }
        }
    }
}

impl TryFrom<RawSolution> for EquationSolution {
    type Error = SolutionError;

    fn try_from(raw: RawSolution) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}
