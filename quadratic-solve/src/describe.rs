//! English descriptions of equation solutions.
//!
//! Rendering follows the measure-then-render pattern: describe into an
//! empty buffer to learn the length `L`, then describe again into a buffer
//! of `L + 1` bytes to get the full, NUL-terminated text. Smaller buffers
//! receive a truncated prefix, and the reported length is always `L`.
//!
//! ```
//! use quadratic_solve::{EquationSolution, describe::{describe, describe_len}};
//!
//! let solution = EquationSolution::one_root(-0.5);
//!
//! let len = describe_len(&solution);
//! let mut buffer = vec![0; len + 1];
//! let description = describe(&solution, &mut buffer);
//!
//! assert_eq!(description.as_str(), "Equation has 1 roots: -0.500000");
//! assert_eq!(description.len(), len);
//! ```

mod description;
mod writer;

pub use description::Description;

use std::fmt::{self, Write};

use quadratic_core::{EquationSolution, RawSolution, SolutionError};

use writer::TruncatingWriter;

/// Fractional digits used for every root.
pub const ROOT_PRECISION: usize = 6;

const NO_SOLUTION: &str = "Equation has no solution";
const INFINITE_ROOTS: &str = "This equation has infinite number of roots";
const ILLEGAL_INPUT: &str = "Solving failed due to illegal input";

/// Describes `solution` into `buffer`.
///
/// Stores as much of the description as fits in `buffer.len() - 1` bytes,
/// followed by a NUL terminator. An empty buffer is left untouched. The
/// returned [`Description`] borrows the stored text and always reports the
/// length of the full description.
pub fn describe<'a>(solution: &EquationSolution, buffer: &'a mut [u8]) -> Description<'a> {
    let mut writer = TruncatingWriter::new(buffer);

    let result = write_description(solution, &mut writer);
    debug_assert!(result.is_ok(), "truncating writer never fails");

    writer.finish()
}

/// Returns the length of the full description without rendering it anywhere.
#[must_use]
pub fn describe_len(solution: &EquationSolution) -> usize {
    let mut buffer: [u8; 0] = [];
    describe(solution, &mut buffer).len()
}

/// Decodes `raw` and describes it into `buffer`.
///
/// # Errors
///
/// Returns an error if `raw` has an unknown status or an impossible root
/// count. Nothing is written to `buffer` in that case.
pub fn describe_raw<'a>(
    raw: &RawSolution,
    buffer: &'a mut [u8],
) -> Result<Description<'a>, SolutionError> {
    let solution = EquationSolution::try_from(raw)?;
    Ok(describe(&solution, buffer))
}

/// Returns the full description as an owned string.
#[must_use]
pub fn describe_to_string(solution: &EquationSolution) -> String {
    let mut text = String::new();
    let result = write_description(solution, &mut text);
    debug_assert!(result.is_ok(), "writing to a String never fails");
    text
}

fn write_description(solution: &EquationSolution, out: &mut impl Write) -> fmt::Result {
    let roots = match solution {
        EquationSolution::IllegalInput => return out.write_str(ILLEGAL_INPUT),
        EquationSolution::InfiniteRoots => return out.write_str(INFINITE_ROOTS),
        EquationSolution::FiniteRoots(roots) if roots.is_empty() => {
            return out.write_str(NO_SOLUTION);
        }
        EquationSolution::FiniteRoots(roots) => roots,
    };

    write!(out, "Equation has {} roots: ", roots.count())?;
    let mut separator = "";
    for &root in roots {
        out.write_str(separator)?;
        write_root(root, out)?;
        separator = ", ";
    }
    Ok(())
}

/// Non-finite roots print as `nan`, `inf` and `-inf`.
fn write_root(root: f64, out: &mut impl Write) -> fmt::Result {
    if root.is_nan() {
        out.write_str("nan")
    } else {
        write!(out, "{:.*}", ROOT_PRECISION, root)
    }
}
