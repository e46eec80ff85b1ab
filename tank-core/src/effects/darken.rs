use rayon::prelude::*;

use crate::foundation::core::{GrayMatrix, Role};

/// Halve `v` and, for the top layer, lift it into the upper half of the range.
///
/// Top results are in `128..=255`, bottom results in `0..=127`.
pub fn darken_value(v: u8, role: Role) -> u8 {
    let half = v >> 1;
    match role {
        Role::Top => half + 128,
        Role::Bottom => half,
    }
}

/// Apply [`darken_value`] to every cell of `matrix`.
pub fn darken(matrix: &mut GrayMatrix, role: Role) {
    for v in matrix.as_raw_mut() {
        *v = darken_value(*v, role);
    }
}

/// Row-parallel [`darken`]; runs on the current rayon pool.
pub fn darken_parallel(matrix: &mut GrayMatrix, role: Role) {
    let width = matrix.width() as usize;
    matrix
        .as_raw_mut()
        .par_chunks_mut(width)
        .for_each(|row| {
            for v in row {
                *v = darken_value(*v, role);
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/effects/darken.rs"]
mod tests;
