//! Unscrambled Sobol low-discrepancy sequence (Gray-code construction).

use crate::error::EngineError;

use super::constants::{DIRECTION_NUMBERS, MAX_SOBOL_DIMENSIONS, SOBOL_BITS};

const SCALE: f64 = 4_294_967_296.0; // 2^32

/// Stateful Sobol generator over `[0, 1)^d`.
///
/// The first point is the origin, matching the usual unscrambled sequence;
/// callers that do not want it skip ahead with [`SobolSequence::skip`].
#[derive(Clone, Debug)]
pub struct SobolSequence {
    directions: Vec<[u32; SOBOL_BITS]>,
    state: Vec<u32>,
    index: u64,
}

impl SobolSequence {
    pub fn new(dimensions: usize) -> Result<Self, EngineError> {
        if dimensions == 0 || dimensions > MAX_SOBOL_DIMENSIONS {
            return Err(EngineError::config(
                "sobol_dimensions",
                format!("{dimensions} is not in 1..={MAX_SOBOL_DIMENSIONS}"),
            ));
        }
        let directions = (0..dimensions).map(direction_vector).collect();
        Ok(Self {
            directions,
            state: vec![0; dimensions],
            index: 0,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.state.len()
    }

    /// Discards the next `count` points.
    pub fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Returns the current point and moves to the next one.
    pub fn next_point(&mut self) -> Vec<f64> {
        let point = self.state.iter().map(|&x| x as f64 / SCALE).collect();
        self.advance();
        point
    }

    pub fn take_points(&mut self, count: usize) -> Vec<Vec<f64>> {
        (0..count).map(|_| self.next_point()).collect()
    }

    fn advance(&mut self) {
        let bit = (!self.index).trailing_zeros() as usize;
        // The sequence has period 2^32; past that the state is frozen.
        if bit < SOBOL_BITS {
            for (x, v) in self.state.iter_mut().zip(&self.directions) {
                *x ^= v[bit];
            }
        }
        self.index += 1;
    }
}

/// Direction numbers `V_k = m_k * 2^(32-k)` for dimension `dim` (0-based).
fn direction_vector(dim: usize) -> [u32; SOBOL_BITS] {
    let mut v = [0u32; SOBOL_BITS];
    if dim == 0 {
        for (k, slot) in v.iter_mut().enumerate() {
            *slot = 1 << (SOBOL_BITS - 1 - k);
        }
        return v;
    }

    let entry = DIRECTION_NUMBERS[dim - 1];
    let s = entry.degree as usize;
    for k in 0..s {
        v[k] = entry.initial[k] << (SOBOL_BITS - 1 - k);
    }
    for k in s..SOBOL_BITS {
        v[k] = v[k - s] ^ (v[k - s] >> s);
        for l in 1..s {
            if (entry.coefficients >> (s - 1 - l)) & 1 == 1 {
                v[k] ^= v[k - l];
            }
        }
    }
    v
}
