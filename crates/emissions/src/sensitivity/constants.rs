// =============================================================================
// Sobol sequence
// =============================================================================

/// Bits of precision of each generated coordinate.
pub const SOBOL_BITS: usize = 32;

/// Primitive polynomial and initial direction numbers for one dimension.
#[derive(Clone, Copy, Debug)]
pub struct DirectionNumbers {
    /// Polynomial degree `s`.
    pub degree: u32,
    /// Interior coefficients `a` of the polynomial, packed into bits.
    pub coefficients: u32,
    /// Initial direction numbers `m_1..m_s`; only the first `degree` are read.
    pub initial: [u32; 5],
}

/// Joe-Kuo direction numbers for dimensions 2..=12. Dimension 1 is the van
/// der Corput sequence and needs no entry.
#[rustfmt::skip]
pub const DIRECTION_NUMBERS: [DirectionNumbers; 11] = [
    DirectionNumbers { degree: 1, coefficients: 0,  initial: [1, 0, 0, 0, 0] },
    DirectionNumbers { degree: 2, coefficients: 1,  initial: [1, 3, 0, 0, 0] },
    DirectionNumbers { degree: 3, coefficients: 1,  initial: [1, 3, 1, 0, 0] },
    DirectionNumbers { degree: 3, coefficients: 2,  initial: [1, 1, 1, 0, 0] },
    DirectionNumbers { degree: 4, coefficients: 1,  initial: [1, 1, 3, 3, 0] },
    DirectionNumbers { degree: 4, coefficients: 4,  initial: [1, 3, 5, 13, 0] },
    DirectionNumbers { degree: 5, coefficients: 2,  initial: [1, 1, 5, 5, 17] },
    DirectionNumbers { degree: 5, coefficients: 4,  initial: [1, 1, 5, 5, 5] },
    DirectionNumbers { degree: 5, coefficients: 7,  initial: [1, 1, 7, 11, 19] },
    DirectionNumbers { degree: 5, coefficients: 11, initial: [1, 1, 5, 1, 1] },
    DirectionNumbers { degree: 5, coefficients: 13, initial: [1, 1, 1, 3, 11] },
];

/// Highest dimension the generator supports.
pub const MAX_SOBOL_DIMENSIONS: usize = DIRECTION_NUMBERS.len() + 1;

// =============================================================================
// Parameter box
// =============================================================================

pub const MOISTURE_BOUNDS: (f64, f64) = (0.75, 0.90);
pub const TEMPERATURE_BOUNDS: (f64, f64) = (20.0, 35.0);
pub const DOC_BOUNDS: (f64, f64) = (0.70, 0.90);
