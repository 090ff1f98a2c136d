//! Red-yellow-green colour scale for rendering the matrix
//!
//! Cells are clipped to [zmin, zmax] and split into thirds.

use super::matrix::CashflowMatrix;
use serde::{Deserialize, Serialize};

/// Band of the red-yellow-green scale a cell falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBand {
    Red,
    Yellow,
    Green,
}

impl ColorBand {
    /// Single character used for plain-text rendering
    pub fn symbol(&self) -> char {
        match self {
            ColorBand::Red => '-',
            ColorBand::Yellow => '~',
            ColorBand::Green => '+',
        }
    }
}

/// Fixed value range of the colour scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapScale {
    pub zmin: f64,
    pub zmax: f64,
}

impl Default for HeatmapScale {
    fn default() -> Self {
        Self {
            zmin: -2500.0,
            zmax: 2500.0,
        }
    }
}

impl HeatmapScale {
    /// Position of `value` on the scale, 0.0 at zmin and 1.0 at zmax
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.zmax - self.zmin;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.zmin) / span).clamp(0.0, 1.0)
    }

    pub fn band(&self, value: f64) -> ColorBand {
        let position = self.normalize(value);
        if position < 1.0 / 3.0 {
            ColorBand::Red
        } else if position < 2.0 / 3.0 {
            ColorBand::Yellow
        } else {
            ColorBand::Green
        }
    }

    /// Band of every cell, same shape as the matrix
    pub fn classify(&self, matrix: &CashflowMatrix) -> Vec<Vec<ColorBand>> {
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|&v| self.band(v)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clips() {
        let scale = HeatmapScale::default();
        assert_eq!(scale.normalize(-2500.0), 0.0);
        assert_eq!(scale.normalize(0.0), 0.5);
        assert_eq!(scale.normalize(2500.0), 1.0);
        assert_eq!(scale.normalize(-10_000.0), 0.0);
        assert_eq!(scale.normalize(10_000.0), 1.0);
    }

    #[test]
    fn test_bands() {
        let scale = HeatmapScale::default();
        assert_eq!(scale.band(-1500.0), ColorBand::Red);
        assert_eq!(scale.band(0.0), ColorBand::Yellow);
        assert_eq!(scale.band(1225.75), ColorBand::Green);
    }

    #[test]
    fn test_classify_shape() {
        let matrix = CashflowMatrix::from_rows(vec![vec![-2000.0, 0.0, 2000.0]]);
        let bands = HeatmapScale::default().classify(&matrix);
        assert_eq!(bands, vec![vec![ColorBand::Red, ColorBand::Yellow, ColorBand::Green]]);
    }
}
