//! Trail: Recent Voltage Points of an Oscillator
//!
//! A bounded FIFO of output points, oldest first. Consumers plot or
//! dump it; the extent gives a quick empirical range of what was seen.

use std::collections::VecDeque;

use ndarray::{Array2, Axis};

use crate::attractors::{AxisRange, CalibrationRange};

/// Default number of retained points
pub const DEFAULT_TRAIL_LENGTH: usize = 8000;

/// Bounded history of (x, y, z) points
#[derive(Debug, Clone)]
pub struct Trail {
    /// Maximum number of points kept
    capacity: usize,
    /// Points, oldest first
    points: VecDeque<[f64; 3]>,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a point, dropping the oldest when full
    pub fn push(&mut self, point: [f64; 3]) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<[f64; 3]> {
        self.points.back().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64; 3]> {
        self.points.iter()
    }

    /// Points as an [n, 3] array
    pub fn to_array(&self) -> Array2<f64> {
        let n = self.points.len();
        let mut arr = Array2::zeros((n, 3));

        for (i, p) in self.points.iter().enumerate() {
            arr[[i, 0]] = p[0];
            arr[[i, 1]] = p[1];
            arr[[i, 2]] = p[2];
        }

        arr
    }

    /// Per-axis min/max of the recorded points
    pub fn extent(&self) -> Option<CalibrationRange> {
        if self.points.is_empty() {
            return None;
        }

        let arr = self.to_array();
        let mins = arr.fold_axis(Axis(0), f64::INFINITY, |&a, &b| a.min(b));
        let maxs = arr.fold_axis(Axis(0), f64::NEG_INFINITY, |&a, &b| a.max(b));

        Some(CalibrationRange {
            x: AxisRange::new(mins[0], maxs[0]),
            y: AxisRange::new(mins[1], maxs[1]),
            z: AxisRange::new(mins[2], maxs[2]),
        })
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_bounded() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push([i as f64, 0.0, 0.0]);
        }
        assert_eq!(trail.len(), trail.capacity());
        let xs: Vec<f64> = trail.iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.latest(), Some([4.0, 0.0, 0.0]));
    }

    #[test]
    fn test_trail_to_array() {
        let mut trail = Trail::new(10);
        trail.push([1.0, 2.0, 3.0]);
        trail.push([4.0, 5.0, 6.0]);

        let arr = trail.to_array();
        assert_eq!(arr.dim(), (2, 3));
        assert_eq!(arr[[1, 2]], 6.0);
        assert_eq!(arr[[0, 1]], 2.0);
    }

    #[test]
    fn test_trail_extent() {
        let mut trail = Trail::default();
        assert!(trail.extent().is_none());

        trail.push([1.0, -2.0, 0.5]);
        trail.push([-1.0, 3.0, 0.25]);
        trail.push([0.0, 0.0, 4.0]);

        let ext = trail.extent().unwrap();
        assert_eq!(ext.x, AxisRange::new(-1.0, 1.0));
        assert_eq!(ext.y, AxisRange::new(-2.0, 3.0));
        assert_eq!(ext.z, AxisRange::new(0.25, 4.0));
    }

    #[test]
    fn test_trail_zero_capacity_keeps_one() {
        let mut trail = Trail::new(0);
        assert_eq!(trail.capacity(), 1);
        trail.push([1.0, 1.0, 1.0]);
        trail.push([2.0, 2.0, 2.0]);
        assert_eq!(trail.len(), 1);
        trail.clear();
        assert!(trail.is_empty());
    }
}
