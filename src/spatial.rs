//! Uniform-grid spatial hash used to find self-collision candidates.
//!
//! Entries live in one flat `(key, index)` array that is cleared, refilled, and
//! sorted every step. A cell is a contiguous run of that array, so lookups are a
//! binary search and the allocation is reused across steps.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

const X_COEFF: i64 = 157;
const Y_COEFF: i64 = 63;
const Z_COEFF: i64 = 1201;

/// Maps hashed cell keys to the point masses inside them.
///
/// Distinct cells can alias to the same key; that only adds candidates which
/// then fail the distance test.
#[derive(Clone, Debug)]
pub struct SpatialHash<F: Float> {
    cell_width: F,
    cell_height: F,
    cell_depth: F,
    entries: AllocVec<(i64, usize)>,
}

impl<F: Float> SpatialHash<F> {
    /// Cells are three point spacings wide and tall; depth is the larger of the two.
    pub fn new(width: F, height: F, num_width_points: usize, num_height_points: usize) -> Self {
        let (cell_width, cell_height, cell_depth) =
            Self::cell_dimensions(width, height, num_width_points, num_height_points);
        SpatialHash {
            cell_width,
            cell_height,
            cell_depth,
            entries: AllocVec::with_capacity(num_width_points * num_height_points),
        }
    }

    /// `(w, h, t)` with `w = 3 * width / nw`, `h = 3 * height / nh`, `t = max(w, h)`.
    pub fn cell_dimensions(width: F, height: F, num_width_points: usize, num_height_points: usize) -> (F, F, F) {
        let three = F::from_f32(3.0);
        let w = three * width / F::from_usize(num_width_points);
        let h = three * height / F::from_usize(num_height_points);
        (w, h, w.max(h))
    }

    /// Hash a position to the key of the cell containing it.
    pub fn key(&self, position: Vec3<F>) -> i64 {
        let x = cell_coordinate(position.x / self.cell_width);
        let y = cell_coordinate(position.y / self.cell_height);
        let z = cell_coordinate(position.z / self.cell_depth);
        x.wrapping_mul(X_COEFF)
            .wrapping_add(y.wrapping_mul(Y_COEFF))
            .wrapping_add(z.wrapping_mul(Z_COEFF))
    }

    /// Drop all memberships from the previous step.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clear, then insert every point mass by its current position.
    pub fn rebuild(&mut self, point_masses: &[PointMass<F>]) {
        self.clear();
        self.entries.reserve(point_masses.len());
        for (index, pm) in point_masses.iter().enumerate() {
            let key = self.key(pm.position);
            self.entries.push((key, index));
        }
        // Tuples compare by key, then index, so cell order is deterministic.
        self.entries.sort_unstable();
    }

    /// Indices of the point masses in the cell with this key, in ascending order.
    pub fn cell(&self, key: i64) -> impl Iterator<Item = usize> + '_ {
        let start = self.entries.partition_point(|&(k, _)| k < key);
        let end = start + self.entries[start..].partition_point(|&(k, _)| k == key);
        self.entries[start..end].iter().map(|&(_, index)| index)
    }

    /// Candidates sharing the cell of `position`, the querying point mass included.
    pub fn neighbors(&self, position: Vec3<F>) -> impl Iterator<Item = usize> + '_ {
        self.cell(self.key(position))
    }

    /// Number of distinct occupied keys.
    pub fn cell_count(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for &(key, _) in &self.entries {
            if last != Some(key) {
                count += 1;
                last = Some(key);
            }
        }
        count
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Floor of a cell quotient. NaN and infinities map to cell 0.
fn cell_coordinate<F: Float>(quotient: F) -> i64 {
    if quotient.is_finite() {
        quotient.floor().to_f64() as i64
    } else {
        0
    }
}
