//! Cloth built from a grid of point masses with structural, shearing, and bending springs.

use crate::collision::Collider;
use crate::config::{ClothParameters, SimulationConfig};
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::point_mass::PointMass;
use crate::spatial::SpatialHash;
use crate::spring::{Spring, SpringType};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the out-of-plane jitter given to vertical sheets.
pub const VERTICAL_JITTER: f64 = 0.001;

/// Y coordinate of a horizontal sheet.
pub const HORIZONTAL_SHEET_HEIGHT: f64 = 1.0;

/// Initial layout of the sheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Flat in the X/Z plane at `y = 1`.
    #[default]
    Horizontal,
    /// In the X/Y plane with a small random Z jitter so bending springs are
    /// never perfectly coplanar.
    Vertical,
}

/// Construction parameters for a [`Cloth`].
///
/// # Builder Pattern
/// ```
/// use drapery::{ClothConfig, Orientation};
///
/// let config: ClothConfig<f64> = ClothConfig::new()
///     .with_size(2.0, 1.0)
///     .with_points(16, 8)
///     .with_orientation(Orientation::Vertical)
///     .with_pin(0, 7)
///     .with_pin(15, 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    pub width: F,
    pub height: F,
    pub num_width_points: usize,
    pub num_height_points: usize,
    /// Self-collision radius; point masses closer than twice this are pushed apart.
    pub thickness: F,
    pub orientation: Orientation,
    /// Grid coordinates `(x, y)` of immovable point masses.
    pub pinned: AllocVec<(usize, usize)>,
    /// Seed for the vertical jitter.
    pub seed: u64,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            width: F::one(),
            height: F::one(),
            num_width_points: 20,
            num_height_points: 20,
            thickness: F::from_f64(0.01),
            orientation: Orientation::Horizontal,
            pinned: AllocVec::new(),
            seed: 0,
        }
    }

    /// Physical extents of the sheet.
    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Grid resolution: points along the width and along the height.
    pub fn with_points(mut self, num_width_points: usize, num_height_points: usize) -> Self {
        self.num_width_points = num_width_points;
        self.num_height_points = num_height_points;
        self
    }

    pub fn with_thickness(mut self, thickness: F) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Pin the point mass at grid coordinate `(x, y)`.
    pub fn with_pin(mut self, x: usize, y: usize) -> Self {
        self.pinned.push((x, y));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), ClothError> {
        if self.num_width_points < 2 || self.num_height_points < 2 {
            return Err(ClothError::InvalidGridDimensions {
                num_width_points: self.num_width_points,
                num_height_points: self.num_height_points,
            });
        }
        for value in [self.width, self.height, self.thickness] {
            if !value.is_finite() || value < F::zero() {
                return Err(ClothError::InvalidExtent);
            }
        }
        if let Some(&(x, y)) = self
            .pinned
            .iter()
            .find(|&&(x, y)| x >= self.num_width_points || y >= self.num_height_points)
        {
            return Err(ClothError::PinOutOfBounds { x, y });
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A mass-spring cloth advanced with damped Verlet integration.
///
/// Point mass at grid coordinate `(x, y)` has index `y * num_width_points + x`.
/// Springs refer to point masses by index.
pub struct Cloth<F: Float> {
    width: F,
    height: F,
    num_width_points: usize,
    num_height_points: usize,
    thickness: F,
    orientation: Orientation,
    point_masses: AllocVec<PointMass<F>>,
    springs: AllocVec<Spring<F>>,
    spatial: SpatialHash<F>,
}

impl<F: Float> Cloth<F> {
    /// Build a cloth, drawing vertical jitter from a `StdRng` seeded with `config.seed`.
    ///
    /// `StdRng` does not depend on pointer width, so a seed gives the same sheet
    /// on native and wasm32 builds of the same `rand` release.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Build a cloth drawing vertical jitter from `rng`.
    pub fn with_rng<R: Rng>(config: &ClothConfig<F>, rng: &mut R) -> Result<Self, ClothError> {
        config.validate()?;

        let point_masses = Self::build_point_masses(config, rng);
        let springs = Self::build_springs(config.num_width_points, config.num_height_points, &point_masses);
        let spatial = SpatialHash::new(
            config.width,
            config.height,
            config.num_width_points,
            config.num_height_points,
        );

        log::debug!(
            "built {:?} cloth: {}x{} points, {} springs, {} pinned",
            config.orientation,
            config.num_width_points,
            config.num_height_points,
            springs.len(),
            point_masses.iter().filter(|pm| pm.pinned).count(),
        );

        Ok(Cloth {
            width: config.width,
            height: config.height,
            num_width_points: config.num_width_points,
            num_height_points: config.num_height_points,
            thickness: config.thickness,
            orientation: config.orientation,
            point_masses,
            springs,
            spatial,
        })
    }

    fn build_point_masses<R: Rng>(config: &ClothConfig<F>, rng: &mut R) -> AllocVec<PointMass<F>> {
        let nw = config.num_width_points;
        let nh = config.num_height_points;

        let mut pinned = AllocVec::new();
        pinned.resize(nw * nh, false);
        for &(x, y) in &config.pinned {
            pinned[y * nw + x] = true;
        }

        let x_spacing = config.width / F::from_usize(nw - 1);
        let y_spacing = config.height / F::from_usize(nh - 1);

        let mut point_masses = AllocVec::with_capacity(nw * nh);
        for y in 0..nh {
            for x in 0..nw {
                let u = F::from_usize(x) * x_spacing;
                let v = F::from_usize(y) * y_spacing;
                let position = match config.orientation {
                    Orientation::Horizontal => {
                        Vec3::new(u, F::from_f64(HORIZONTAL_SHEET_HEIGHT), v)
                    }
                    Orientation::Vertical => {
                        let jitter = rng.random_range(-VERTICAL_JITTER..=VERTICAL_JITTER);
                        Vec3::new(u, v, F::from_f64(jitter))
                    }
                };
                point_masses.push(PointMass::new(position, pinned[y * nw + x]));
            }
        }
        point_masses
    }

    /// Connect every point to its "earlier" neighbors only, so each pair gets
    /// exactly one spring:
    /// - Structural: left `(x-1, y)` and above `(x, y-1)`
    /// - Shearing: upper-left `(x-1, y-1)` and upper-right `(x+1, y-1)`
    /// - Bending: two left `(x-2, y)` and two above `(x, y-2)`
    fn build_springs(nw: usize, nh: usize, point_masses: &[PointMass<F>]) -> AllocVec<Spring<F>> {
        let mut springs = AllocVec::with_capacity(Self::expected_spring_count(nw, nh));
        let mut link = |a: usize, b: usize, spring_type: SpringType| {
            springs.push(Spring::from_point_masses(a, b, point_masses, spring_type));
        };

        for y in 0..nh {
            for x in 0..nw {
                let p = y * nw + x;

                if x >= 1 {
                    link(p, p - 1, SpringType::Structural);
                }
                if y >= 1 {
                    link(p, p - nw, SpringType::Structural);
                }

                if x >= 1 && y >= 1 {
                    link(p, p - nw - 1, SpringType::Shearing);
                }
                if x + 1 < nw && y >= 1 {
                    link(p, p - nw + 1, SpringType::Shearing);
                }

                if x >= 2 {
                    link(p, p - 2, SpringType::Bending);
                }
                if y >= 2 {
                    link(p, p - 2 * nw, SpringType::Bending);
                }
            }
        }
        springs
    }

    /// Number of springs a `nw` x `nh` grid produces.
    pub fn expected_spring_count(nw: usize, nh: usize) -> usize {
        let structural = nw.saturating_sub(1) * nh + nw * nh.saturating_sub(1);
        let shearing = 2 * nw.saturating_sub(1) * nh.saturating_sub(1);
        let bending = nw.saturating_sub(2) * nh + nw * nh.saturating_sub(2);
        structural + shearing + bending
    }

    /// Mass of a single point mass: total mass spread evenly over the grid.
    pub fn mass(&self, params: &ClothParameters<F>) -> F {
        self.width * self.height * params.density
            / F::from_usize(self.num_width_points)
            / F::from_usize(self.num_height_points)
    }

    /// Advance the cloth by one simulation step of length `config.delta_t()`.
    ///
    /// Phases, each finished for every point mass before the next starts:
    /// forces, Verlet update, stretch limit, spatial hash rebuild, then per
    /// point mass self-collision followed by each collider in order.
    pub fn simulate<C: Collider<F>, O: StepObserver>(
        &mut self,
        config: &SimulationConfig<F>,
        params: &ClothParameters<F>,
        colliders: &[C],
        observer: &mut O,
    ) {
        let mass = self.mass(params);
        let delta_t = config.delta_t();

        self.accumulate_forces(mass, config.total_acceleration(), params);
        observer.on_forces_accumulated();

        let retain = params.retained_velocity();
        for pm in self.point_masses.iter_mut() {
            pm.integrate(mass, delta_t, retain);
        }
        observer.on_integrate();

        let stretched = self.limit_stretch();
        observer.on_stretch_limited(stretched);

        self.spatial.rebuild(&self.point_masses);
        let cells = self.spatial.cell_count();
        observer.on_spatial_hash_rebuilt(cells);

        let resolved = self.resolve_collisions(config.steps_per_frame, colliders);
        observer.on_self_collisions(resolved);

        log::trace!(
            "step: {} springs limited, {} cells, {} self-collisions",
            stretched,
            cells,
            resolved,
        );
        observer.on_step_complete();
    }

    /// Run `config.steps_per_frame` steps, i.e. one rendered frame.
    pub fn advance_frame<C: Collider<F>, O: StepObserver>(
        &mut self,
        config: &SimulationConfig<F>,
        params: &ClothParameters<F>,
        colliders: &[C],
        observer: &mut O,
    ) {
        for _ in 0..config.steps_per_frame {
            self.simulate(config, params, colliders, observer);
        }
    }

    fn accumulate_forces(&mut self, mass: F, acceleration: Vec3<F>, params: &ClothParameters<F>) {
        let external = acceleration.scale(mass);
        for pm in self.point_masses.iter_mut() {
            pm.forces = external;
        }
        for spring in &self.springs {
            spring.apply_force(&mut self.point_masses, params);
        }
    }

    fn limit_stretch(&mut self) -> usize {
        let mut corrected = 0;
        for spring in &self.springs {
            if spring.limit_stretch(&mut self.point_masses) {
                corrected += 1;
            }
        }
        corrected
    }

    fn resolve_collisions<C: Collider<F>>(&mut self, steps_per_frame: usize, colliders: &[C]) -> usize {
        let mut resolved = 0;
        for index in 0..self.point_masses.len() {
            if self.point_masses[index].pinned {
                continue;
            }
            if let Some(correction) = self.self_collision_correction(index, steps_per_frame) {
                self.point_masses[index].position += correction;
                resolved += 1;
            }
            for collider in colliders {
                collider.collide(&mut self.point_masses[index]);
            }
        }
        resolved
    }

    /// Push-apart displacement for one point mass against the others in its cell.
    ///
    /// Each neighbor closer than `2 * thickness` contributes the overlap along
    /// the direction away from it. The sum is averaged over contributors and
    /// divided by `steps_per_frame`. `None` if no neighbor overlaps.
    pub fn self_collision_correction(&self, index: usize, steps_per_frame: usize) -> Option<Vec3<F>> {
        let position = self.point_masses[index].position;
        let reach = self.thickness * F::two();

        let mut correction = Vec3::zero();
        let mut count = 0usize;
        for other in self.spatial.neighbors(position) {
            if other == index {
                continue;
            }
            let away = position - self.point_masses[other].position;
            let dist = away.length();
            if dist >= reach {
                continue;
            }
            correction += away.unit().scale(reach - dist);
            count += 1;
        }

        if count == 0 {
            return None;
        }
        Some(correction.scale(F::one() / F::from_usize(count * steps_per_frame)))
    }

    /// Rebuild the spatial hash from current positions.
    pub fn build_spatial_map(&mut self) {
        self.spatial.rebuild(&self.point_masses);
    }

    /// Put every point mass back at its build-time position at rest.
    pub fn reset(&mut self) {
        for pm in self.point_masses.iter_mut() {
            pm.reset();
        }
        log::debug!("reset cloth with {} point masses", self.point_masses.len());
    }

    /// Attach a render-mesh handle to a point mass.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `point_masses().len()`.
    pub fn link_mesh(&mut self, index: usize, handle: usize) {
        self.point_masses[index].mesh_link = Some(handle);
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.num_width_points + x
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn point_mass_at(&self, x: usize, y: usize) -> &PointMass<F> {
        &self.point_masses[self.index(x, y)]
    }

    pub fn point_mass_at_mut(&mut self, x: usize, y: usize) -> &mut PointMass<F> {
        let index = self.index(x, y);
        &mut self.point_masses[index]
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.point_masses.iter().map(|pm| pm.position).collect()
    }

    pub fn spring_count(&self, spring_type: SpringType) -> usize {
        self.springs.iter().filter(|s| s.spring_type == spring_type).count()
    }

    pub fn point_masses(&self) -> &[PointMass<F>] { &self.point_masses }
    pub fn point_masses_mut(&mut self) -> &mut [PointMass<F>] { &mut self.point_masses }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn spatial_hash(&self) -> &SpatialHash<F> { &self.spatial }
    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }
    pub fn num_width_points(&self) -> usize { self.num_width_points }
    pub fn num_height_points(&self) -> usize { self.num_height_points }
    pub fn thickness(&self) -> F { self.thickness }
    pub fn orientation(&self) -> Orientation { self.orientation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClothConfig<f64> {
        ClothConfig::new().with_size(2.0, 1.0).with_points(5, 3)
    }

    #[test]
    fn index_is_row_major() {
        let cloth = Cloth::new(&config()).unwrap();
        assert_eq!(cloth.index(0, 0), 0);
        assert_eq!(cloth.index(4, 0), 4);
        assert_eq!(cloth.index(1, 2), 11);
    }

    #[test]
    fn horizontal_lattice_spacing() {
        let cloth = Cloth::new(&config()).unwrap();
        let corner = cloth.point_mass_at(4, 2).position;
        assert!((corner.x - 2.0).abs() < 1e-12);
        assert!((corner.y - 1.0).abs() < 1e-12);
        assert!((corner.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_single_point_axis() {
        let err = Cloth::new(&config().with_points(1, 4)).err();
        assert_eq!(
            err,
            Some(ClothError::InvalidGridDimensions { num_width_points: 1, num_height_points: 4 })
        );
    }

    #[test]
    fn rejects_pin_outside_grid() {
        let err = Cloth::new(&config().with_pin(5, 0)).err();
        assert_eq!(err, Some(ClothError::PinOutOfBounds { x: 5, y: 0 }));
    }

    #[test]
    fn rejects_non_finite_extent() {
        let err = Cloth::new(&config().with_size(f64::NAN, 1.0)).err();
        assert_eq!(err, Some(ClothError::InvalidExtent));
    }

    #[test]
    fn springs_never_repeat_a_pair() {
        let cloth = Cloth::new(&ClothConfig::<f64>::new().with_points(6, 5)).unwrap();
        let springs = cloth.springs();
        for (i, s) in springs.iter().enumerate() {
            for t in &springs[i + 1..] {
                let same = (s.a == t.a && s.b == t.b) || (s.a == t.b && s.b == t.a);
                assert!(!same, "duplicate spring between {} and {}", s.a, s.b);
            }
        }
    }

    #[test]
    fn mass_spreads_density_evenly() {
        let cloth = Cloth::new(&config()).unwrap();
        let params = ClothParameters::new().with_density(15.0);
        assert!((cloth.mass(&params) - 2.0 * 15.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn link_mesh_sets_handle() {
        let mut cloth = Cloth::new(&config()).unwrap();
        cloth.link_mesh(3, 42);
        assert_eq!(cloth.point_masses()[3].mesh_link, Some(42));
    }

    #[test]
    #[should_panic]
    fn link_mesh_out_of_range_panics() {
        let mut cloth = Cloth::new(&config()).unwrap();
        cloth.link_mesh(15, 0);
    }
}
