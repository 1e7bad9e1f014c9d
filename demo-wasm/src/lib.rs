use drapery::{
    Cloth, ClothConfig, ClothParameters, CollisionObject, NoOpStepObserver, Orientation, Plane,
    SimulationConfig, Sphere, Vec3,
};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    sim: SimulationConfig<f32>,
    params: ClothParameters<f32>,
    sphere: Sphere<f32>,
    floor: Plane<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// A vertical sheet pinned at both top corners, above a floor and a sphere.
    #[wasm_bindgen(constructor)]
    pub fn new(points: usize, seed: u64) -> Result<ClothDemo, JsError> {
        let points = points.max(2);
        let config = ClothConfig::new()
            .with_points(points, points)
            .with_orientation(Orientation::Vertical)
            .with_pin(0, points - 1)
            .with_pin(points - 1, points - 1)
            .with_seed(seed);
        let cloth = Cloth::new(&config).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(ClothDemo {
            cloth,
            sim: SimulationConfig::new(),
            params: ClothParameters::new(),
            sphere: Sphere::new(Vec3::new(0.5, 0.0, 0.3), 0.25, 0.3),
            floor: Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, 1.0, 0.0), 0.5),
        })
    }

    /// Advance one rendered frame.
    pub fn update(&mut self) {
        let scene = [
            CollisionObject::from(self.floor.clone()),
            CollisionObject::from(self.sphere.clone()),
        ];
        self.cloth
            .advance_frame(&self.sim, &self.params, &scene, &mut NoOpStepObserver);
    }

    pub fn reset(&mut self) {
        self.cloth.reset();
    }

    pub fn move_sphere(&mut self, x: f32, y: f32, z: f32) {
        self.sphere.origin = Vec3::new(x, y, z);
    }

    pub fn set_wind(&mut self, x: f32, z: f32) {
        self.sim = SimulationConfig::new().with_acceleration(Vec3::new(x, 0.0, z));
    }

    pub fn set_constraints(&mut self, structural: bool, shearing: bool, bending: bool) {
        self.params = self
            .params
            .clone()
            .with_structural(structural)
            .with_shearing(shearing)
            .with_bending(bending);
    }

    pub fn set_stiffness(&mut self, ks: f32) {
        self.params.ks = ks;
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major grid order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.cloth.positions();
        let mut out = Vec::with_capacity(pos.len() * 3);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
            out.push(p.z);
        }
        out
    }

    pub fn width_points(&self) -> usize {
        self.cloth.num_width_points()
    }
    pub fn height_points(&self) -> usize {
        self.cloth.num_height_points()
    }
}
