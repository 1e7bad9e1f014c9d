//! Mass-spring cloth simulation with Verlet integration.
//!
//! `drapery` is the physics core of an interactive cloth viewer: it builds a grid
//! of point masses joined by springs, advances them with damped Verlet
//! integration, limits spring over-stretch, and resolves collisions against
//! rigid primitives and the cloth itself. Rendering reads positions only.
//!
//! # Features
//!
//! - **Grid builder**: structural, shearing, and bending springs with rest lengths
//!   taken from the build-time layout
//! - **Verlet step**: Hooke spring forces, per-category enable flags, damping
//! - **Stretch limiting**: Provot-style clamp to 110% of rest length per step
//! - **Self-collision**: uniform-grid spatial hash rebuilt every step
//! - **Colliders**: planes and spheres with friction, or any `Collider` impl
//! - **Observable**: monitor step phases via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use drapery::{Cloth, ClothConfig, ClothParameters, CollisionObject, NoOpStepObserver,
//!     SimulationConfig, Sphere, Vec3};
//!
//! let mut cloth: Cloth<f64> = Cloth::new(&ClothConfig::new().with_points(8, 8)).unwrap();
//! let sim = SimulationConfig::new();
//! let params = ClothParameters::new();
//! let scene = [CollisionObject::from(Sphere::new(Vec3::new(0.5, 0.5, 0.5), 0.3, 0.3))];
//! cloth.advance_frame(&sim, &params, &scene, &mut NoOpStepObserver);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point_mass;
pub mod spring;
pub mod config;
pub mod spatial;
pub mod collision;
pub mod cloth;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use point_mass::PointMass;
pub use spring::{Spring, SpringType};
pub use config::{ClothParameters, SimulationConfig};
pub use spatial::SpatialHash;
pub use collision::{Collider, CollisionObject, Plane, Sphere};
pub use cloth::{Cloth, ClothConfig, Orientation};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
