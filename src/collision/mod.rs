//! Rigid collision primitives that correct penetrating point masses.
//!
//! Every primitive implements [`Collider`]. [`CollisionObject`] closes over the
//! shipped primitives so a scene can hold a mixed list without trait objects;
//! callers with their own shapes can implement `Collider` directly.

mod plane;
mod sphere;

pub use plane::{Plane, SURFACE_OFFSET};
pub use sphere::Sphere;

use crate::float::Float;
use crate::point_mass::PointMass;

/// Resolve penetration of a single point mass, in place.
///
/// Implementations derive the correction from `last_position` and the
/// tentative `position`, and scale it by `1 - friction`.
pub trait Collider<F: Float> {
    fn collide(&self, pm: &mut PointMass<F>);
}

/// The collision primitives shipped with the crate.
#[derive(Clone, Debug, PartialEq)]
pub enum CollisionObject<F: Float> {
    Plane(Plane<F>),
    Sphere(Sphere<F>),
}

impl<F: Float> Collider<F> for CollisionObject<F> {
    fn collide(&self, pm: &mut PointMass<F>) {
        match self {
            CollisionObject::Plane(p) => p.collide(pm),
            CollisionObject::Sphere(s) => s.collide(pm),
        }
    }
}

impl<F: Float> From<Plane<F>> for CollisionObject<F> {
    fn from(plane: Plane<F>) -> Self {
        CollisionObject::Plane(plane)
    }
}

impl<F: Float> From<Sphere<F>> for CollisionObject<F> {
    fn from(sphere: Sphere<F>) -> Self {
        CollisionObject::Sphere(sphere)
    }
}

impl<F: Float, C: Collider<F> + ?Sized> Collider<F> for &C {
    fn collide(&self, pm: &mut PointMass<F>) {
        (**self).collide(pm)
    }
}
