use std::vec::Vec;

use super::error::GeometryError;
use super::math::{Ray, Vec3};

/// Minimum ray parameter accepted as a hit, keeps a ray from re-hitting the
/// surface it was spawned from.
pub const SELF_INTERSECTION_EPSILON: f64 = 1e-4;
/// Below this `|n·d|` a ray is considered parallel to a plane.
pub const PARALLEL_THRESHOLD: f64 = 1e-6;
/// Number of mirror bounces followed before the reflected color turns black.
pub const MAX_DEPTH: u32 = 3;

pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
}

#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub reflectivity: f64,
}

#[derive(Debug)]
pub struct SceneObject {
    pub solid: Solid,
    pub material: Material,
    /// Whether the object takes part in the shadow ray test.
    pub casts_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Sphere { center: Vec3, radius: f64 },
    /// Points `p` with `normal·p = distance`, `normal` is unit length.
    Plane { normal: Vec3, distance: f64 },
}

/// Geometric part of an intersection, before the material is attached.
#[derive(Clone, Copy, Debug)]
pub struct HitResult {
    pub t: f64,
    pub normal: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub t: f64,
    pub position: Vec3,
    pub normal: Vec3,
    pub material: &'a Material,
}

impl Light {
    /// A unit-intensity white light.
    pub fn new(position: Vec3) -> Self {
        Self::with_intensity(position, Vec3::one())
    }

    pub fn with_intensity(position: Vec3, intensity: Vec3) -> Self {
        Light {
            position,
            intensity,
        }
    }
}

impl Material {
    pub fn diffuse(color: Vec3) -> Material {
        Material {
            color,
            reflectivity: 0.0,
        }
    }

    pub fn reflective(color: Vec3, reflectivity: f64) -> Result<Material, GeometryError> {
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(GeometryError::InvalidReflectivity(reflectivity));
        }
        Ok(Material {
            color,
            reflectivity,
        })
    }
}

impl Solid {
    pub fn sphere(center: Vec3, radius: f64) -> Result<Solid, GeometryError> {
        if !(radius > 0.0 && radius.is_finite()) || !center.is_finite() {
            return Err(GeometryError::DegenerateSphere { radius });
        }
        Ok(Solid::Sphere { center, radius })
    }

    /// Creates the plane through `point` facing `normal`.
    pub fn plane(point: Vec3, normal: Vec3) -> Result<Solid, GeometryError> {
        let normal = normal
            .try_normalize()
            .map_err(|_| GeometryError::DegeneratePlane)?;
        if !point.is_finite() {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Solid::Plane {
            normal,
            distance: normal.dot(point),
        })
    }
}

impl SceneObject {
    pub fn new(solid: Solid, material: Material) -> Self {
        SceneObject {
            solid,
            material,
            casts_shadow: true,
        }
    }

    /// Excludes the object from the shadow test, it is still visible.
    pub fn without_shadow(mut self) -> Self {
        self.casts_shadow = false;
        self
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let result = collide(&self.solid, ray)?;
        Some(Hit {
            t: result.t,
            position: ray.at(result.t),
            normal: result.normal,
            material: &self.material,
        })
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

/// Nearest intersection along the ray, the first object in insertion order
/// wins when two of them report the same `t`.
pub fn hit<'a>(scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    for object in &scene.objects {
        if let Some(result) = object.intersect(ray) {
            if closest.map_or(true, |c| result.t < c.t) {
                closest = Some(result);
            }
        }
    }
    closest
}

pub fn collide(solid: &Solid, ray: &Ray) -> Option<HitResult> {
    match solid {
        Solid::Sphere { center, radius } => {
            // with a unit direction the quadratic reduces to t² + 2bt + c = 0
            let oc = ray.origin - *center;
            let b = oc.dot(ray.direction);
            let c = oc.dot(oc) - radius * radius;
            let discriminant = b * b - c;

            // a tangent ray (discriminant == 0) counts as a hit
            if discriminant < 0.0 {
                return None;
            }

            let t = -b - discriminant.sqrt();
            if t <= SELF_INTERSECTION_EPSILON {
                return None;
            }
            let normal = (ray.at(t) - *center).normalize();
            Some(HitResult { t, normal })
        }
        Solid::Plane { normal, distance } => {
            let dv = normal.dot(ray.direction);
            if dv.abs() < PARALLEL_THRESHOLD {
                return None;
            }
            let t = (distance - normal.dot(ray.origin)) / dv;
            if t <= SELF_INTERSECTION_EPSILON {
                return None;
            }
            Some(HitResult { t, normal: *normal })
        }
    }
}
