use super::Vec3;

#[derive(Debug, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray with a unit direction.
    /// Shooting a ray without a direction is a programming error.
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        debug_assert!(
            direction.squared_len() > 0.0,
            "ray direction must not be a zero vector"
        );
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(self: &Self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
