use super::math::{Ray, Vec3};

/// Pinhole camera with a fixed orientation, looking toward the z axis.
pub struct Camera {
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    position: Vec3,
    zoom: f64,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            up: Vec3::y_axis(),
            forward: Vec3::z_axis(),
            right: Vec3::x_axis(),
            position,
            zoom: 1.0,
        }
    }

    /// Create a ray from the camera position to the relative uv coordinate on his screen.
    /// `u` grows to the right and `v` grows upward, both in [-1, 1].
    pub fn shoot_to(&self, u: f64, v: f64) -> Ray {
        let direction = self.forward * self.zoom + self.up * v + self.right * u;
        Ray::new(self.position, direction)
    }
}

/// Maps the center of pixel `(x, y)` to screen coordinates in [-1, 1].
/// Row 0 is the top of the image.
pub fn pixel_to_screen(x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
    let u = 2.0 * (x as f64 + 0.5) / width as f64 - 1.0;
    let v = 1.0 - 2.0 * (y as f64 + 0.5) / height as f64;
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_looks_forward() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -3.0));
        let ray = camera.shoot_to(0.0, 0.0);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(ray.direction, Vec3::z_axis());
    }

    #[test]
    fn corner_rays_are_normalized() {
        let camera = Camera::new(Vec3::zero());
        let ray = camera.shoot_to(1.0, -1.0);
        assert!((ray.direction.len() - 1.0).abs() < 1e-12);
        assert!(ray.direction.x > 0.0 && ray.direction.y < 0.0);
    }

    #[test]
    fn top_left_pixel_maps_to_upper_left() {
        let (u, v) = pixel_to_screen(0, 0, 4, 2);
        assert_eq!((u, v), (-0.75, 0.5));
        let (u, v) = pixel_to_screen(3, 1, 4, 2);
        assert_eq!((u, v), (0.75, -0.5));
    }
}
