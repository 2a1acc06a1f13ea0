use super::camera::{pixel_to_screen, Camera};
use super::core::Scene;
use super::math::Vec3;
use super::shading::{cast, TraceSettings};

/// Linear RGB colors, stored row by row from the top of the image.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![Vec3::zero(); (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(x + self.width * y) as usize]
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [Vec3])> {
        let width = self.width as usize;
        self.pixels
            .chunks_mut(width.max(1))
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }
}

/// Shade one row of pixels, `row.len()` is the image width.
pub fn render_row(
    scene: &Scene,
    camera: &Camera,
    settings: &TraceSettings,
    y: u32,
    height: u32,
    row: &mut [Vec3],
) {
    let width = row.len() as u32;
    for (x, pixel) in row.iter_mut().enumerate() {
        let (u, v) = pixel_to_screen(x as u32, y, width, height);
        let ray = camera.shoot_to(u, v);
        *pixel = cast(scene, &ray, settings, 0);
    }
}

pub fn render(
    scene: &Scene,
    camera: &Camera,
    settings: &TraceSettings,
    width: u32,
    height: u32,
) -> Framebuffer {
    let mut frame = Framebuffer::new(width, height);
    for (y, row) in frame.rows_mut() {
        render_row(scene, camera, settings, y, height, row);
    }

    let non_finite = frame.pixels.iter().filter(|p| !p.is_finite()).count();
    if non_finite > 0 {
        log::warn!(
            "{} pixels have non-finite colors and will be written as black",
            non_finite
        );
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::scene::{cornell_box, CAMERA_POSITION};
    use rayon::prelude::*;

    #[test]
    fn empty_scene_renders_black() {
        let scene = Scene::new();
        let camera = Camera::new(Vec3::zero());
        let frame = render(&scene, &camera, &TraceSettings::default(), 6, 4);
        assert_eq!(frame.pixels.len(), 24);
        assert!(frame.pixels.iter().all(|p| *p == Vec3::zero()));
    }

    #[test]
    fn side_walls_keep_their_colors() {
        let scene = cornell_box(false).unwrap();
        let camera = Camera::new(CAMERA_POSITION.into());
        let frame = render(&scene, &camera, &TraceSettings::default(), 16, 16);
        // the left wall is red and the right one green
        let left = frame.get(0, 8);
        let right = frame.get(15, 8);
        assert!(left.x > 0.0 && left.y == 0.0);
        assert!(right.y > 0.0 && right.x == 0.0);
    }

    #[test]
    fn shading_rows_in_parallel_matches_sequential() {
        let scene = cornell_box(false).unwrap();
        let camera = Camera::new(CAMERA_POSITION.into());
        let settings = TraceSettings::default();
        let (width, height) = (32, 24);

        let sequential = render(&scene, &camera, &settings, width, height);

        let mut parallel = Framebuffer::new(width, height);
        let rows: Vec<(u32, &mut [Vec3])> = parallel.rows_mut().collect();
        rows.into_par_iter().for_each(|(y, row)| {
            render_row(&scene, &camera, &settings, y, height, row);
        });

        assert_eq!(sequential.pixels, parallel.pixels);
    }
}
