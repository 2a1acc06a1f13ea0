use super::core::{Light, Material, Scene, SceneObject, Solid};
use super::error::GeometryError;
use super::math::Vec3;

/// Where the camera sits to see the whole box.
pub const CAMERA_POSITION: [f64; 3] = [0.0, 0.0, -3.0];

/// The Cornell box: five walls spanning [-1, 1] on every axis (open toward
/// the camera), a mirror sphere and a diffuse sphere on the floor, and a
/// single light under the ceiling.
///
/// With `legacy_planes` the walls are excluded from the shadow test, which
/// reproduces the look of the older renders.
pub fn cornell_box(legacy_planes: bool) -> Result<Scene, GeometryError> {
    let red = Material::diffuse(Vec3::new(1.0, 0.0, 0.0));
    let green = Material::diffuse(Vec3::new(0.0, 1.0, 0.0));
    let gray = Material::diffuse(Vec3::new(0.8, 0.8, 0.8));
    let mirror = Material::reflective(Vec3::one(), 0.6)?;

    let walls = [
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::x_axis(), red),
        (Vec3::new(1.0, 0.0, 0.0), -Vec3::x_axis(), green),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::y_axis(), gray),
        (Vec3::new(0.0, 1.0, 0.0), -Vec3::y_axis(), gray),
        (Vec3::new(0.0, 0.0, 1.0), -Vec3::z_axis(), gray),
    ];

    let mut scene = Scene::new();
    for (point, normal, material) in walls {
        let wall = SceneObject::new(Solid::plane(point, normal)?, material);
        scene.add(if legacy_planes {
            wall.without_shadow()
        } else {
            wall
        });
    }

    scene.add(SceneObject::new(
        Solid::sphere(Vec3::new(0.0, -0.5, 0.3), 0.3)?,
        mirror,
    ));
    scene.add(SceneObject::new(
        Solid::sphere(Vec3::new(0.5, -0.75, 0.6), 0.25)?,
        gray,
    ));

    scene.add_light(Light::new(Vec3::new(0.0, 0.9, -0.2)));

    log::debug!(
        "cornell box with {} objects and {} lights",
        scene.objects.len(),
        scene.lights.len()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::camera::Camera;
    use crate::raytracing::core::hit;

    #[test]
    fn box_is_closed_except_toward_the_camera() {
        let scene = cornell_box(false).unwrap();
        assert_eq!(scene.objects.len(), 7);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.objects.iter().all(|object| object.casts_shadow));

        let camera = Camera::new(CAMERA_POSITION.into());
        for (u, v) in [(0.0, 0.0), (-0.9, 0.9), (0.9, -0.9), (0.5, 0.1)] {
            assert!(hit(&scene, &camera.shoot_to(u, v)).is_some());
        }
    }

    #[test]
    fn legacy_walls_do_not_cast_shadows() {
        let scene = cornell_box(true).unwrap();
        let shadowless = scene
            .objects
            .iter()
            .filter(|object| !object.casts_shadow)
            .count();
        assert_eq!(shadowless, 5);
    }

    #[test]
    fn camera_sees_the_mirror_sphere() {
        let scene = cornell_box(false).unwrap();
        let camera = Camera::new(CAMERA_POSITION.into());
        // straight at the sphere center (0, -0.5, 0.3) from (0, 0, -3)
        let ray = camera.shoot_to(0.0, -0.5 / 3.3);
        let result = hit(&scene, &ray).unwrap();
        assert_eq!(result.material.reflectivity, 0.6);
    }
}
