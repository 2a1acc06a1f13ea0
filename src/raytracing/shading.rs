use super::core::{hit, Hit, Light, Scene, MAX_DEPTH, SELF_INTERSECTION_EPSILON};
use super::math::{Ray, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct TraceSettings {
    /// Recursion depth at which reflected rays stop being followed.
    pub max_depth: u32,
    /// When false every occluder along the shadow ray counts, even the ones
    /// farther away than the light.
    pub clip_shadow_rays: bool,
}

impl Default for TraceSettings {
    fn default() -> Self {
        TraceSettings {
            max_depth: MAX_DEPTH,
            clip_shadow_rays: true,
        }
    }
}

/// Color seen along `ray`. Black when nothing is hit.
///
/// Pure function of its arguments: the scene is only read, so it can be
/// called from several threads at once.
pub fn cast(scene: &Scene, ray: &Ray, settings: &TraceSettings, depth: u32) -> Vec3 {
    let Some(result) = hit(scene, ray) else {
        return Vec3::zero();
    };

    let mut color = Vec3::zero();
    for light in &scene.lights {
        color += direct_light(scene, &result, light, settings);
    }

    let material = result.material;
    if material.reflectivity > 0.0 {
        let reflected_color = if depth < settings.max_depth {
            let reflected_ray = Ray::new(
                offset_origin(&result),
                ray.direction.reflect(result.normal),
            );
            cast(scene, &reflected_ray, settings, depth + 1)
        } else {
            Vec3::zero()
        };
        color = color * (1.0 - material.reflectivity) + reflected_color * material.reflectivity;
    }
    color
}

/// Lambert contribution of a single light, zero when the light is occluded.
fn direct_light(scene: &Scene, result: &Hit, light: &Light, settings: &TraceSettings) -> Vec3 {
    let origin = offset_origin(result);
    let to_light = light.position - origin;
    let light_ray = Ray::new(origin, to_light);
    let max_distance = if settings.clip_shadow_rays {
        to_light.len()
    } else {
        f64::INFINITY
    };
    if is_occluded(scene, &light_ray, max_distance) {
        return Vec3::zero();
    }

    let diffuse_effect = result.normal.dot(light_ray.direction).max(0.0);
    result.material.color * light.intensity * diffuse_effect
}

/// Whether any shadow-casting object is hit along the ray before `max_distance`.
pub fn is_occluded(scene: &Scene, ray: &Ray, max_distance: f64) -> bool {
    scene
        .objects
        .iter()
        .filter(|object| object.casts_shadow)
        .filter_map(|object| object.intersect(ray))
        .any(|occluder| occluder.t < max_distance)
}

// move the origin off the surface to avoid shadow acne
fn offset_origin(result: &Hit) -> Vec3 {
    result.position + result.normal * SELF_INTERSECTION_EPSILON
}
