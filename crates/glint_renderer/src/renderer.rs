//! Whitted-style direct lighting renderer.
//!
//! One primary ray per pixel, no bounces: each hit is shaded by
//! looping over the scene's lights, with hard shadows cast as bounded
//! any-hit rays. Pixels are independent, so the frame fans out over
//! the rayon thread pool.

use crate::material::Color;
use crate::scene::Scene;
use glint_math::{Mat4, Mat4Ext, Ray, Vec3, RAY_EPSILON};
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// What each light contributes to a shaded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Cosine of the incident angle only
    ObservedArea,
    /// Incoming radiance only
    Radiance,
    /// Material reflectance only
    Brdf,
    /// Radiance x reflectance x cosine
    #[default]
    Combined,
}

impl LightingMode {
    /// The next mode in the debug cycle.
    pub fn cycled(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

/// Render settings carried into every frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
    /// Factor applied to the accumulated color per occluded light
    pub shadow_attenuation: f32,
    /// Color returned for rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            shadow_attenuation: 0.95,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.cycled();
        debug!("lighting mode: {:?}", self.lighting_mode);
    }

    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
        debug!("shadows enabled: {}", self.shadows_enabled);
    }
}

/// Rescale a color so its largest channel is at most one.
///
/// Colors already inside the unit cube pass through unchanged, so
/// channel ratios survive and the mapping is idempotent.
pub fn max_to_one(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// A rendered frame of linear RGB pixels.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(x + y * self.width) as usize]
    }

    /// Quantize to 8-bit RGB, truncating each channel at x255.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            data.push((pixel.x * 255.0) as u8);
            data.push((pixel.y * 255.0) as u8);
            data.push((pixel.z * 255.0) as u8);
        }
        data
    }

    /// Write the frame to disk as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

/// Render one frame. Blocks until every pixel is shaded.
pub fn render(scene: &Scene, config: &RenderConfig, width: u32, height: u32) -> ImageBuffer {
    let aspect_ratio = width as f32 / height as f32;
    let fov_scale = scene.camera.fov_scale();
    let camera_to_world = scene.camera.camera_to_world();
    let camera_origin = scene.camera.origin;

    let mut image = ImageBuffer::new(width, height);
    image
        .pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| {
            let px = index as u32 % width;
            let py = index as u32 / width;
            *pixel = render_pixel(
                scene,
                config,
                px,
                py,
                width,
                height,
                aspect_ratio,
                fov_scale,
                &camera_to_world,
                camera_origin,
            );
        });

    debug!("rendered {}x{} frame", width, height);
    image
}

#[allow(clippy::too_many_arguments)]
fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    px: u32,
    py: u32,
    width: u32,
    height: u32,
    aspect_ratio: f32,
    fov_scale: f32,
    camera_to_world: &Mat4,
    camera_origin: Vec3,
) -> Color {
    // Pixel center in NDC, y flipped so the image is top-down
    let rx = px as f32 + 0.5;
    let ry = py as f32 + 0.5;
    let cx = (2.0 * (rx / width as f32) - 1.0) * aspect_ratio * fov_scale;
    let cy = (1.0 - 2.0 * (ry / height as f32)) * fov_scale;

    let direction = camera_to_world.transform_vector3(Vec3::new(cx, cy, 1.0).normalize());
    let view_ray = Ray::new(camera_origin, direction);

    let hit = scene.get_closest_hit(&view_ray);
    if !hit.did_hit {
        return config.background;
    }

    let mut color = Color::ZERO;
    for light in scene.lights() {
        let (light_direction, light_distance) = light.direction_to(hit.point);
        let lambert = hit.normal.dot(light_direction);

        if lambert > 0.0 {
            match config.lighting_mode {
                LightingMode::ObservedArea => color += Color::splat(lambert),
                LightingMode::Brdf => {
                    color += scene
                        .material(hit.material_index)
                        .shade(&hit, light_direction, -direction);
                }
                LightingMode::Combined => {
                    color += light.radiance(hit.point)
                        * scene
                            .material(hit.material_index)
                            .shade(&hit, light_direction, -direction)
                        * lambert;
                }
                LightingMode::Radiance => {}
            }
        }
        // Radiance visualizes the raw incoming light, even from behind
        if config.lighting_mode == LightingMode::Radiance {
            color += light.radiance(hit.point);
        }

        if config.shadows_enabled {
            let shadow_ray =
                Ray::with_bounds(hit.point, light_direction, RAY_EPSILON, light_distance);
            if scene.does_hit(&shadow_ray) {
                color *= config.shadow_attenuation;
            }
        }
    }

    max_to_one(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_cycle_visits_all_modes_in_order() {
        let mut mode = LightingMode::ObservedArea;
        let expected = [
            LightingMode::Radiance,
            LightingMode::Brdf,
            LightingMode::Combined,
            LightingMode::ObservedArea,
        ];
        for want in expected {
            mode = mode.cycled();
            assert_eq!(mode, want);
        }
    }

    #[test]
    fn test_max_to_one() {
        // Inside the unit cube: untouched
        let inside = Color::new(0.2, 0.5, 1.0);
        assert_eq!(max_to_one(inside), inside);

        // Outside: rescaled by the max channel, ratios preserved
        let out = max_to_one(Color::new(2.0, 1.0, 0.5));
        assert!((out - Color::new(1.0, 0.5, 0.25)).length() < 1e-6);

        // Idempotent
        assert_eq!(max_to_one(out), out);
    }

    #[test]
    fn test_to_rgb8_truncates() {
        let mut image = ImageBuffer::new(2, 1);
        image.pixels[0] = Color::new(1.0, 0.5, 0.0);
        image.pixels[1] = Color::new(0.999, 0.001, 0.25);

        let data = image.to_rgb8();
        assert_eq!(&data[0..3], &[255, 127, 0]);
        assert_eq!(data[3], 254);
        assert_eq!(data[4], 0);
        assert_eq!(data[5], 63);
    }

    #[test]
    fn test_miss_yields_background() {
        let scene = Scene::new();
        let config = RenderConfig {
            background: Color::new(0.2, 0.3, 0.4),
            ..Default::default()
        };

        let image = render(&scene, &config, 4, 4);
        for pixel in &image.pixels {
            assert_eq!(*pixel, Color::new(0.2, 0.3, 0.4));
        }
    }

    #[test]
    fn test_brdf_mode_shows_solid_color() {
        // A lit solid-color surface in Brdf mode renders the material
        // color exactly.
        let mut scene = Scene::new();
        let material = scene.add_material(Material::SolidColor {
            color: Color::new(0.25, 0.5, 0.75),
        });
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, material);
        scene.add_directional_light(Vec3::Z, 1.0, Color::ONE);

        let config = RenderConfig {
            lighting_mode: LightingMode::Brdf,
            ..Default::default()
        };

        let image = render(&scene, &config, 3, 3);
        let center = image.pixel(1, 1);
        assert!((center - Color::new(0.25, 0.5, 0.75)).length() < 1e-5);
    }

    #[test]
    fn test_observed_area_mode_is_cosine() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);
        // Head-on light: cosine 1 at the center pixel
        scene.add_directional_light(Vec3::Z, 1.0, Color::ONE);

        let config = RenderConfig {
            lighting_mode: LightingMode::ObservedArea,
            ..Default::default()
        };

        let image = render(&scene, &config, 3, 3);
        assert!((image.pixel(1, 1) - Color::ONE).length() < 1e-4);
    }

    #[test]
    fn test_radiance_mode_ignores_cosine() {
        // Light arriving from behind the surface still shows up in
        // Radiance mode.
        let mut scene = Scene::new();
        scene.add_plane(Vec3::new(0.0, 0.0, 6.0), Vec3::NEG_Z, 0);
        scene.add_directional_light(Vec3::NEG_Z, 0.5, Color::ONE);

        let config = RenderConfig {
            lighting_mode: LightingMode::Radiance,
            shadows_enabled: false,
            ..Default::default()
        };

        let image = render(&scene, &config, 1, 1);
        assert!((image.pixel(0, 0) - Color::splat(0.5)).length() < 1e-5);
    }

    #[test]
    fn test_occluded_light_attenuates() {
        let build = |with_occluder: bool| {
            let mut scene = Scene::new();
            let material = scene.add_material(Material::SolidColor { color: Color::ONE });
            scene.add_plane(Vec3::new(0.0, 0.0, 6.0), Vec3::NEG_Z, material);
            scene.add_point_light(Vec3::new(0.0, 5.0, 0.0), 25.0, Color::ONE);
            if with_occluder {
                // Between the hit point and the light, clear of the
                // view ray
                scene.add_sphere(Vec3::new(0.0, 2.5, 3.0), 0.5, material);
            }
            scene
        };

        let config = RenderConfig {
            lighting_mode: LightingMode::Brdf,
            ..Default::default()
        };

        let lit = render(&build(false), &config, 1, 1).pixel(0, 0);
        let shadowed = render(&build(true), &config, 1, 1).pixel(0, 0);

        assert!((shadowed - lit * 0.95).length() < 1e-5);
    }

    #[test]
    fn test_shadow_ray_stops_at_the_light() {
        // An occluder beyond the light must not cast a shadow. The
        // light sits between the plane and the sphere along the same
        // shadow-ray line.
        let mut scene = Scene::new();
        scene.add_plane(Vec3::new(0.0, 0.0, 6.0), Vec3::NEG_Z, 0);
        scene.add_point_light(Vec3::new(0.0, 2.0, 4.0), 25.0, Color::ONE);
        scene.add_sphere(Vec3::new(0.0, 3.54, 2.46), 0.5, 0);

        let config = RenderConfig {
            lighting_mode: LightingMode::Brdf,
            ..Default::default()
        };

        let with_far_sphere = render(&scene, &config, 1, 1).pixel(0, 0);

        let mut clear = Scene::new();
        clear.add_plane(Vec3::new(0.0, 0.0, 6.0), Vec3::NEG_Z, 0);
        clear.add_point_light(Vec3::new(0.0, 2.0, 4.0), 25.0, Color::ONE);
        let unobstructed = render(&clear, &config, 1, 1).pixel(0, 0);

        assert!(unobstructed.max_element() > 0.0);
        assert!((with_far_sphere - unobstructed).length() < 1e-6);
    }

    #[test]
    fn test_output_is_tone_mapped() {
        // A very bright light saturates but never exceeds one.
        let mut scene = Scene::new();
        let white = scene.add_material(Material::SolidColor { color: Color::ONE });
        scene.add_plane(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z, white);
        scene.add_point_light(Vec3::new(0.0, 0.0, 0.5), 10_000.0, Color::new(1.0, 0.5, 0.25));

        let config = RenderConfig {
            lighting_mode: LightingMode::Combined,
            shadows_enabled: false,
            ..Default::default()
        };

        let pixel = render(&scene, &config, 1, 1).pixel(0, 0);
        assert!(pixel.max_element() <= 1.0);
        assert!((pixel.max_element() - 1.0).abs() < 1e-6);
        // Ratios preserved through the rescale
        assert!((pixel.y / pixel.x - 0.5).abs() < 1e-4);
    }
}
