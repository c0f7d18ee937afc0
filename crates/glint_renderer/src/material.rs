//! Surface materials.
//!
//! A closed set of shading models dispatched through one `shade` call,
//! rather than an open trait hierarchy: the scene stores materials by
//! value and geometry refers to them by index only.

use crate::brdf;
use crate::hit::HitRecord;
use glint_math::Vec3;

/// Color type alias (RGB values, unclamped until tone mapping)
pub type Color = Vec3;

/// Base reflectivity of dielectric surfaces.
const F0_DIELECTRIC: Color = Color::new(0.04, 0.04, 0.04);

/// A surface shading model.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Flat color, ignores lighting directions entirely
    SolidColor { color: Color },
    /// Lambert diffuse
    Lambert {
        diffuse_color: Color,
        /// Diffuse reflection coefficient (kd)
        diffuse_reflectance: f32,
    },
    /// Lambert diffuse plus a Phong specular lobe
    LambertPhong {
        diffuse_color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    },
    /// Cook-Torrance microfacet model (GGX distribution, Schlick
    /// Fresnel, additive-Smith geometry)
    CookTorrance {
        albedo: Color,
        /// 0 = dielectric, 1 = metal
        metalness: f32,
        /// (0, 1], rough to smooth as it decreases
        roughness: f32,
    },
}

impl Material {
    /// Evaluate the material's reflectance for one light.
    ///
    /// `l` is the unit direction from the hit point towards the light,
    /// `v` the unit view direction. Both are expected normalized.
    pub fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color {
        match *self {
            Material::SolidColor { color } => color,

            Material::Lambert {
                diffuse_color,
                diffuse_reflectance,
            } => brdf::lambert(diffuse_reflectance, diffuse_color),

            Material::LambertPhong {
                diffuse_color,
                diffuse_reflectance,
                specular_reflectance,
                phong_exponent,
            } => {
                brdf::lambert(diffuse_reflectance, diffuse_color)
                    + brdf::phong(specular_reflectance, phong_exponent, l, -v, hit.normal)
            }

            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => {
                let n = hit.normal;
                let h = (v + l).normalize();

                let f0 = if metalness == 0.0 { F0_DIELECTRIC } else { albedo };

                let fresnel = brdf::fresnel_schlick(h, v, f0);
                let distribution = brdf::normal_distribution_ggx(n, h, roughness);
                let geometry = brdf::geometry_smith(n, v, l, roughness);

                let denominator = 4.0 * v.dot(n) * l.dot(n);
                let specular = fresnel * geometry * distribution / denominator;

                // Metals have no diffuse lobe
                let diffuse = if metalness < 0.5 {
                    albedo / std::f32::consts::PI
                } else {
                    Color::ZERO
                };

                specular + diffuse
            }
        }
    }
}
