//! Analytic reflectance terms.
//!
//! Pure, stateless functions over pre-normalized direction vectors and
//! material scalars. Degenerate inputs (grazing angles, zero dots)
//! resolve to zero contributions, never errors.

use crate::material::Color;
use glint_math::Vec3;
use std::f32::consts::PI;

/// Lambert diffuse with a scalar reflection coefficient: `kd * cd / pi`.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * (kd / PI)
}

/// Lambert diffuse with a per-channel coefficient.
///
/// Distinct from [`lambert`] by design: the channelwise product
/// carries no 1/pi normalization. Used where the coefficient already
/// absorbs the normalization (e.g. Cook-Torrance kd).
#[inline]
pub fn lambert_color(kd: Color, cd: Color) -> Color {
    kd * cd
}

/// Phong specular lobe.
///
/// `l` is the incident light direction, `v` the view direction, `n`
/// the surface normal. The reflection vector is `l - 2(n.l)n`; the
/// lobe is `ks * max(0, r.v)^exp`, replicated to all three channels.
#[inline]
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let reflection = l - 2.0 * n.dot(l) * n;
    let dot_rv = reflection.dot(v);

    if dot_rv > 0.0 {
        Color::splat(ks * dot_rv.powf(exponent))
    } else {
        Color::ZERO
    }
}

/// Schlick approximation of Fresnel reflectance.
///
/// `h` is the normalized half vector between view and light, `f0` the
/// base reflectivity (0.04 grey for dielectrics, albedo for metals).
#[inline]
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    f0 + (Color::ONE - f0) * (1.0 - h.dot(v)).powi(5)
}

/// Trowbridge-Reitz GGX normal distribution (UE4 form, alpha = roughness^2).
#[inline]
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let alpha2 = alpha * alpha;
    let ndoth2 = n.dot(h) * n.dot(h);
    let denom = ndoth2 * (alpha2 - 1.0) + 1.0;
    alpha2 / (PI * denom * denom)
}

/// Schlick-GGX geometry term for direct lighting, k = (roughness+1)^2 / 8.
#[inline]
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let k = (roughness + 1.0) * (roughness + 1.0) / 8.0;
    let ndotv = n.dot(v);
    ndotv / (ndotv * (1.0 - k) + k)
}

/// Smith masking-shadowing term.
///
/// Combines the view and light Schlick-GGX terms additively. The
/// textbook Smith term is their product; the additive form is the
/// behavior this renderer ships and is pinned by tests.
#[inline]
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) + geometry_schlick_ggx(n, l, roughness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambert_divides_by_pi() {
        let cd = Color::new(1.0, 0.5, 0.25);
        let out = lambert(1.0, cd);

        assert!((out.x - 1.0 / PI).abs() < 1e-6);
        assert!((out.y - 0.5 / PI).abs() < 1e-6);
        assert!((out.z - 0.25 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_lambert_color_has_no_pi() {
        let kd = Color::new(0.5, 0.5, 0.5);
        let cd = Color::new(1.0, 0.8, 0.6);
        let out = lambert_color(kd, cd);

        assert!((out - Color::new(0.5, 0.4, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_phong_mirror_reflection() {
        // Light straight down onto a floor, viewed along the mirror
        // direction: r.v = 1, lobe = ks.
        let n = Vec3::Y;
        let l = -Vec3::Y;
        let r = l - 2.0 * n.dot(l) * n;
        let out = phong(0.8, 32.0, l, r, n);

        assert!((out.x - 0.8).abs() < 1e-5);
        assert_eq!(out.x, out.y);
        assert_eq!(out.y, out.z);
    }

    #[test]
    fn test_phong_backside_is_black() {
        let n = Vec3::Y;
        let l = -Vec3::Y;
        // Viewing opposite the reflection direction
        let out = phong(0.8, 32.0, l, -Vec3::Y, n);
        assert_eq!(out, Color::ZERO);
    }

    #[test]
    fn test_fresnel_at_normal_incidence() {
        // h.v = 1 collapses Schlick to f0
        let f0 = Color::new(0.04, 0.04, 0.04);
        let out = fresnel_schlick(Vec3::Z, Vec3::Z, f0);
        assert!((out - f0).length() < 1e-6);
    }

    #[test]
    fn test_fresnel_at_grazing_angle() {
        // h.v = 0 pushes reflectance to 1
        let f0 = Color::new(0.04, 0.04, 0.04);
        let out = fresnel_schlick(Vec3::Z, Vec3::X, f0);
        assert!((out - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_ggx_closed_form() {
        // At normal incidence (n = h) the denominator collapses to
        // alpha^2, leaving D = alpha^2 / (pi * alpha^4) = 1 / (pi * alpha^2)
        // with alpha = roughness^2.
        let roughness = 0.5_f32;
        let alpha2 = roughness.powi(4);
        let expected = alpha2 / (PI * alpha2 * alpha2);
        assert!((normal_distribution_ggx(Vec3::Z, Vec3::Z, roughness) - expected).abs() < 1e-3);

        // Off-axis value pinned against the full formula
        let h = Vec3::new(0.6, 0.0, 0.8);
        let ndoth2 = 0.8_f32 * 0.8;
        let denom = ndoth2 * (alpha2 - 1.0) + 1.0;
        let expected = alpha2 / (PI * denom * denom);
        assert!((normal_distribution_ggx(Vec3::Z, h, roughness) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_ggx_peaks_at_aligned_half_vector() {
        let aligned = normal_distribution_ggx(Vec3::Z, Vec3::Z, 0.5);
        let tilted_h = Vec3::new(0.5, 0.0, 1.0).normalize();
        let tilted = normal_distribution_ggx(Vec3::Z, tilted_h, 0.5);

        assert!(aligned > tilted);
        assert!(tilted > 0.0);
    }

    #[test]
    fn test_smith_is_additive() {
        let n = Vec3::Z;
        let v = Vec3::new(0.3, 0.0, 1.0).normalize();
        let l = Vec3::new(-0.2, 0.4, 1.0).normalize();
        let roughness = 0.4;

        let g1 = geometry_schlick_ggx(n, v, roughness);
        let g2 = geometry_schlick_ggx(n, l, roughness);
        let smith = geometry_smith(n, v, l, roughness);

        assert!((smith - (g1 + g2)).abs() < 1e-6);
    }
}
