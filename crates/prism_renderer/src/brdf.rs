//! Local reflectance model.
//!
//! Diffuse (Lambert) plus a Blinn-style specular lobe:
//!
//! ```text
//! E   = E_A + sum over lights (E_D + E_S)
//! E_D = base_color * diffuse_coefficient * max(0, n.l)
//! E_S = specular_color * specular_coefficient * max(0, n.h)^shininess,  h = |l + v|
//! E_A = base_color * ambient_coefficient   (added once per ambient light by the renderer)
//! ```

use prism_math::Vec3;

use crate::{Color, Material};

/// Diffuse and specular contribution of one light.
///
/// `n`, `l` and `v` are unit vectors sharing one orientation convention: the
/// renderer passes a viewer-facing normal with `l` pointing towards the light
/// and `v` towards the eye. Ambient is not included.
pub fn reflectance(n: Vec3, l: Vec3, v: Vec3, material: &Material) -> Color {
    let diffuse = material.base_color * material.diffuse_coefficient * n.dot(l).max(0.0);

    let h = (l + v).normalize_or_zero();
    let specular = material.specular_color
        * material.specular_coefficient
        * n.dot(h).max(0.0).powf(material.shininess);

    diffuse + specular
}

/// Ambient contribution of a material under unit ambient light.
#[inline]
pub fn ambient(material: &Material) -> Color {
    material.base_color * material.ambient_coefficient
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let m = Material::new("grey", Color::splat(0.5));
        let n = Vec3::Y;

        assert!(approx(reflectance(n, Vec3::Y, Vec3::Y, &m), Color::splat(0.5)));

        let l = Vec3::new(1.0, 1.0, 0.0).normalize();
        let expected = Color::splat(0.5 * std::f32::consts::FRAC_1_SQRT_2);
        assert!(approx(reflectance(n, l, Vec3::Y, &m), expected));
    }

    #[test]
    fn test_light_behind_surface_is_dark() {
        let m = Material::default();
        let r = reflectance(Vec3::Y, -Vec3::Y, Vec3::Y, &m);
        assert_eq!(r, Color::ZERO);
    }

    #[test]
    fn test_specular_peak_at_mirror_direction() {
        let m = Material::new("shiny", Color::ONE)
            .with_diffuse(0.0)
            .with_specular(Color::new(1.0, 0.5, 0.0), 0.8, 20.0);
        let n = Vec3::Y;
        let l = Vec3::new(1.0, 1.0, 0.0).normalize();

        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let peak = reflectance(n, l, mirror, &m);
        assert!(approx(peak, Color::new(0.8, 0.4, 0.0)));

        let off = reflectance(n, l, Vec3::new(-0.2, 1.0, 0.9).normalize(), &m);
        assert!(off.x < peak.x);
    }

    #[test]
    fn test_opposite_light_and_view_do_not_produce_nan() {
        let m = Material::new("shiny", Color::ONE).with_specular(Color::ONE, 1.0, 10.0);
        let r = reflectance(Vec3::Y, Vec3::X, -Vec3::X, &m);
        assert!(r.is_finite());
    }

    #[test]
    fn test_joint_sign_flip_is_invariant() {
        let m = Material::new("mixed", Color::new(0.3, 0.6, 0.9))
            .with_specular(Color::ONE, 0.5, 8.0);
        let n = Vec3::new(0.2, 1.0, 0.1).normalize();
        let l = Vec3::new(0.5, 0.7, -0.3).normalize();
        let v = Vec3::new(-0.4, 0.8, 0.2).normalize();

        assert!(approx(reflectance(n, l, v, &m), reflectance(-n, -l, -v, &m)));
    }

    #[test]
    fn test_ambient() {
        let m = Material::new("red", Color::new(1.0, 0.0, 0.0)).with_ambient(0.25);
        assert_eq!(ambient(&m), Color::new(0.25, 0.0, 0.0));
    }
}
