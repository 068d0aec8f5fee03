use glam::Vec2;

/// Vector helpers not covered by `glam`.
///
/// Negation, component-wise scale and dot product come straight from `Vec2`
/// (`-v`, `v * s`, `v.dot(w)`).
pub trait VecExt {
    /// Reflect about a unit surface normal: `r = v - 2 (v . n) n`
    fn reflect_about(self, normal: Vec2) -> Vec2;
}

impl VecExt for Vec2 {
    fn reflect_about(self, normal: Vec2) -> Vec2 {
        self - 2.0 * self.dot(normal) * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_off_floor() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.reflect_about(Vec2::NEG_Y), Vec2::new(3.0, -4.0));
        assert_eq!(v.reflect_about(Vec2::Y), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_reflect_head_on() {
        let v = Vec2::new(-200.0, 0.0);
        assert_eq!(v.reflect_about(Vec2::X), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let n = Vec2::new(1.0, 1.0).normalize();
        let v = Vec2::new(7.0, -2.0);
        let r = v.reflect_about(n);
        assert!((r.length() - v.length()).abs() < 1e-4);
    }
}
