use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D point or direction in screen space (y grows downward).
///
/// Every operation comes in a fresh-result form (`normalize`, `rotate`, ...)
/// and, where it makes sense in hot loops, an in-place form suffixed with `_mut`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector form of the cross product: `(x, y, 0) x (0, 0, z)`.
    pub fn cross_scalar(self, z: f64) -> Vec2 {
        Vec2::new(self.y * z, -self.x * z)
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the vector (unit vector).
    /// If the magnitude is zero, it returns a zero vector.
    pub fn normalize(self) -> Self {
        let mut v = self;
        v.normalize_mut();
        v
    }

    /// In-place form of [`Vec2::normalize`].
    pub fn normalize_mut(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            self.set(0.0, 0.0)
        } else {
            self.scale_mut(1.0 / mag)
        }
    }

    /// Flips the vector in place.
    pub fn negate_mut(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    pub fn scale(self, factor: f64) -> Self {
        self * factor
    }

    pub fn scale_mut(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Normal on the left-hand side when walking along the vector on screen: `(y, -x)`.
    /// For a polygon ring wound clockwise on screen this is the outward edge normal.
    pub fn left_normal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns a vector perpendicular to this vector: `(-y, x)`.
    pub fn right_normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Alias of [`Vec2::right_normal`].
    pub fn perpendicular(self) -> Self {
        self.right_normal()
    }

    /// Rotates the vector by a given angle (in radians).
    pub fn rotate(self, angle: f64) -> Self {
        let mut v = self;
        v.rotate_mut(angle);
        v
    }

    pub fn rotate_mut(&mut self, angle: f64) -> &mut Self {
        let (sin_a, cos_a) = angle.sin_cos();
        let x = self.x * cos_a - self.y * sin_a;
        let y = self.x * sin_a + self.y * cos_a;
        self.set(x, y)
    }

    /// Projects this vector onto `axis`. A zero axis yields NaN components.
    pub fn project_onto(self, axis: Vec2) -> Self {
        let mut v = self;
        v.project_onto_mut(axis);
        v
    }

    pub fn project_onto_mut(&mut self, axis: Vec2) -> &mut Self {
        let amt = self.dot(axis) / axis.magnitude_squared();
        self.set(amt * axis.x, amt * axis.y)
    }

    /// Reflects the vector across the line through the origin along `axis`.
    pub fn reflect(self, axis: Vec2) -> Self {
        let mut v = self;
        v.reflect_mut(axis);
        v
    }

    pub fn reflect_mut(&mut self, axis: Vec2) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.project_onto_mut(axis).scale_mut(2.0);
        self.x -= x;
        self.y -= y;
        self
    }

    /// Angle of the vector measured from the positive x axis, in `(-PI, PI]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of `other` as seen from this point.
    pub fn angle_to(self, other: Vec2) -> f64 {
        (other - self).angle()
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self + (other - self) * t
    }

    /// Component-wise comparison within `epsilon`.
    pub fn abs_diff_eq(self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// Division by zero follows IEEE-754 and yields INFINITY or NaN components.
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_vec2_add_sub() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_vec2_scalar_mul() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v, Vec2::new(3.0, 6.0));
        let mut w = v;
        w *= 3.0;
        assert_eq!(w, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v1.cross(v2) - -2.0).abs() < EPSILON);
        assert!((Vec2::RIGHT.cross(Vec2::UP) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_cross_scalar() {
        // (1,0,0) x (0,0,1) = (0,-1,0)
        assert_eq!(Vec2::RIGHT.cross_scalar(1.0), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!(Vec2::ZERO.magnitude().abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let norm_v = v.normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < EPSILON);
        assert!(norm_v.abs_diff_eq(Vec2::new(0.6, 0.8), EPSILON));
        // the source value is untouched by the fresh form
        assert_eq!(v, Vec2::new(3.0, 4.0));

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_normalize_mut_chains() {
        let mut v = Vec2::new(0.0, -2.0);
        v.normalize_mut().negate_mut();
        assert_eq!(v, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_vec2_distance() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);
        assert!((v1.distance_squared(v2) - 25.0).abs() < EPSILON);
        assert!((v2.distance(v1) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normals() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.left_normal(), Vec2::new(4.0, -3.0));
        assert_eq!(v.right_normal(), Vec2::new(-4.0, 3.0));
        assert_eq!(v.perpendicular(), v.right_normal());
        assert!(v.dot(v.left_normal()).abs() < EPSILON);
        // walking right on screen (y down), the left side is up
        assert_eq!(Vec2::RIGHT.left_normal(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new(1.0, 0.0);

        let v90 = v.rotate(PI / 2.0);
        assert!(v90.abs_diff_eq(Vec2::new(0.0, 1.0), EPSILON));

        let v180 = v.rotate(PI);
        assert!(v180.abs_diff_eq(Vec2::new(-1.0, 0.0), EPSILON));

        let mut v_neg90 = v;
        v_neg90.rotate_mut(-PI / 2.0);
        assert!(v_neg90.abs_diff_eq(Vec2::new(0.0, -1.0), EPSILON));
    }

    #[test]
    fn test_vec2_project_and_reflect() {
        let v = Vec2::new(2.0, 3.0);
        assert!(v.project_onto(Vec2::new(5.0, 0.0)).abs_diff_eq(Vec2::new(2.0, 0.0), EPSILON));
        assert!(v.reflect(Vec2::RIGHT).abs_diff_eq(Vec2::new(2.0, -3.0), EPSILON));

        let mut w = v;
        w.reflect_mut(Vec2::UP);
        assert!(w.abs_diff_eq(Vec2::new(-2.0, 3.0), EPSILON));
    }

    #[test]
    fn test_vec2_project_onto_zero_axis_is_nan() {
        let p = Vec2::new(1.0, 1.0).project_onto(Vec2::ZERO);
        assert!(p.x.is_nan() && p.y.is_nan());
    }

    #[test]
    fn test_vec2_angle() {
        assert!((Vec2::UP.angle() - PI / 2.0).abs() < EPSILON);
        assert!((Vec2::ZERO.angle_to(Vec2::new(-1.0, 0.0)) - PI).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -4.0);
        assert!(a.lerp(b, 0.5).abs_diff_eq(Vec2::new(5.0, -2.0), EPSILON));
    }

    #[test]
    fn test_vec2_div_by_zero_is_infinite() {
        let v = Vec2::new(1.0, -1.0) / 0.0;
        assert!(v.x.is_infinite() && v.y.is_infinite());
        assert!(!v.is_finite());
    }
}
