use nalgebra::Vector2;

/// Floating point type used by the library
pub type Fl = f32;

/// Trait for numbers
pub trait IntoFl {
    /// Convert into a float
    fn into_fl(self) -> Fl;
}

macro_rules! impl_into_fl {
    ($ty:ident) => {
        impl IntoFl for $ty {
            fn into_fl(self) -> Fl {
                self as Fl
            }
        }
    };
}

impl_into_fl!(f32);
impl_into_fl!(f64);
impl_into_fl!(u8);
impl_into_fl!(i8);
impl_into_fl!(u16);
impl_into_fl!(i16);
impl_into_fl!(u32);
impl_into_fl!(i32);
impl_into_fl!(u64);
impl_into_fl!(i64);
impl_into_fl!(usize);
impl_into_fl!(isize);

/// A 2-dimensional vector of floating point numbers
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Deserialize, ::serde::Serialize),
    serde(from = "SerdeVec2", into = "SerdeVec2")
)]
pub struct Vec2(pub Vector2<Fl>);

impl Vec2 {
    #[inline(always)]
    /// Create a vector from a set of numbers
    pub fn new(x: impl IntoFl, y: impl IntoFl) -> Self {
        Self(Vector2::new(x.into_fl(), y.into_fl()))
    }
    #[inline(always)]
    /// Access the x component of this vector
    pub fn x(&self) -> Fl {
        self.0.x
    }
    #[inline(always)]
    /// Access the y component of this vector
    pub fn y(&self) -> Fl {
        self.0.y
    }
}

impl<T: IntoFl, U: IntoFl> From<(T, U)> for Vec2 {
    /// Convert from a tuple of numbers to a vector
    #[inline(always)]
    fn from((x, y): (T, U)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<Fl>> for Vec2 {
    /// Convert from an nalgebra vector
    #[inline(always)]
    fn from(inner: Vector2<Fl>) -> Self {
        Self(inner)
    }
}

impl From<Vec2> for Vector2<Fl> {
    /// Convert from a splat vector to an nalgebra vector
    #[inline(always)]
    fn from(vec: Vec2) -> Self {
        vec.0
    }
}

impl std::ops::Deref for Vec2 {
    type Target = Vector2<Fl>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Vec2 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::ops::Add<Vec2> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    /// Add two vectors (component-wise)
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl std::ops::Sub<Vec2> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    /// Subtract two vectors (component-wise)
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl std::ops::Mul<Fl> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    /// Multiply a vector with a number
    fn mul(self, rhs: Fl) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl std::ops::Div<Fl> for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    /// Divide a vector by a number
    fn div(self, rhs: Fl) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize)]
struct SerdeVec2 {
    x: Fl,
    y: Fl,
}

#[cfg(feature = "serde")]
impl From<Vec2> for SerdeVec2 {
    fn from(vec: Vec2) -> Self {
        Self {
            x: vec.x(),
            y: vec.y(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<SerdeVec2> for Vec2 {
    fn from(vec: SerdeVec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversions() {
        let v: Vec2 = (3, 4.5).into();
        assert_eq!(v, Vec2::new(3.0, 4.5));
        let inner: Vector2<Fl> = v.into();
        assert_eq!(inner, Vector2::new(3.0, 4.5));
    }

    #[test]
    fn component_ops() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(10, 20);
        assert_eq!(a + b, Vec2::new(11, 22));
        assert_eq!(b - a, Vec2::new(9, 18));
        assert_eq!(a * 2.0, Vec2::new(2, 4));
        assert_eq!(b / 10.0, Vec2::new(1, 2));
    }
}
