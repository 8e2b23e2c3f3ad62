use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};

/// A length in PDF points (1/72 of an inch). This is the native unit of
/// every coordinate and measurement in the crate.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum,
    Display, From, Into, Deref, DerefMut,
)]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Mul<f32> for &Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields the (dimensionless) ratio, carried as a
/// [Pt] for ergonomic chaining with the scaling expressions used in
/// layout code.
impl std::ops::Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Pt {
        Pt(self.0 / rhs.0)
    }
}

impl std::ops::MulAssign<f32> for Pt {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

/// A length in inches. Only used as a convenient input unit; convert to
/// [Pt] with [From]/[Into] before doing arithmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

/// A length in millimetres. Only used as a convenient input unit; convert
/// to [Pt] with [From]/[Into] before doing arithmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_convert_input_units() {
        let pt: Pt = In(1.0).into();
        assert_eq!(pt, Pt(72.0));

        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic_behaves_like_lengths() {
        assert_eq!(Pt(10.0) + Pt(2.0), Pt(12.0));
        assert_eq!(Pt(10.0) - Pt(2.0), Pt(8.0));
        assert_eq!(Pt(10.0) * 1.2, Pt(12.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        assert!(Pt(1.0) < Pt(2.0));
    }
}
