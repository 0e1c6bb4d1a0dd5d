/// Closed interval of projected values along one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Covers nothing and overlaps nothing.
    pub const EMPTY: Range = Range { min: f64::INFINITY, max: f64::NEG_INFINITY };

    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `center ± radius`.
    #[inline]
    pub fn around(center: f64, radius: f64) -> Self {
        Self { min: center - radius, max: center + radius }
    }

    /// Smallest range covering every value, or `None` for an empty input.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(Self::new(first, first), |r, v| Self::new(r.min.min(v), r.max.max(v))))
    }

    /// Inclusive: ranges sharing only an endpoint overlap.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}
