use serde::{Deserialize, Serialize};

use valrec_core::{Real, value_record};

value_record! {
    /// A point in the plane. Both coordinates default to `0.0`.
    #[derive(Serialize, Deserialize)]
    pub struct Point2D {
        x: Real = 0.0,
        y: Real = 0.0,
    }
}

impl Point2D {
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Build a point from any pair of numbers that widen to `f64`.
    pub fn by(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self::new(x.into(), y.into())
    }
}
