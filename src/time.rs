use std::ops::Sub;

/// A point in the synthetic clock domain `[0, 1)`.
///
/// Successive samples carry no causal ordering; only differences between
/// them are meaningful, and those differences can be negative.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const ZERO: Timestamp = Self::new(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }
}

impl Sub for Timestamp {
    type Output = Delay;

    fn sub(self, rhs: Timestamp) -> Self::Output {
        Delay::new(self.0 - rhs.0)
    }
}

/// A synthetic one-way delay.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    derive_more::Display,
    derive_more::Add,
    derive_more::Sub,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Delay(f64);

impl Delay {
    pub const ZERO: Delay = Self::new(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn into_f64(self) -> f64 {
        self.0
    }

    pub fn is_non_negative(self) -> bool {
        self.0 >= 0.0
    }
}
