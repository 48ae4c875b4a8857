/// A packet sequence number, assigned at send time and never reused.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SeqNum(u64);

impl SeqNum {
    pub const ZERO: SeqNum = Self::new(0);
    pub const ONE: SeqNum = Self::new(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn into_u64(self) -> u64 {
        self.0
    }
}
