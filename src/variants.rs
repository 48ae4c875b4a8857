pub(crate) mod cubic;
pub(crate) mod reno;
pub(crate) mod tahoe;

/// The congestion-control algorithms the simulator models.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Variant {
    #[display(fmt = "Tahoe")]
    Tahoe,
    #[display(fmt = "Reno")]
    Reno,
    #[display(fmt = "Cubic")]
    Cubic,
}

impl Variant {
    /// All variants, in sweep order.
    pub const ALL: [Variant; 3] = [Variant::Tahoe, Variant::Reno, Variant::Cubic];
}
