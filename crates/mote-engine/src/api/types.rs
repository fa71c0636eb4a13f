/// Which label a particle's base position falls under.
///
/// Classified by comparing the base x-coordinate to the horizontal surface
/// midpoint, not by glyph ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// Host platform capabilities, resolved once before the simulation starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// Whether the host supports touch input at all. Non-touch hosts treat
    /// the pointer as always active; touch hosts scatter only while a touch
    /// is held.
    pub touch: bool,
}
