/// What a rendered frame should be saved as, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    Screenshot,
    /// One frame of a zoom-out sequence. `sequence` keeps counting across
    /// captures for the lifetime of the session.
    Animation { sequence: u32 },
}
