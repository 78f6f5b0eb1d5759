/// Reasons a frame is skipped without publishing anything.
///
/// These are per-frame conditions, handled locally by the pipeline; they
/// never propagate past it and never abort the worker.
#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameSkip {
    #[error("need two candidates to form a pair, found {found}")]
    InsufficientCandidates { found: usize },
    #[error("selected candidates share a horizontal center")]
    DegeneratePair,
}
