//! Review session precondition errors.

/// Why a review session could not start.
///
/// Both are terminal: nothing is loaded and no retry is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No video is available for this review")]
    MissingMedia,

    #[error("No frame annotations are available for this review")]
    NoFrames,
}
