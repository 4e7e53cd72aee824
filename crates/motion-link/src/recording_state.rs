use std::time::Instant;

use uuid::Uuid;

/// The single authoritative "is a recording in progress" value.
///
/// Mutated only by the app event loop, and only on a confirmed
/// acknowledgement from the peer, never optimistically on send. Published
/// through a watch channel so the front end can enable or disable the
/// start/stop affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// No recording in progress.
    Idle,
    /// Remote recording confirmed in progress.
    Recording {
        /// When the acknowledgement arrived.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecordingState {
    /// True while a remote recording is confirmed in progress.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Session ID of the recording in progress, if any.
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { session_id, .. } => Some(*session_id),
        }
    }
}
