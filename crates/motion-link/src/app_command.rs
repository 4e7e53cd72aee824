use uuid::Uuid;

/// Commands sent from the console front end to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ask the peer to start a new recording session.
    StartRecording {
        /// Unique session ID for this recording.
        session_id: Uuid,
    },
    /// Ask the peer to stop the current recording session.
    StopRecording {
        /// Session ID of the recording to stop.
        session_id: Uuid,
    },
    /// Request application shutdown.
    Shutdown,
}
