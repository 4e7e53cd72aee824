//! Inbound payload ingestion.
//!
//! Persists each file handoff into durable local storage, decodes it as
//! text, and parses it into a series. A failure at any step is reported
//! and leaves previously published data untouched; prior payload files
//! are never deleted.

use crate::{AppError, AppResult, link::event::IncomingTransfer};

use std::{
    ffi::OsStr,
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use motion_link_core::{Series, decode_payload, parse_series};
use tracing::{debug, info, instrument};

/// Raw payload text and the series parsed from it.
///
/// Published as one unit so observers never see a series inconsistent
/// with its raw text. Each successful transfer fully replaces the
/// previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSnapshot {
    /// The received text, verbatim.
    pub raw: String,
    /// The samples parsed from it.
    pub series: Series,
}

/// Persists inbound file handoffs and turns them into snapshots.
#[derive(Debug, Clone)]
pub struct TransferReceiver {
    payload_dir: PathBuf,
}

impl TransferReceiver {
    /// Create a receiver storing payloads under `payload_dir`, creating
    /// the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[track_caller]
    pub fn new(payload_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&payload_dir)?;
        debug!(payload_dir = %payload_dir.display(), "Payload storage ready");
        Ok(Self { payload_dir })
    }

    /// Ingest one inbound transfer: persist, decode, parse.
    ///
    /// Blocking file I/O; run under `spawn_blocking` rather than on the
    /// app loop. A name collision overwrites the stored copy.
    ///
    /// # Errors
    ///
    /// [`AppError::TransferPersistFailed`] if the file cannot be copied
    /// into storage, [`AppError::TransferDecodeFailed`] if the stored
    /// bytes are not text.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn ingest(&self, transfer: &IncomingTransfer) -> AppResult<PayloadSnapshot> {
        let destination = self.destination(&transfer.file_name);

        fs::copy(&transfer.path, &destination).map_err(|e| AppError::TransferPersistFailed {
            reason: format!(
                "could not store {} at {}: {}",
                transfer.file_name,
                destination.display(),
                e
            ),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let bytes = fs::read(&destination)?;
        let raw = decode_payload(&bytes)?;
        let series = parse_series(&raw);

        info!(
            file = %transfer.file_name,
            rows = series.len(),
            "Transfer ingested"
        );

        Ok(PayloadSnapshot { raw, series })
    }

    /// Deterministic destination for a suggested file name. Only the
    /// final path component is honored.
    fn destination(&self, file_name: &str) -> PathBuf {
        let name = Path::new(file_name)
            .file_name()
            .unwrap_or_else(|| OsStr::new("payload.csv"));
        self.payload_dir.join(name)
    }
}
