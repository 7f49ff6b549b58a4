//! Frame synchronization and validation engine for fixed-size binary
//! telemetry streams.
//!
//! Framesift scans a raw byte stream for 2048-byte telemetry frames,
//! validates each frame's CRC-16/CCITT trailer, tracks sequence-number
//! continuity per frame type, and accumulates quality statistics: frame
//! counts, numbering gaps and checksum failures for each of the ten known
//! frame types.
//!
//! # Features
//!
//! - **Marker synchronization**: prefix scanning with local recovery after
//!   suffix mismatches and checksum failures
//! - **Ten frame types**: closed catalog, classified by marker suffix
//! - **Quality statistics**: per-type counters plus column totals
//! - **Finite sources**: files or in-memory buffers, consumed once with
//!   bounded backward repositioning
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use framesift::Framesift;
//!
//! fn main() -> framesift::Result<()> {
//!     let stats = Framesift::analyze_file("capture.bin")?;
//!     for entry in &stats {
//!         println!(
//!             "{}: {} frames, {} numbering errors, {} CRC errors",
//!             entry.label(),
//!             entry.frames_count,
//!             entry.numbering_errors_count,
//!             entry.crc_errors_count
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod checksum;
mod error;
pub mod runner;
pub mod source;
pub mod stats;
pub mod synchronizer;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Core exports
pub use catalog::{CRC_SIZE, FRAME_SIZE, FrameType, MARKER_PREFIX, max_suffix_len};
pub use checksum::crc16_ccitt;
pub use error::{FrameError, Result};
pub use runner::AnalysisRunner;
pub use source::{ByteSource, StreamSource};
pub use stats::{FrameTypeStatistics, StatisticsSummary};
pub use synchronizer::FrameSynchronizer;

/// Unified entry point for frame stream analysis.
///
/// # Examples
///
/// ## Capture file
/// ```rust,no_run
/// use framesift::Framesift;
///
/// # fn main() -> framesift::Result<()> {
/// let stats = Framesift::analyze_file("session.bin")?;
/// # Ok(())
/// # }
/// ```
///
/// ## In-memory buffer
/// ```rust
/// use framesift::{Framesift, StreamSource};
///
/// # fn main() -> framesift::Result<()> {
/// let mut source = StreamSource::from_bytes(vec![0u8; 64]);
/// let stats = Framesift::analyze(&mut source)?;
/// assert!(stats.iter().all(|s| s.frames_count == 0));
/// # Ok(())
/// # }
/// ```
pub struct Framesift;

impl Framesift {
    /// Analyze a capture file and return per-type statistics in catalog
    /// order.
    ///
    /// The file is opened, scanned front-to-back and released before this
    /// returns, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. Running out
    /// of data is normal termination, not an error.
    pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<FrameTypeStatistics>> {
        let mut source = StreamSource::open(path)?;
        AnalysisRunner::analyze(&mut source)
    }

    /// Analyze an already-constructed byte source.
    pub fn analyze<S: ByteSource>(source: &mut S) -> Result<Vec<FrameTypeStatistics>> {
        AnalysisRunner::analyze(source)
    }

    /// Number of known frame types, for callers sizing a display.
    pub const fn frame_type_count() -> usize {
        FrameType::COUNT
    }
}
