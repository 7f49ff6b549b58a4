//! Analysis runner driving the byte-by-byte scan loop
//!
//! Pulls bytes from a [`ByteSource`] one at a time, feeds them to a
//! [`FrameSynchronizer`], and hands the source over for frame extraction
//! whenever the marker prefix completes. End-of-data is normal
//! termination: the loop stops and the accumulated statistics are
//! returned. Source I/O failures abort the analysis with no partial
//! statistics guarantee.

use crate::source::ByteSource;
use crate::synchronizer::FrameSynchronizer;
use crate::{FrameError, FrameTypeStatistics, Result};
use tracing::{debug, info};

/// Drives a full scan of a byte source and returns the statistics snapshot.
pub struct AnalysisRunner;

impl AnalysisRunner {
    /// Scan `source` front-to-back and return per-type statistics in
    /// catalog order.
    ///
    /// The source is exclusively owned by this call for its duration.
    /// Truncated data at the end of the stream is not an error; whatever
    /// was accumulated before the truncation point is returned.
    pub fn analyze<S: ByteSource>(source: &mut S) -> Result<Vec<FrameTypeStatistics>> {
        let mut synchronizer = FrameSynchronizer::new();
        let mut bytes_scanned = 0u64;

        loop {
            let byte = match source.read_byte() {
                Ok(byte) => byte,
                Err(FrameError::EndOfData) => break,
                Err(e) => return Err(e),
            };
            bytes_scanned += 1;

            synchronizer.scan_byte(byte);
            if synchronizer.prefix_matched() {
                debug!("Marker prefix matched at offset {}", bytes_scanned);
                match synchronizer.process_potential_frame(source) {
                    Ok(()) => {}
                    Err(FrameError::EndOfData) => break,
                    Err(e) => return Err(e),
                }
            }
        }

        let stats = synchronizer.into_statistics();
        let total_frames: u32 = stats.iter().map(|s| s.frames_count).sum();
        info!("Scan complete: {} bytes, {} frames", bytes_scanned, total_frames);

        Ok(stats)
    }
}
