//! Frame synchronization engine
//!
//! [`FrameSynchronizer`] scans a byte stream for the fixed marker prefix,
//! classifies each match by marker suffix, and drives frame extraction:
//! sequence-number continuity tracking, payload read, CRC verification and
//! the seek-backs that re-synchronize the stream after a suffix mismatch
//! or checksum failure. It owns one [`FrameTypeStatistics`] record per
//! frame type for the lifetime of a scan.
//!
//! ## Scanning model
//!
//! Scanning is a single-candidate matcher: one running index into the
//! marker prefix, advanced on a byte match and reset to zero on any
//! mismatch. There is no failure-function restart, so a mismatching byte
//! is not re-examined as a potential first prefix byte. Pathological
//! self-overlapping inputs therefore resynchronize later than a full
//! substring matcher would. This matches the deployed analyzers this
//! engine must agree with; do not replace it with a KMP-style matcher
//! without revalidating recorded captures.

use crate::catalog::{CRC_SIZE, MARKER_PREFIX, max_suffix_len};
use crate::checksum::crc16_ccitt;
use crate::source::ByteSource;
use crate::{FrameType, FrameTypeStatistics, Result};
use tracing::{debug, trace, warn};

/// Marker scanning and frame validation engine.
///
/// Feed bytes through [`scan_byte`](Self::scan_byte); once
/// [`prefix_matched`](Self::prefix_matched) reports a full prefix, hand the
/// byte source to [`process_potential_frame`](Self::process_potential_frame)
/// to classify and validate the frame that follows.
pub struct FrameSynchronizer {
    prefix_index: usize,
    stats: Vec<FrameTypeStatistics>,
    last_sequence: [u32; FrameType::COUNT],
}

impl FrameSynchronizer {
    /// Create an engine with zeroed statistics for every frame type.
    pub fn new() -> Self {
        Self {
            prefix_index: 0,
            stats: FrameType::ALL.iter().map(|t| FrameTypeStatistics::new(*t)).collect(),
            last_sequence: [0; FrameType::COUNT],
        }
    }

    /// Advance the prefix scan by one byte.
    ///
    /// The match index advances when `byte` equals the next expected prefix
    /// byte and resets to zero otherwise.
    pub fn scan_byte(&mut self, byte: u8) {
        if MARKER_PREFIX.get(self.prefix_index) == Some(&byte) {
            self.prefix_index += 1;
        } else {
            self.prefix_index = 0;
        }
    }

    /// Whether the last scanned bytes completed the full marker prefix.
    pub fn prefix_matched(&self) -> bool {
        self.prefix_index == MARKER_PREFIX.len()
    }

    /// Classify and validate the frame following a matched prefix.
    ///
    /// Reads a suffix lookahead from `source` and tries every catalog
    /// suffix in declaration order. On a match the frame body is extracted
    /// and validated; the matched type's `frames_count` increments exactly
    /// once whether or not the checksum verifies. On no match the lookahead
    /// is undone with a seek-back and no statistics change.
    ///
    /// An `EndOfData` failure mid-frame propagates before the count
    /// increment, so truncated trailing frames are never counted.
    pub fn process_potential_frame<S: ByteSource>(&mut self, source: &mut S) -> Result<()> {
        self.prefix_index = 0;

        let lookahead = source.read_bytes(max_suffix_len())?;

        for frame_type in FrameType::ALL {
            let suffix = frame_type.suffix();
            if lookahead.starts_with(suffix) {
                // Only the matched suffix bytes are consumed
                let extra_bytes = lookahead.len() - suffix.len();
                source.seek_back(extra_bytes)?;

                trace!("Prefix match classified as {}", frame_type);
                self.process_frame(frame_type, source)?;

                self.stats[frame_type.index()].frames_count += 1;
                return Ok(());
            }
        }

        debug!("No suffix matched lookahead {:02X?}, resuming scan", lookahead);
        source.seek_back(lookahead.len())?;
        Ok(())
    }

    /// Read-only view of the accumulated statistics, in catalog order.
    pub fn statistics(&self) -> &[FrameTypeStatistics] {
        &self.stats
    }

    /// Consume the engine and return its statistics snapshot.
    pub fn into_statistics(self) -> Vec<FrameTypeStatistics> {
        self.stats
    }

    fn process_frame<S: ByteSource>(
        &mut self,
        frame_type: FrameType,
        source: &mut S,
    ) -> Result<()> {
        let sequence_bytes = if frame_type.has_sequence_number() {
            let bytes = source.read_bytes(frame_type.sequence_number_len())?;
            self.track_sequence_number(frame_type, &bytes);
            bytes
        } else {
            Vec::new()
        };

        let payload = source.read_bytes(frame_type.payload_len())?;
        let trailer = source.read_bytes(CRC_SIZE)?;

        let computed =
            crc16_ccitt(&[&MARKER_PREFIX, frame_type.suffix(), &sequence_bytes, &payload]);
        let received = u16::from_be_bytes([trailer[0], trailer[1]]);

        if computed != received {
            warn!(
                "{} checksum mismatch: computed {:#06X}, trailer {:#06X}",
                frame_type, computed, received
            );
            self.stats[frame_type.index()].crc_errors_count += 1;

            // Undo everything read after the suffix so scanning can
            // re-synchronize from there
            source.seek_back(sequence_bytes.len() + payload.len() + CRC_SIZE)?;
        }

        Ok(())
    }

    /// Check sequence continuity and store the new last-seen number.
    ///
    /// The last-seen update is unconditional and happens before the
    /// checksum outcome is known, so a frame that later fails its CRC
    /// still advances the expected numbering.
    fn track_sequence_number(&mut self, frame_type: FrameType, bytes: &[u8]) {
        let sequence_number = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let last_seen = self.last_sequence[frame_type.index()];

        // First observed frame of a type is never a gap
        if sequence_number.wrapping_sub(1) != last_seen && last_seen > 0 {
            warn!(
                "{} numbering gap: expected {}, got {}",
                frame_type,
                last_seen.wrapping_add(1),
                sequence_number
            );
            self.stats[frame_type.index()].numbering_errors_count += 1;
        }

        self.last_sequence[frame_type.index()] = sequence_number;
    }
}

impl Default for FrameSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StreamSource;
    use crate::test_utils::build_frame;

    fn stats_for(sync: &FrameSynchronizer, frame_type: FrameType) -> &FrameTypeStatistics {
        &sync.statistics()[frame_type.index()]
    }

    fn feed_prefix(sync: &mut FrameSynchronizer) {
        for byte in MARKER_PREFIX {
            sync.scan_byte(byte);
        }
    }

    #[test]
    fn scanner_advances_through_the_prefix() {
        let mut sync = FrameSynchronizer::new();
        sync.scan_byte(0x7C);
        assert!(!sync.prefix_matched());
        sync.scan_byte(0x6E);
        assert!(!sync.prefix_matched());
        sync.scan_byte(0xA1);
        assert!(sync.prefix_matched());
    }

    #[test]
    fn scanner_resets_on_mismatch() {
        let mut sync = FrameSynchronizer::new();
        sync.scan_byte(0x7C);
        sync.scan_byte(0x6E);
        sync.scan_byte(0x00);
        assert!(!sync.prefix_matched());

        // Single-candidate matcher: a mismatching 0x7C is NOT treated as a
        // restart, the index simply reset, so the full prefix is needed again
        feed_prefix(&mut sync);
        assert!(sync.prefix_matched());
    }

    #[test]
    fn well_formed_frame_is_counted_without_errors() {
        let frame = build_frame(FrameType::Frame2, 1, 0x55);
        // The runner consumes the prefix during scanning; extraction starts
        // at the suffix
        let mut source = StreamSource::from_bytes(frame[MARKER_PREFIX.len()..].to_vec());

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        sync.process_potential_frame(&mut source).unwrap();

        let stats = stats_for(&sync, FrameType::Frame2);
        assert_eq!(stats.frames_count, 1);
        assert_eq!(stats.numbering_errors_count, 0);
        assert_eq!(stats.crc_errors_count, 0);
        assert!(!sync.prefix_matched(), "match index must reset after extraction");
    }

    #[test]
    fn unrecognized_suffix_undoes_the_lookahead() {
        let mut source = StreamSource::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        sync.process_potential_frame(&mut source).unwrap();

        for stats in sync.statistics() {
            assert_eq!(stats.frames_count, 0);
            assert_eq!(stats.crc_errors_count, 0);
            assert_eq!(stats.numbering_errors_count, 0);
        }
        // Lookahead fully undone: next read sees the same bytes
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn corrupted_trailer_counts_frame_and_crc_error_and_seeks_back() {
        let mut frame = build_frame(FrameType::Frame5, 1, 0x00);
        let last = frame.len() - 1;
        frame[last] ^= 0xFF;

        let body = frame[MARKER_PREFIX.len()..].to_vec();
        let body_len = body.len();
        let mut source = StreamSource::from_bytes(body);

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        sync.process_potential_frame(&mut source).unwrap();

        let stats = stats_for(&sync, FrameType::Frame5);
        assert_eq!(stats.frames_count, 1);
        assert_eq!(stats.crc_errors_count, 1);

        // Cursor must sit immediately after the matched suffix
        let suffix_len = FrameType::Frame5.suffix().len();
        assert_eq!(source.position(), suffix_len);
        assert_eq!(body_len - suffix_len, 4 + FrameType::Frame5.payload_len() + CRC_SIZE);
    }

    #[test]
    fn sequence_gap_increments_numbering_errors_once() {
        let first = build_frame(FrameType::Frame1, 1, 0xAA);
        let fifth = build_frame(FrameType::Frame1, 5, 0xAA);

        let mut sync = FrameSynchronizer::new();
        for frame in [&first, &fifth] {
            let mut source = StreamSource::from_bytes(frame[MARKER_PREFIX.len()..].to_vec());
            feed_prefix(&mut sync);
            sync.process_potential_frame(&mut source).unwrap();
        }

        let stats = stats_for(&sync, FrameType::Frame1);
        assert_eq!(stats.frames_count, 2);
        // One gap event, not four missing frames
        assert_eq!(stats.numbering_errors_count, 1);
    }

    #[test]
    fn first_frame_of_a_type_never_reports_a_gap() {
        let frame = build_frame(FrameType::Frame7, 900, 0x11);
        let mut source = StreamSource::from_bytes(frame[MARKER_PREFIX.len()..].to_vec());

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        sync.process_potential_frame(&mut source).unwrap();

        assert_eq!(stats_for(&sync, FrameType::Frame7).numbering_errors_count, 0);
    }

    #[test]
    fn last_seen_updates_even_when_checksum_fails() {
        let mut bad = build_frame(FrameType::Frame3, 1, 0x10);
        let last = bad.len() - 1;
        bad[last] ^= 0x01;
        let good = build_frame(FrameType::Frame3, 2, 0x10);

        let mut sync = FrameSynchronizer::new();
        for frame in [&bad, &good] {
            let mut source = StreamSource::from_bytes(frame[MARKER_PREFIX.len()..].to_vec());
            feed_prefix(&mut sync);
            sync.process_potential_frame(&mut source).unwrap();
        }

        let stats = stats_for(&sync, FrameType::Frame3);
        assert_eq!(stats.crc_errors_count, 1);
        // Sequence 2 follows the failed frame's sequence 1: no gap
        assert_eq!(stats.numbering_errors_count, 0);
    }

    #[test]
    fn numberless_type_skips_sequence_tracking() {
        let frame = build_frame(FrameType::Frame10, 0, 0x42);
        let mut source = StreamSource::from_bytes(frame[MARKER_PREFIX.len()..].to_vec());

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        sync.process_potential_frame(&mut source).unwrap();

        let stats = stats_for(&sync, FrameType::Frame10);
        assert_eq!(stats.frames_count, 1);
        assert_eq!(stats.numbering_errors_count, 0);
        assert_eq!(stats.crc_errors_count, 0);
    }

    #[test]
    fn truncated_frame_propagates_end_of_data_uncounted() {
        let frame = build_frame(FrameType::Frame4, 1, 0x33);
        // Cut the frame short halfway through the payload
        let truncated = frame[MARKER_PREFIX.len()..frame.len() / 2].to_vec();
        let mut source = StreamSource::from_bytes(truncated);

        let mut sync = FrameSynchronizer::new();
        feed_prefix(&mut sync);
        let err = sync.process_potential_frame(&mut source).unwrap_err();
        assert!(matches!(err, crate::FrameError::EndOfData));
        assert_eq!(stats_for(&sync, FrameType::Frame4).frames_count, 0);
    }
}
