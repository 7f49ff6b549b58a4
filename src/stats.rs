//! Per-frame-type quality statistics

use crate::FrameType;
use serde::{Deserialize, Serialize};

/// Quality counters accumulated for a single frame type.
///
/// Owned by the synchronizer during a scan and returned by value as a
/// read-only snapshot. `frames_count` counts completed marker-plus-suffix
/// matches, so it includes frames that later failed the checksum;
/// `frames_count >= crc_errors_count` and
/// `frames_count >= numbering_errors_count` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTypeStatistics {
    /// The frame type these counters describe.
    pub frame_type: FrameType,

    /// Completed frame matches, checksum-valid or not.
    pub frames_count: u32,

    /// Sequence numbers that did not follow the previous one by exactly 1.
    pub numbering_errors_count: u32,

    /// Trailer checksums that did not match the computed CRC.
    pub crc_errors_count: u32,
}

impl FrameTypeStatistics {
    /// Create a zeroed record for a frame type.
    pub fn new(frame_type: FrameType) -> Self {
        Self { frame_type, frames_count: 0, numbering_errors_count: 0, crc_errors_count: 0 }
    }

    /// Display name of the frame type, for presentation callers.
    pub fn label(&self) -> &'static str {
        self.frame_type.label()
    }
}

/// Column totals across all frame types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub frames_count: u32,
    pub numbering_errors_count: u32,
    pub crc_errors_count: u32,
}

impl StatisticsSummary {
    /// Sum the counters of a statistics snapshot.
    pub fn from_stats(stats: &[FrameTypeStatistics]) -> Self {
        stats.iter().fold(Self::default(), |acc, s| Self {
            frames_count: acc.frames_count + s.frames_count,
            numbering_errors_count: acc.numbering_errors_count + s.numbering_errors_count,
            crc_errors_count: acc.crc_errors_count + s.crc_errors_count,
        })
    }
}
