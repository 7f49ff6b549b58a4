//! Frame type catalog
//!
//! Static, immutable description of the wire format: the marker prefix
//! shared by every frame, and the per-type marker suffix that discriminates
//! the ten frame types. Classification tries every suffix in declaration
//! order against a lookahead buffer; the first byte-wise prefix match wins.

use serde::{Deserialize, Serialize};

/// Fixed 3-byte marker prefix opening every frame.
pub const MARKER_PREFIX: [u8; 3] = [0x7C, 0x6E, 0xA1];

/// Total length of every frame on the wire, in bytes.
pub const FRAME_SIZE: usize = 2048;

/// Length of the big-endian sequence-number field, where present.
pub const SEQUENCE_NUMBER_SIZE: usize = 4;

/// Length of the CRC-16 trailer closing every frame.
pub const CRC_SIZE: usize = 2;

/// The ten telemetry frame types, discriminated by marker suffix.
///
/// Declaration order is the classification order: when two suffixes would
/// both match a lookahead buffer (not possible with the current suffix set,
/// but handled defensively), the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameType {
    Frame1,
    Frame2,
    Frame3,
    Frame4,
    Frame5,
    Frame6,
    Frame7,
    Frame8,
    Frame9,
    /// The single type carrying no sequence-number field.
    Frame10,
}

impl FrameType {
    /// All frame types in declaration (classification) order.
    pub const ALL: [FrameType; 10] = [
        FrameType::Frame1,
        FrameType::Frame2,
        FrameType::Frame3,
        FrameType::Frame4,
        FrameType::Frame5,
        FrameType::Frame6,
        FrameType::Frame7,
        FrameType::Frame8,
        FrameType::Frame9,
        FrameType::Frame10,
    ];

    /// Number of known frame types, for callers sizing a display.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this type in [`FrameType::ALL`], used to index
    /// per-type state tables.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Marker suffix identifying this type on the wire.
    pub const fn suffix(&self) -> &'static [u8] {
        match self {
            FrameType::Frame1 => &[0x2C, 0xFA],
            FrameType::Frame2 => &[0x2D, 0x00],
            FrameType::Frame3 => &[0x2D, 0x01],
            FrameType::Frame4 => &[0x2D, 0x02],
            FrameType::Frame5 => &[0x2D, 0x03],
            FrameType::Frame6 => &[0x2D, 0x04],
            FrameType::Frame7 => &[0x2D, 0x05],
            FrameType::Frame8 => &[0x2D, 0x06],
            FrameType::Frame9 => &[0x2F],
            FrameType::Frame10 => &[0x30],
        }
    }

    /// Whether frames of this type carry a sequence-number field.
    pub const fn has_sequence_number(&self) -> bool {
        !matches!(self, FrameType::Frame10)
    }

    /// Length of this type's sequence-number field (0 or 4 bytes).
    pub const fn sequence_number_len(&self) -> usize {
        if self.has_sequence_number() { SEQUENCE_NUMBER_SIZE } else { 0 }
    }

    /// Payload length for this type, derived from the fixed frame size.
    pub const fn payload_len(&self) -> usize {
        FRAME_SIZE
            - MARKER_PREFIX.len()
            - self.suffix().len()
            - self.sequence_number_len()
            - CRC_SIZE
    }

    /// Display name for presentation callers.
    pub const fn label(&self) -> &'static str {
        match self {
            FrameType::Frame1 => "Frame1",
            FrameType::Frame2 => "Frame2",
            FrameType::Frame3 => "Frame3",
            FrameType::Frame4 => "Frame4",
            FrameType::Frame5 => "Frame5",
            FrameType::Frame6 => "Frame6",
            FrameType::Frame7 => "Frame7",
            FrameType::Frame8 => "Frame8",
            FrameType::Frame9 => "Frame9",
            FrameType::Frame10 => "Frame10",
        }
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Longest marker suffix across all frame types.
///
/// This is the lookahead the synchronizer pulls after every prefix match.
pub const fn max_suffix_len() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < FrameType::ALL.len() {
        let len = FrameType::ALL[i].suffix().len();
        if len > max {
            max = len;
        }
        i += 1;
    }
    max
}
