//! Test utilities for building wire-format frames
//!
//! Shared by unit tests, integration tests and benchmarks. Frames are built
//! exactly as the synchronizer expects them on the wire: marker prefix,
//! type suffix, optional big-endian sequence number, payload, and a
//! big-endian CRC-16/CCITT trailer over everything before it.

#![cfg(any(test, feature = "benchmark"))]

use crate::catalog::MARKER_PREFIX;
use crate::checksum::crc16_ccitt;
use crate::FrameType;

/// Build a complete, checksum-valid frame of the given type.
///
/// `sequence_number` is ignored for the numberless type. The payload is
/// filled with `fill`.
pub fn build_frame(frame_type: FrameType, sequence_number: u32, fill: u8) -> Vec<u8> {
    let payload = vec![fill; frame_type.payload_len()];
    build_frame_with_payload(frame_type, sequence_number, &payload)
}

/// Build a checksum-valid frame with an explicit payload.
///
/// Panics if the payload length does not match the type's derived payload
/// length; test code should construct to the wire layout deliberately.
pub fn build_frame_with_payload(
    frame_type: FrameType,
    sequence_number: u32,
    payload: &[u8],
) -> Vec<u8> {
    assert_eq!(
        payload.len(),
        frame_type.payload_len(),
        "{frame_type} payload must be {} bytes",
        frame_type.payload_len()
    );

    let sequence_array = sequence_number.to_be_bytes();
    let sequence_bytes: &[u8] =
        if frame_type.has_sequence_number() { &sequence_array } else { &[] };

    let crc = crc16_ccitt(&[&MARKER_PREFIX, frame_type.suffix(), sequence_bytes, payload]);

    let mut frame = Vec::with_capacity(crate::catalog::FRAME_SIZE);
    frame.extend_from_slice(&MARKER_PREFIX);
    frame.extend_from_slice(frame_type.suffix());
    frame.extend_from_slice(sequence_bytes);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&crc.to_be_bytes());
    frame
}

/// Concatenate frames into a single stream buffer.
pub fn build_stream<I: IntoIterator<Item = Vec<u8>>>(frames: I) -> Vec<u8> {
    frames.into_iter().flatten().collect()
}
