#![no_std]
// Copyright (C) 2025 Paul Hampson
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License version 3 as  published by the
// Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::clock::{Failure, ReadClock, RecordPayload, WriteClockResp};
use minicbor::{CborLen, Decode, Encode};

pub mod clock;
pub mod receiver;
pub mod record;

pub use receiver::FrameReceiver;
pub use record::{ClockRecord, RECORD_SIZE};

#[derive(Debug, PartialEq, Decode, Encode, CborLen)]
pub enum ClockMessages {
    #[n(0)] ReadClock(#[n(0)] ReadClock),
    #[n(1)] ReadClockResp(#[n(0)] RecordPayload),
    #[n(2)] WriteClock(#[n(0)] RecordPayload),
    #[n(3)] WriteClockResp(#[n(0)] WriteClockResp),
    #[n(4)] Failure(#[n(0)] Failure),
}

/// Largest framed message the link needs to carry.
pub const MAX_FRAME_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The buffer is too small to hold the encoded message and length prefix, value is the expected length
    BufferTooSmall(usize),
    /// The CBOR encoding failed due to invalid data
    EncodingError,
    DecodingError,
    /// The frame can never fit the receive buffer, value is the frame length
    TooLarge(usize),
}

const PREFIX_BYTE_COUNT: usize = 2;

/// Frame a CBOR message with a length prefix for sending across a data link.
///
/// Returns the number of bytes written on success, or a FrameError on failure.
///
/// # Errors
///
/// - `BufferTooSmall`: if the buffer is not large enough to hold the length prefix (2 bytes)
///   plus the encoded message
/// - `EncodingError`: if the CBOR encoding of the message failed
pub fn frame_message<M>(msg: &M, buffer: &mut [u8]) -> Result<usize, FrameError>
where
    M: minicbor::Encode<()> + minicbor::CborLen<()>,
{
    let encoded_len = minicbor::len(msg);
    let total_bytes_needed = encoded_len + PREFIX_BYTE_COUNT;

    if buffer.len() < total_bytes_needed {
        return Err(FrameError::BufferTooSmall(total_bytes_needed));
    }

    buffer[0..PREFIX_BYTE_COUNT].copy_from_slice(&(encoded_len as u16).to_be_bytes());

    minicbor::encode(msg, &mut buffer[PREFIX_BYTE_COUNT..total_bytes_needed])
        .map_err(|_| FrameError::EncodingError)?;

    Ok(total_bytes_needed)
}

/// Decode one framed message from the start of `buffer`.
///
/// Returns the number of bytes the frame occupied along with the message.
/// `BufferTooSmall` means the frame is not complete yet and carries the
/// total frame length when it is known.
pub fn decode_framed_message<'b, M>(buffer: &'b [u8]) -> Result<(usize, M), FrameError>
where
    M: minicbor::Decode<'b, ()>,
{
    if buffer.len() < PREFIX_BYTE_COUNT {
        return Err(FrameError::BufferTooSmall(PREFIX_BYTE_COUNT));
    }

    let mut length_bytes = [0u8; PREFIX_BYTE_COUNT];
    length_bytes.copy_from_slice(&buffer[..PREFIX_BYTE_COUNT]);
    let message_len = u16::from_be_bytes(length_bytes) as usize;

    let frame_len = message_len + PREFIX_BYTE_COUNT;
    if buffer.len() < frame_len {
        return Err(FrameError::BufferTooSmall(frame_len));
    }

    let message = minicbor::decode::<M>(&buffer[PREFIX_BYTE_COUNT..frame_len])
        .map_err(|_| FrameError::DecodingError)?;

    Ok((frame_len, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_request_fits_one_frame() {
        let record = ClockRecord {
            hours: 23,
            minutes: 59,
            seconds: 59,
            mode: 2,
        };
        let msg = ClockMessages::WriteClock(RecordPayload::from(record));

        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame_message(&msg, &mut buffer).unwrap();

        let (consumed, decoded) = decode_framed_message::<ClockMessages>(&buffer[..len]).unwrap();
        assert_eq!(consumed, len);
        assert_eq!(decoded, msg);
        match decoded {
            ClockMessages::WriteClock(payload) => assert_eq!(payload.record(), record),
            _ => panic!("wrong message decoded"),
        }
    }

    #[test]
    fn partial_frame_reports_the_length_still_needed() {
        let msg = ClockMessages::WriteClockResp(WriteClockResp { accepted: 16 });
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame_message(&msg, &mut buffer).unwrap();

        assert_eq!(
            decode_framed_message::<ClockMessages>(&buffer[..1]),
            Err(FrameError::BufferTooSmall(PREFIX_BYTE_COUNT))
        );
        assert_eq!(
            decode_framed_message::<ClockMessages>(&buffer[..len - 1]),
            Err(FrameError::BufferTooSmall(len))
        );
    }

    #[test]
    fn small_buffer_is_rejected_when_framing() {
        let msg = ClockMessages::ReadClock(ReadClock {});
        let mut buffer = [0u8; 2];
        assert!(matches!(
            frame_message(&msg, &mut buffer),
            Err(FrameError::BufferTooSmall(_))
        ));
    }

    #[test]
    fn garbage_is_a_decoding_error() {
        let buffer = [0x00, 0x02, 0xFF, 0xFF];
        assert_eq!(
            decode_framed_message::<ClockMessages>(&buffer),
            Err(FrameError::DecodingError)
        );
    }
}
