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


use crate::{FrameError, PREFIX_BYTE_COUNT};
use minicbor::Decode;

/// Reassembles length-prefixed frames from a byte stream that arrives in
/// arbitrary chunks. Frames larger than `N` are skipped whole, so the bytes of
/// an oversized frame are never mistaken for the start of the next one.
pub struct FrameReceiver<const N: usize> {
    buffer: [u8; N],
    len: usize,
    discarding: usize,
}

impl<const N: usize> Default for FrameReceiver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameReceiver<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            len: 0,
            discarding: 0,
        }
    }

    /// Take as much of `bytes` as there is room for, returns how many were
    /// taken. Bytes of a frame being skipped are taken and dropped.
    pub fn fill(&mut self, bytes: &[u8]) -> usize {
        let skipped = self.discarding.min(bytes.len());
        self.discarding -= skipped;

        let copied = (N - self.len).min(bytes.len() - skipped);
        self.buffer[self.len..self.len + copied].copy_from_slice(&bytes[skipped..skipped + copied]);
        self.len += copied;
        skipped + copied
    }

    /// Next complete message, `None` while more bytes are needed.
    ///
    /// # Errors
    ///
    /// - `TooLarge`: the frame can never fit, the rest of it will be skipped
    /// - `DecodingError`: the frame was complete but not a valid message, it is dropped
    pub fn next_message<M>(&mut self) -> Result<Option<M>, FrameError>
    where
        M: for<'b> Decode<'b, ()>,
    {
        match crate::decode_framed_message::<M>(&self.buffer[..self.len]) {
            Ok((frame_len, message)) => {
                self.consume(frame_len);
                Ok(Some(message))
            }
            Err(FrameError::BufferTooSmall(needed)) if needed > N => {
                self.discarding = needed - self.len;
                self.len = 0;
                Err(FrameError::TooLarge(needed))
            }
            Err(FrameError::BufferTooSmall(_)) => Ok(None),
            Err(e) => {
                let mut length_bytes = [0u8; PREFIX_BYTE_COUNT];
                length_bytes.copy_from_slice(&self.buffer[..PREFIX_BYTE_COUNT]);
                self.consume(u16::from_be_bytes(length_bytes) as usize + PREFIX_BYTE_COUNT);
                Err(e)
            }
        }
    }

    fn consume(&mut self, count: usize) {
        self.buffer.copy_within(count..self.len, 0);
        self.len -= count;
    }
}
