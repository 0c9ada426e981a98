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

use crate::record::{ClockRecord, RECORD_SIZE};
use minicbor::{CborLen, Decode, Encode};

#[derive(Debug, PartialEq, Default, Encode, Decode, CborLen)]
pub struct ReadClock {}

/// The raw 16 byte clock record, carried untouched.
#[derive(Debug, PartialEq, Encode, Decode, CborLen)]
pub struct RecordPayload {
    #[n(0)] pub record: [u8; RECORD_SIZE],
}

impl RecordPayload {
    pub fn record(&self) -> ClockRecord {
        ClockRecord::from_bytes(&self.record)
    }
}

impl From<ClockRecord> for RecordPayload {
    fn from(record: ClockRecord) -> Self {
        Self {
            record: record.to_bytes(),
        }
    }
}

#[derive(Debug, PartialEq, Encode, Decode, CborLen)]
pub struct WriteClockResp {
    #[n(0)] pub accepted: u32,
}

#[derive(Debug, PartialEq, Copy, Clone, Encode, Decode, CborLen)]
pub enum FailureCode {
    /// The request payload was too short or out of range.
    #[n(0)] InvalidArgument,
    /// The payload could not be transferred intact.
    #[n(1)] Fault,
    /// The RTC could not be read or written.
    #[n(2)] Io,
    /// The response did not fit the supplied buffer.
    #[n(3)] BufferTooSmall,
}

#[derive(Debug, PartialEq, Encode, Decode, CborLen)]
pub struct Failure {
    #[n(0)] pub code: FailureCode,
}
