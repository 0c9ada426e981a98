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

pub const RECORD_SIZE: usize = 16;

/// Fixed layout time record: four 32-bit integers, hours, minutes, seconds and
/// mode (0 normal, 1 set hour, 2 set minute), little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockRecord {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub mode: i32,
}

impl ClockRecord {
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        for (chunk, field) in bytes
            .chunks_exact_mut(4)
            .zip([self.hours, self.minutes, self.seconds, self.mode])
        {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let field = |index: usize| {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(&bytes[index * 4..index * 4 + 4]);
            i32::from_le_bytes(raw)
        };
        Self {
            hours: field(0),
            minutes: field(1),
            seconds: field(2),
            mode: field(3),
        }
    }

    /// Parse the leading record of a buffer, `None` if it is too short.
    pub fn from_slice(buffer: &[u8]) -> Option<Self> {
        let bytes: &[u8; RECORD_SIZE] = buffer.get(..RECORD_SIZE)?.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_four_little_endian_words() {
        let record = ClockRecord {
            hours: 13,
            minutes: 59,
            seconds: 1,
            mode: 2,
        };
        assert_eq!(
            record.to_bytes(),
            [13, 0, 0, 0, 59, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0]
        );
        assert_eq!(ClockRecord::from_bytes(&record.to_bytes()), record);
    }

    #[test]
    fn short_buffers_do_not_parse() {
        assert_eq!(ClockRecord::from_slice(&[0u8; RECORD_SIZE - 1]), None);
        let mut long = [0u8; RECORD_SIZE + 4];
        long[0] = 7;
        assert_eq!(ClockRecord::from_slice(&long).map(|r| r.hours), Some(7));
    }
}
