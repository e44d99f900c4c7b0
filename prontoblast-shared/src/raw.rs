//! Chuangmi raw signal wire format.
//!
//! All multi-byte fields are little-endian:
//!
//! ```text
//! magic:       u16      0xa567
//! edge_count:  u16      2 * pairs - 1
//! times:       [u32; 16] sorted durations, zero padded
//! pairs:       [u8; (edge_count + 1) / 2]  gap index << 4 | pulse index
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::burst::BurstPair;
use crate::error::IrError;
use crate::timetable::{TimeTable, TIME_SLOTS};

pub const MAGIC: u16 = 0xa567;

/// Highest number of pairs the 16 bit edge counter can describe
pub const MAX_EDGE_PAIRS: usize = (u16::MAX as usize + 1) / 2;

const HEADER_LEN: usize = 4 + TIME_SLOTS * 4;

/// Pulse and gap as 4 bit indices into the time table
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct EdgeIndexPair {
    pulse: u8,
    gap: u8,
}

impl EdgeIndexPair {
    pub fn new(pulse: u8, gap: u8) -> Result<Self, IrError> {
        for index in [pulse, gap] {
            if usize::from(index) >= TIME_SLOTS {
                return Err(IrError::IndexOutOfRange(index));
            }
        }
        Ok(EdgeIndexPair { pulse, gap })
    }

    pub fn pulse(&self) -> u8 {
        self.pulse
    }

    pub fn gap(&self) -> u8 {
        self.gap
    }

    fn to_byte(self) -> u8 {
        self.gap << 4 | self.pulse
    }

    fn from_byte(b: u8) -> Self {
        EdgeIndexPair {
            pulse: b & 0x0f,
            gap: b >> 4,
        }
    }
}

/// Decoded or ready-to-send raw signal
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RawSignal {
    times_index: [u32; TIME_SLOTS],
    edge_pairs: Vec<EdgeIndexPair>,
}

impl RawSignal {
    /// Build a signal from a time table and the pairs indexing into it
    pub fn new(table: &TimeTable, edge_pairs: Vec<EdgeIndexPair>) -> Result<Self, IrError> {
        check_pair_count(edge_pairs.len())?;

        Ok(RawSignal {
            times_index: table.slots(),
            edge_pairs,
        })
    }

    /// Quantize `pairs` against `table`.
    ///
    /// Every duration must be present in the table.
    pub fn quantize(table: &TimeTable, pairs: &[BurstPair]) -> Result<Self, IrError> {
        check_pair_count(pairs.len())?;

        let index = |t: u32| table.index_of(t).ok_or(IrError::UnknownTime(t));

        let edge_pairs = pairs
            .iter()
            .map(|p| EdgeIndexPair::new(index(p.pulse)?, index(p.gap)?))
            .collect::<Result<Vec<_>, _>>()?;

        RawSignal::new(table, edge_pairs)
    }

    /// Stored counter, always `2 * pairs - 1`
    pub fn edge_count(&self) -> u16 {
        (self.edge_pairs.len() * 2 - 1) as u16
    }

    pub fn times_index(&self) -> &[u32; TIME_SLOTS] {
        &self.times_index
    }

    pub fn edge_pairs(&self) -> &[EdgeIndexPair] {
        &self.edge_pairs
    }

    /// Table entries up to the zero padding
    pub fn distinct_times(&self) -> &[u32] {
        let filled = self
            .times_index
            .iter()
            .rposition(|&t| t != 0)
            .map_or(0, |last| last + 1);
        // A zero duration is a real slot when an edge pair points at it
        let referenced = self
            .edge_pairs
            .iter()
            .map(|p| usize::from(p.pulse.max(p.gap)) + 1)
            .max()
            .unwrap_or(0);
        &self.times_index[..filled.max(referenced)]
    }

    /// Durations recovered by table lookup
    pub fn burst_pairs(&self) -> Vec<BurstPair> {
        self.edge_pairs
            .iter()
            .map(|p| {
                BurstPair::new(
                    self.times_index[usize::from(p.pulse)],
                    self.times_index[usize::from(p.gap)],
                )
            })
            .collect()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.edge_pairs.len());

        out.extend_from_slice(&MAGIC.to_le_bytes());
        out.extend_from_slice(&self.edge_count().to_le_bytes());
        for t in &self.times_index {
            out.extend_from_slice(&t.to_le_bytes());
        }
        out.extend(self.edge_pairs.iter().map(|p| p.to_byte()));

        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IrError> {
        if bytes.len() < HEADER_LEN {
            return Err(IrError::ShortSignal(bytes.len()));
        }

        let magic = u16::from_le_bytes([bytes[0], bytes[1]]);
        if magic != MAGIC {
            return Err(IrError::BadMagic(magic));
        }

        let edge_count = u16::from_le_bytes([bytes[2], bytes[3]]);
        if edge_count % 2 == 0 {
            return Err(IrError::BadEdgeCount(edge_count));
        }

        let pair_count = (usize::from(edge_count) + 1) / 2;
        let expected = HEADER_LEN + pair_count;
        if bytes.len() != expected {
            return Err(IrError::SignalLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut times_index = [0; TIME_SLOTS];
        for (slot, chunk) in times_index.iter_mut().zip(bytes[4..HEADER_LEN].chunks_exact(4)) {
            *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let edge_pairs = bytes[HEADER_LEN..]
            .iter()
            .map(|&b| EdgeIndexPair::from_byte(b))
            .collect();

        Ok(RawSignal {
            times_index,
            edge_pairs,
        })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn from_base64(s: &str) -> Result<Self, IrError> {
        let bytes = STANDARD.decode(s.trim())?;
        RawSignal::from_bytes(&bytes)
    }
}

fn check_pair_count(count: usize) -> Result<(), IrError> {
    if count == 0 {
        return Err(IrError::EmptySignal);
    }
    if count > MAX_EDGE_PAIRS {
        return Err(IrError::TooManyEdgePairs(count));
    }
    Ok(())
}
