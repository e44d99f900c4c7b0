use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::burst::BurstPair;
use crate::error::IrError;

/// Number of slots in the table, addressable with a 4 bit index
pub const TIME_SLOTS: usize = 16;

/// Sorted set of the distinct durations used by a signal
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct TimeTable {
    times: Vec<u32>,
}

impl TimeTable {
    /// Collect every pulse and gap duration of `pairs`
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, IrError>
    where
        I: IntoIterator<Item = &'a BurstPair>,
    {
        let set: BTreeSet<u32> = pairs
            .into_iter()
            .flat_map(|p| [p.pulse, p.gap])
            .collect();

        if set.len() > TIME_SLOTS {
            return Err(IrError::TooManyTimes(set.len()));
        }

        Ok(TimeTable {
            times: set.into_iter().collect(),
        })
    }

    /// The distinct values, ascending
    pub fn times(&self) -> &[u32] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Slot index of `time`, if it is in the table
    pub fn index_of(&self, time: u32) -> Option<u8> {
        self.times.binary_search(&time).ok().map(|i| i as u8)
    }

    /// The table zero padded to the full 16 slots
    pub fn slots(&self) -> [u32; TIME_SLOTS] {
        let mut slots = [0; TIME_SLOTS];
        slots[..self.times.len()].copy_from_slice(&self.times);
        slots
    }
}
