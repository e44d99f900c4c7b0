use serde::{Deserialize, Serialize};

/// Length of one Pronto carrier tick in microseconds
pub const PRONTO_CLOCK_US: f64 = 0.241246;

/// Carrier described by its Pronto tick count
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Carrier {
    pub ticks: u16,
}

impl Carrier {
    pub fn new(ticks: u16) -> Self {
        Carrier { ticks }
    }

    /// Duration of one modulation period in microseconds
    pub fn modulation_period(&self) -> f64 {
        f64::from(self.ticks) * PRONTO_CLOCK_US
    }

    pub fn frequency(&self) -> f64 {
        1_000_000.0 / self.modulation_period()
    }

    /// Frequency rounded to whole hertz, as the device expects it
    pub fn frequency_hz(&self) -> u32 {
        self.frequency().round_ties_even() as u32
    }

    /// Convert a raw Pronto tick count to whole microseconds
    pub fn ticks_to_us(&self, ticks: u16) -> u32 {
        (f64::from(ticks) * self.modulation_period()) as u32
    }
}

/// One carrier-on pulse followed by one carrier-off gap, in microseconds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BurstPair {
    pub pulse: u32,
    pub gap: u32,
}

impl BurstPair {
    pub fn new(pulse: u32, gap: u32) -> Self {
        BurstPair { pulse, gap }
    }

    /// Total length of the pair
    pub fn duration(&self) -> u64 {
        u64::from(self.pulse) + u64::from(self.gap)
    }
}
