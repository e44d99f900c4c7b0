use std::io;

use vcd::{self, SimulationCommand, TimescaleUnit, Value};

use prontoblast_shared::BurstPair;

/// Writes burst pairs as a single wire waveform with 1 us resolution
pub struct VcdWriter<W: io::Write> {
    vcd: vcd::Writer<W>,
    timestamp: u64,
    wire_id: vcd::IdCode,
}

impl<W: io::Write> VcdWriter<W> {
    pub fn new(w: W) -> Self {
        let vcd = vcd::Writer::new(w);

        Self {
            vcd,
            timestamp: 0,
            wire_id: vcd::IdCode::FIRST,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        let writer = &mut self.vcd;

        writer.timescale(1, TimescaleUnit::US)?;
        writer.add_module("top")?;

        let id = writer.add_wire(1, "ir")?;
        self.wire_id = id;

        writer.upscope()?;
        writer.enddefinitions()?;

        // Idle low
        writer.begin(SimulationCommand::Dumpvars)?;
        writer.change_scalar(id, Value::V0)?;
        writer.end()?;

        Ok(())
    }

    /// Carrier on for each pulse, off for each gap
    pub fn write_pairs(&mut self, pairs: &[BurstPair]) -> io::Result<()> {
        let mut ts = 0;

        for pair in pairs {
            self.write_value(ts, true)?;
            self.write_value(ts + u64::from(pair.pulse), false)?;
            ts += pair.duration();
        }

        self.add_offset(ts);

        Ok(())
    }

    pub fn write_value(&mut self, ts: u64, high: bool) -> io::Result<()> {
        let offseted_ts = self.timestamp + ts;

        self.vcd.timestamp(offseted_ts)?;
        let value = if high { Value::V1 } else { Value::V0 };
        self.vcd.change_scalar(self.wire_id, value)?;

        Ok(())
    }

    pub fn add_offset(&mut self, offset: u64) {
        self.timestamp += offset;
    }
}
