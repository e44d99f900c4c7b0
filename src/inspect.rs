use std::fs::File;
use std::path::PathBuf;

use prontoblast_shared::SignalEncoder;

use crate::vcdutils::VcdWriter;

pub fn command_inspect(
    encoder: &SignalEncoder,
    code: &str,
    vcd_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let raw = encoder.decode_payload(code)?;

    log::debug!("Decoded raw signal: {:?}", raw);

    println!(
        "Edge count: {}, pairs: {}",
        raw.edge_count(),
        raw.edge_pairs().len()
    );
    println!("Times: {:?}", raw.distinct_times());

    let pairs = raw.burst_pairs();
    for (idx, (pair, burst)) in raw.edge_pairs().iter().zip(&pairs).enumerate() {
        println!(
            "{:4}\t[{:2} {:2}]\t+{}\t-{}",
            idx,
            pair.pulse(),
            pair.gap(),
            burst.pulse,
            burst.gap
        );
    }

    if let Some(path) = vcd_path {
        let file = File::create(&path)?;
        let mut vcd = VcdWriter::new(file);
        vcd.init()?;
        vcd.write_pairs(&pairs)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
