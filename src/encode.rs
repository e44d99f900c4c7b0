use prontoblast_shared::{PlayCommand, ProntoSignal, SignalEncoder};

pub fn command_encode(
    encoder: &SignalEncoder,
    pronto: &str,
    repeats: i64,
    json: bool,
) -> anyhow::Result<()> {
    log::info!("Encoding for {}", encoder.model());

    let encoded = encoder.encode_pronto(pronto, repeats)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    } else {
        println!("Frequency: {}", encoded.frequency);
        println!("{}", encoded.code);
    }

    Ok(())
}

pub fn command_parse(pronto: &str, json: bool) -> anyhow::Result<()> {
    let signal = ProntoSignal::parse(pronto)?;

    if json {
        let value = serde_json::json!({
            "carrier_ticks": signal.carrier.ticks,
            "modulation_period": signal.modulation_period(),
            "frequency": signal.frequency(),
            "intro": signal.intro,
            "repeat": signal.repeat,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Carrier: {} ticks, period {:.4} us, {:.1} Hz",
        signal.carrier.ticks,
        signal.modulation_period(),
        signal.frequency()
    );

    for (name, pairs) in [("Intro", &signal.intro), ("Repeat", &signal.repeat)] {
        println!("{} ({} pairs):", name, pairs.len());
        for pair in pairs.iter() {
            println!("\t+{}\t-{}", pair.pulse, pair.gap);
        }
    }

    Ok(())
}

pub fn command_play(encoder: &SignalEncoder, command: &str) -> anyhow::Result<()> {
    let cmd: PlayCommand = command.parse()?;
    log::debug!("Play command: {:?}", cmd);

    let params = encoder.play_params(&cmd)?;
    println!("{}", serde_json::to_string(&params)?);

    Ok(())
}
