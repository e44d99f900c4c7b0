//! Pronto to device code encoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::burst::BurstPair;
use crate::command::{PlayCommand, PlayParams, DEFAULT_FREQUENCY, DEFAULT_REPEATS};
use crate::compress::{self, Compressor, Unavailable};
use crate::error::IrError;
use crate::model::DeviceModel;
use crate::pronto::ProntoSignal;
use crate::raw::{RawSignal, MAX_EDGE_PAIRS};
use crate::timetable::TimeTable;

/// Prefix the remote firmware expects in front of a compressed code
pub const LEARN_PREFIX: &str = "learn";

/// Transmittable code together with its carrier frequency
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct EncodedSignal {
    pub code: String,
    pub frequency: u32,
}

/// Quantize an intro and a repeated part into a raw signal.
///
/// A signal without intro gets one extra repetition so the repeated
/// part is sent at least once. The time table is built from the intro
/// and a single copy of the repeated part, the transmitted pairs contain
/// `repeats` copies.
pub fn raw_signal(
    intro: &[BurstPair],
    repeat: &[BurstPair],
    repeats: usize,
) -> Result<RawSignal, IrError> {
    let repeats = if intro.is_empty() {
        repeats.saturating_add(1)
    } else {
        repeats
    };

    let scanned = if repeats > 0 { repeat } else { &[] };
    let table = TimeTable::from_pairs(intro.iter().chain(scanned))?;

    let total = repeat
        .len()
        .checked_mul(repeats)
        .and_then(|n| n.checked_add(intro.len()))
        .unwrap_or(usize::MAX);
    if total > MAX_EDGE_PAIRS {
        return Err(IrError::TooManyEdgePairs(total));
    }

    let mut pairs = Vec::with_capacity(total);
    pairs.extend_from_slice(intro);
    for _ in 0..repeats {
        pairs.extend_from_slice(repeat);
    }

    log::debug!(
        "Quantized {} pairs onto {} distinct times",
        pairs.len(),
        table.len()
    );

    RawSignal::quantize(&table, &pairs)
}

fn check_repeats(repeats: i64) -> Result<usize, IrError> {
    usize::try_from(repeats).map_err(|_| IrError::InvalidRepeats(repeats))
}

/// Encode a parsed signal into the plain base64 device code
pub fn encode_signal(signal: &ProntoSignal, repeats: i64) -> Result<EncodedSignal, IrError> {
    let repeats = check_repeats(repeats)?;
    let raw = raw_signal(&signal.intro, &signal.repeat, repeats)?;

    Ok(EncodedSignal {
        code: raw.to_base64(),
        frequency: signal.frequency_hz(),
    })
}

/// Encode a Pronto Hex code into the plain base64 device code and frequency
pub fn encode_pronto(pronto: &str, repeats: i64) -> Result<(String, u32), IrError> {
    check_repeats(repeats)?;
    let signal = ProntoSignal::parse(pronto)?;
    let encoded = encode_signal(&signal, repeats)?;
    Ok((encoded.code, encoded.frequency))
}

/// Encoder configured for one device model
pub struct SignalEncoder {
    model: DeviceModel,
    compressor: Box<dyn Compressor>,
}

impl SignalEncoder {
    /// Encoder for `model` using the compressor built into this crate
    pub fn new(model: DeviceModel) -> Result<Self, IrError> {
        if model.is_compressed() {
            SignalEncoder::with_compressor(model, compress::detect())
        } else {
            SignalEncoder::with_compressor(model, Box::new(Unavailable::default()))
        }
    }

    /// Encoder for `model` using `compressor`.
    ///
    /// Models that wrap their codes refuse a compressor that is not available.
    pub fn with_compressor(
        model: DeviceModel,
        compressor: Box<dyn Compressor>,
    ) -> Result<Self, IrError> {
        if model.is_compressed() && !compressor.is_available() {
            return Err(IrError::CompressorUnavailable(compressor.name()));
        }

        Ok(SignalEncoder { model, compressor })
    }

    pub fn model(&self) -> DeviceModel {
        self.model
    }

    pub fn encode_pronto(&self, pronto: &str, repeats: i64) -> Result<EncodedSignal, IrError> {
        let (code, frequency) = encode_pronto(pronto, repeats)?;
        Ok(EncodedSignal {
            code: self.wrap(&code)?,
            frequency,
        })
    }

    /// Apply the model specific envelope to a plain base64 code
    pub fn wrap(&self, code: &str) -> Result<String, IrError> {
        if !self.model.is_compressed() {
            return Ok(code.to_string());
        }

        let payload = format!("{}{}", LEARN_PREFIX, code);
        let packed = self.compressor.compress(payload.as_bytes())?;
        Ok(STANDARD.encode(packed))
    }

    /// Strip the model specific envelope and decode the raw signal
    pub fn decode_payload(&self, payload: &str) -> Result<RawSignal, IrError> {
        if !self.model.is_compressed() {
            return RawSignal::from_base64(payload);
        }

        let packed = STANDARD.decode(payload.trim())?;
        let unpacked = String::from_utf8(self.compressor.decompress(&packed)?)?;
        let code = unpacked
            .strip_prefix(LEARN_PREFIX)
            .ok_or(IrError::MissingLearnPrefix)?;

        RawSignal::from_base64(code)
    }

    /// Parameters for the device play request
    pub fn play_params(&self, cmd: &PlayCommand) -> Result<PlayParams, IrError> {
        match cmd {
            PlayCommand::Raw { code, frequency } => Ok(PlayParams {
                freq: frequency.unwrap_or(DEFAULT_FREQUENCY),
                code: code.clone(),
            }),
            PlayCommand::Pronto { pronto, repeats } => {
                let encoded = self.encode_pronto(pronto, repeats.unwrap_or(DEFAULT_REPEATS))?;
                Ok(PlayParams {
                    freq: encoded.frequency,
                    code: encoded.code,
                })
            }
        }
    }
}
