//! Pronto Hex parsing.
//!
//! Only the raw (learned) dialect is supported: the first word must be
//! `0000`. The layout is a sequence of big-endian 16 bit words:
//!
//! ```text
//! 0000 <carrier ticks> <intro pairs> <repeat pairs> <intro ...> <repeat ...>
//! ```
//!
//! Parsing is done in two passes. [`ProntoCode::parse`] only checks the
//! structure and keeps the durations as carrier ticks, [`ProntoSignal`]
//! then converts them to microseconds using the carrier.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::burst::{BurstPair, Carrier};
use crate::error::IrError;

const HEADER_WORDS: usize = 4;

fn pronto_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^([0-9a-f]{4}\s?){3,}[0-9a-f]{4}$").expect("static pronto regex")
    })
}

/// Shape check: at least four groups of four hex digits
pub fn is_pronto(s: &str) -> bool {
    pronto_re().is_match(s)
}

/// Pulse and gap as raw carrier tick counts
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickPair {
    pub pulse: u16,
    pub gap: u16,
}

/// Structurally parsed Pronto code, durations still in carrier ticks
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProntoCode {
    pub carrier: Carrier,
    pub intro: Vec<TickPair>,
    pub repeat: Vec<TickPair>,
}

impl ProntoCode {
    pub fn parse(s: &str) -> Result<Self, IrError> {
        let words = hex_words(s)?;

        let marker = words[0];
        if marker != 0 {
            return Err(IrError::UnsupportedPronto(marker));
        }

        let carrier = Carrier::new(words[1]);
        if carrier.ticks == 0 {
            return Err(IrError::InvalidCarrier(carrier.ticks));
        }

        let intro_len = usize::from(words[2]);
        let repeat_len = usize::from(words[3]);

        let body = &words[HEADER_WORDS..];
        let (intro, rest) = take_pairs(body, intro_len, "intro")?;
        let (repeat, rest) = take_pairs(rest, repeat_len, "repeat")?;

        if !rest.is_empty() {
            log::warn!("Ignoring {} trailing pronto words", rest.len());
        }

        log::debug!(
            "Parsed pronto: carrier {} ticks, {} intro pairs, {} repeat pairs",
            carrier.ticks,
            intro.len(),
            repeat.len()
        );

        Ok(ProntoCode {
            carrier,
            intro,
            repeat,
        })
    }
}

impl FromStr for ProntoCode {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProntoCode::parse(s)
    }
}

fn hex_words(s: &str) -> Result<Vec<u16>, IrError> {
    let s = s.trim();
    if !is_pronto(s) {
        return Err(IrError::InvalidProntoHex);
    }

    let digits: String = s.split_whitespace().collect();
    let bytes = hex::decode(digits).map_err(|_| IrError::InvalidProntoHex)?;

    Ok(bytes
        .chunks_exact(2)
        .map(|w| u16::from_be_bytes([w[0], w[1]]))
        .collect())
}

fn take_pairs<'a>(
    words: &'a [u16],
    count: usize,
    section: &'static str,
) -> Result<(Vec<TickPair>, &'a [u16]), IrError> {
    let needed = count * 2;
    if words.len() < needed {
        return Err(IrError::TruncatedPronto {
            section,
            declared: count,
            available: words.len() / 2,
        });
    }

    let (pairs, rest) = words.split_at(needed);
    let pairs = pairs
        .chunks_exact(2)
        .map(|p| TickPair {
            pulse: p[0],
            gap: p[1],
        })
        .collect();

    Ok((pairs, rest))
}

/// Pronto signal with durations converted to microseconds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProntoSignal {
    pub carrier: Carrier,
    pub intro: Vec<BurstPair>,
    pub repeat: Vec<BurstPair>,
}

impl ProntoSignal {
    pub fn parse(s: &str) -> Result<Self, IrError> {
        ProntoCode::parse(s).map(ProntoSignal::from)
    }

    pub fn modulation_period(&self) -> f64 {
        self.carrier.modulation_period()
    }

    pub fn frequency(&self) -> f64 {
        self.carrier.frequency()
    }

    pub fn frequency_hz(&self) -> u32 {
        self.carrier.frequency_hz()
    }
}

impl From<ProntoCode> for ProntoSignal {
    fn from(code: ProntoCode) -> Self {
        let carrier = code.carrier;
        let convert = |pairs: Vec<TickPair>| -> Vec<BurstPair> {
            pairs
                .into_iter()
                .map(|p| BurstPair::new(carrier.ticks_to_us(p.pulse), carrier.ticks_to_us(p.gap)))
                .collect()
        };

        ProntoSignal {
            carrier,
            intro: convert(code.intro),
            repeat: convert(code.repeat),
        }
    }
}

impl FromStr for ProntoSignal {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProntoSignal::parse(s)
    }
}
