//! Heatshrink LZSS, as used by the chuangmi remote firmware.
//!
//! Thin adapter over the `heatshrink` crate with a 2^11 byte window and a
//! 2^4 byte lookahead.

use ::heatshrink::{Config, DecodeError, EncodeError};

use super::Compressor;
use crate::error::IrError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Heatshrink {
    window_bits: u8,
    lookahead_bits: u8,
}

impl Default for Heatshrink {
    fn default() -> Self {
        Heatshrink {
            window_bits: 11,
            lookahead_bits: 4,
        }
    }
}

impl Heatshrink {
    fn config(&self) -> Result<Config, IrError> {
        Config::new(self.window_bits, self.lookahead_bits).map_err(IrError::CompressorConfig)
    }
}

impl From<EncodeError> for IrError {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::OutputFull => IrError::CompressorOverflow("compress"),
        }
    }
}

impl From<DecodeError> for IrError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::OutputFull => IrError::CompressorOverflow("decompress"),
        }
    }
}

impl Compressor for Heatshrink {
    fn name(&self) -> &'static str {
        "heatshrink"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, IrError> {
        let cfg = self.config()?;

        // Worst case is all literals at 9 bits each, plus the padded tail
        let mut buf = vec![0; data.len() + data.len() / 8 + 2];
        let out = ::heatshrink::encode(data, &mut buf, &cfg)?;

        log::debug!("heatshrink: {} -> {} bytes", data.len(), out.len());
        Ok(out.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, IrError> {
        let cfg = self.config()?;

        // A back-reference yields at most one byte per input bit. The
        // decoder also needs one spare byte past the end of its output.
        let mut buf = vec![0; data.len() * 8 + 1];
        let out = ::heatshrink::decode(data, &mut buf, &cfg)?;

        Ok(out.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        let hs = Heatshrink::default();
        assert_eq!(hs.compress(b"ab").unwrap(), vec![0xb0, 0xd8, 0x80]);
        assert_eq!(hs.decompress(&[0xb0, 0xd8, 0x80]).unwrap(), b"ab");
    }

    #[test]
    fn overlapping_backref() {
        let hs = Heatshrink::default();
        let packed = hs.compress(b"aaaaa").unwrap();

        // literal 'a', then offset 1 length 4
        assert_eq!(packed, vec![0xb0, 0x80, 0x01, 0x80]);
        assert_eq!(hs.decompress(&packed).unwrap(), b"aaaaa");
    }

    #[test]
    fn learn_payload() {
        let hs = Heatshrink::default();
        let payload = b"learnZ6UDAKQBAAAMBAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABAQ==";

        let packed = hs.compress(payload).unwrap();
        assert!(packed.len() < payload.len());
        assert_eq!(hs.decompress(&packed).unwrap(), payload.to_vec());
    }

    #[test]
    fn incompressible_fits_output() {
        let hs = Heatshrink::default();
        let data: Vec<u8> = (0..=255).collect();

        let packed = hs.compress(&data).unwrap();
        assert_eq!(packed.len(), (data.len() * 9 + 7) / 8);
        assert_eq!(hs.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn long_run_fits_output() {
        let hs = Heatshrink::default();
        let data = vec![0x41; 4096];

        let packed = hs.compress(&data).unwrap();
        assert_eq!(hs.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn empty() {
        let hs = Heatshrink::default();
        assert!(hs.compress(b"").unwrap().is_empty());
        assert!(hs.decompress(b"").unwrap().is_empty());
    }

    #[test]
    fn backref_before_start_reads_zero() {
        let hs = Heatshrink::default();
        // tag 0, index 0 (offset 1), count 1 (length 2)
        let out = hs.decompress(&[0x00, 0x01]).unwrap();
        assert_eq!(out, vec![0, 0]);
    }

    #[test]
    fn overflow_maps_to_capacity() {
        let err: IrError = EncodeError::OutputFull.into();
        assert_eq!(err.kind(), crate::ErrorKind::Capacity);

        let err: IrError = DecodeError::OutputFull.into();
        assert_eq!(err.kind(), crate::ErrorKind::Capacity);
    }
}
