//! Byte stream compressors for device models that wrap their codes.
//!
//! The compressor is injected into the encoder. When no implementation is
//! compiled in, [`detect`] hands out [`Unavailable`], which fails every
//! call instead of passing data through untouched.

#[cfg(feature = "heatshrink")]
mod heatshrink;

#[cfg(feature = "heatshrink")]
pub use self::heatshrink::Heatshrink;

use crate::error::IrError;

pub trait Compressor: Send + Sync {
    /// Name of the algorithm, used in logs and errors
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, IrError>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, IrError>;
}

/// Stand-in for a compressor that is not present in this build
#[derive(Debug, Clone, Copy)]
pub struct Unavailable {
    name: &'static str,
}

impl Unavailable {
    pub fn new(name: &'static str) -> Self {
        Unavailable { name }
    }
}

impl Default for Unavailable {
    fn default() -> Self {
        Unavailable::new("heatshrink")
    }
}

impl Compressor for Unavailable {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        false
    }

    fn compress(&self, _data: &[u8]) -> Result<Vec<u8>, IrError> {
        Err(IrError::CompressorUnavailable(self.name))
    }

    fn decompress(&self, _data: &[u8]) -> Result<Vec<u8>, IrError> {
        Err(IrError::CompressorUnavailable(self.name))
    }
}

/// The compressor the device firmware expects, if this build has it
pub fn detect() -> Box<dyn Compressor> {
    #[cfg(feature = "heatshrink")]
    {
        Box::new(Heatshrink::default())
    }

    #[cfg(not(feature = "heatshrink"))]
    {
        log::debug!("Built without heatshrink support");
        Box::new(Unavailable::default())
    }
}
