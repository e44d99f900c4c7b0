use thiserror::Error;

/// Classification of codec failures.
///
/// Every [`IrError`] maps onto exactly one kind. None of them are worth
/// retrying: the same input always fails the same way.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// Input text or blob has the wrong shape or an unsupported dialect
    Format,
    /// Declared counts or lengths disagree with the available data
    Structural,
    /// The signal does not fit the 16 slot time table or the edge counter
    Capacity,
    /// Caller supplied argument outside its domain
    Validation,
    /// Optional compressor requested but not available
    Capability,
}

#[derive(Debug, Error)]
pub enum IrError {
    #[error("invalid pronto hex string")]
    InvalidProntoHex,

    #[error("unsupported pronto format: {0:#06x} (only raw 0000 codes are supported)")]
    UnsupportedPronto(u16),

    #[error("invalid pronto carrier: {0} ticks")]
    InvalidCarrier(u16),

    #[error("truncated pronto data: {section} declares {declared} pairs, {available} available")]
    TruncatedPronto {
        section: &'static str,
        declared: usize,
        available: usize,
    },

    #[error("too many distinct timing values: {0} (max 16)")]
    TooManyTimes(usize),

    #[error("too many edge pairs: {0} (max 32768)")]
    TooManyEdgePairs(usize),

    #[error("invalid repeats value: {0}")]
    InvalidRepeats(i64),

    #[error("signal contains no burst pairs")]
    EmptySignal,

    #[error("time index {0} out of range (max 15)")]
    IndexOutOfRange(u8),

    #[error("duration {0}us is not in the time table")]
    UnknownTime(u32),

    #[error("invalid play command: {0}")]
    InvalidCommand(String),

    #[error("unknown device model: {0}")]
    UnknownModel(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid raw signal magic: {0:#06x}")]
    BadMagic(u16),

    #[error("raw signal too short: {0} bytes")]
    ShortSignal(usize),

    #[error("edge count {0} is not of the form 2n-1")]
    BadEdgeCount(u16),

    #[error("raw signal length mismatch: expected {expected} bytes, got {actual}")]
    SignalLength { expected: usize, actual: usize },

    #[error("compressed payload is missing the learn prefix")]
    MissingLearnPrefix,

    #[error("payload is not valid utf-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("compressor unavailable: {0}")]
    CompressorUnavailable(&'static str),

    #[error("invalid compressor parameters: {0}")]
    CompressorConfig(&'static str),

    #[error("compressor output buffer full during {0}")]
    CompressorOverflow(&'static str),
}

impl IrError {
    pub fn kind(&self) -> ErrorKind {
        use IrError::*;

        match self {
            InvalidProntoHex | UnsupportedPronto(_) | InvalidCarrier(_) => ErrorKind::Format,
            Base64(_) | BadMagic(_) | MissingLearnPrefix | InvalidUtf8(_) => ErrorKind::Format,
            TruncatedPronto { .. } | ShortSignal(_) | BadEdgeCount(_) | SignalLength { .. } => {
                ErrorKind::Structural
            }
            TooManyTimes(_) | TooManyEdgePairs(_) | CompressorOverflow(_) => ErrorKind::Capacity,
            InvalidRepeats(_) | EmptySignal | IndexOutOfRange(_) | UnknownTime(_) => {
                ErrorKind::Validation
            }
            InvalidCommand(_) | UnknownModel(_) => ErrorKind::Validation,
            CompressorUnavailable(_) | CompressorConfig(_) => ErrorKind::Capability,
        }
    }

    /// Codec errors are deterministic, re-running the same input fails identically
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(IrError::UnsupportedPronto(0x0100).kind(), ErrorKind::Format);
        assert_eq!(
            IrError::TruncatedPronto {
                section: "intro",
                declared: 2,
                available: 1
            }
            .kind(),
            ErrorKind::Structural
        );
        assert_eq!(IrError::TooManyTimes(17).kind(), ErrorKind::Capacity);
        assert_eq!(IrError::InvalidRepeats(-1).kind(), ErrorKind::Validation);
        assert_eq!(
            IrError::CompressorUnavailable("heatshrink").kind(),
            ErrorKind::Capability
        );
    }

    #[test]
    fn display() {
        let e = IrError::TooManyTimes(17);
        assert!(e.to_string().contains("17"));
        assert!(!e.is_retryable());

        let e = IrError::UnsupportedPronto(0x0100);
        assert!(e.to_string().contains("0x0100"));
    }
}
