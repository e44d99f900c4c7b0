//! Pronto Hex to Chuangmi IR code conversion.
//!
//! ```
//! let (code, frequency) = prontoblast_shared::encode_pronto(
//!     "0000 006D 0002 0000 0010 0010 0010 0010",
//!     1,
//! ).unwrap();
//!
//! assert_eq!(frequency, 38029);
//! assert!(code.starts_with("Z6U"));
//! ```

pub mod burst;
pub mod command;
pub mod compress;
pub mod encoder;
pub mod error;
pub mod model;
pub mod pronto;
pub mod raw;
pub mod timetable;

pub use burst::{BurstPair, Carrier};
pub use command::{PlayCommand, PlayParams};
pub use compress::Compressor;
pub use encoder::{encode_pronto, encode_signal, raw_signal, EncodedSignal, SignalEncoder};
pub use error::{ErrorKind, IrError};
pub use model::DeviceModel;
pub use pronto::{ProntoCode, ProntoSignal};
pub use raw::{EdgeIndexPair, RawSignal};
pub use timetable::TimeTable;
