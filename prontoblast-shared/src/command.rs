//! Play command strings.
//!
//! ```text
//! <pronto hex>                    pronto code, default repeats
//! <code>                          raw code, default frequency
//! raw:<code>[:<frequency>]
//! pronto:<hex>[:<repeats>]
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrError;
use crate::pronto::is_pronto;

/// Frequency used for raw codes when none is given
pub const DEFAULT_FREQUENCY: u32 = 38400;
pub const DEFAULT_REPEATS: i64 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub enum PlayCommand {
    Raw { code: String, frequency: Option<u32> },
    Pronto { pronto: String, repeats: Option<i64> },
}

/// Parameters of the device `ir_play` request
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct PlayParams {
    pub freq: u32,
    pub code: String,
}

impl FromStr for PlayCommand {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(':') {
            let cmd = if is_pronto(s) {
                PlayCommand::Pronto {
                    pronto: s.to_string(),
                    repeats: None,
                }
            } else {
                PlayCommand::Raw {
                    code: s.to_string(),
                    frequency: None,
                }
            };
            return Ok(cmd);
        }

        let mut parts = s.split(':');
        let kind = parts.next().unwrap_or_default();
        let body = parts.next().unwrap_or_default().to_string();
        let args: Vec<&str> = parts.collect();

        if args.len() > 1 {
            return Err(IrError::InvalidCommand(format!(
                "too many arguments for {}: {}",
                kind,
                args.len()
            )));
        }
        let arg = args.first().copied();

        match kind {
            "raw" => Ok(PlayCommand::Raw {
                code: body,
                frequency: arg.map(parse_arg).transpose()?,
            }),
            "pronto" => Ok(PlayCommand::Pronto {
                pronto: body,
                repeats: arg.map(parse_arg).transpose()?,
            }),
            other => Err(IrError::InvalidCommand(format!(
                "unknown command type: {}",
                other
            ))),
        }
    }
}

fn parse_arg<T: FromStr>(arg: &str) -> Result<T, IrError> {
    arg.trim()
        .parse()
        .map_err(|_| IrError::InvalidCommand(format!("invalid argument: {}", arg)))
}
