use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrError;

/// Device families that differ in how they expect codes to be wrapped
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DeviceModel {
    /// Plain base64 raw signal
    #[default]
    ChuangmiIr,
    /// Raw signal behind an additional heatshrink layer
    ChuangmiRemote,
}

impl DeviceModel {
    pub fn is_compressed(&self) -> bool {
        matches!(self, DeviceModel::ChuangmiRemote)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceModel::ChuangmiIr => "chuangmi.ir.v2",
            DeviceModel::ChuangmiRemote => "chuangmi.remote.h102a03",
        }
    }
}

impl FromStr for DeviceModel {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ir" | "chuangmi.ir.v2" => Ok(DeviceModel::ChuangmiIr),
            "remote" | "chuangmi.remote.h102a03" | "chuangmi.remote.v2" => {
                Ok(DeviceModel::ChuangmiRemote)
            }
            _ => Err(IrError::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
