// Definitions that are used throughout all modules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CeError;

// Kind of product a cluster contributes to the expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TermType {
    /// Chemical occupation product; every placement adds 1
    Chemical,
    /// Magnetic spin product; every placement adds the product of site spins
    Magnetic,
}

impl TryFrom<u8> for TermType {
    type Error = CeError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(TermType::Chemical),
            1 => Ok(TermType::Magnetic),
            other => Err(CeError::InvalidCluster(format!(
                "unknown term type flag {other} (expected 0 or 1)"
            ))),
        }
    }
}

impl From<TermType> for u8 {
    fn from(term: TermType) -> Self {
        match term {
            TermType::Chemical => 0,
            TermType::Magnetic => 1,
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermType::Chemical => write!(f, "chemical"),
            TermType::Magnetic => write!(f, "magnetic"),
        }
    }
}
