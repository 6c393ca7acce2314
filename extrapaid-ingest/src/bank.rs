//! Supported card issuers and the statement layout each one prints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::parsers::layout::{LineLayout, MarkerPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bank {
    Sbi,
    Axis,
    Kotak,
    IdfcFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bank '{0}' (expected one of: SBI, Axis Bank, Kotak, IDFC FIRST)")]
pub struct UnknownBank(pub String);

impl Bank {
    /// All supported banks, in selector order
    pub const ALL: [Bank; 4] = [Bank::Sbi, Bank::Axis, Bank::Kotak, Bank::IdfcFirst];

    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Sbi => "SBI",
            Bank::Axis => "Axis Bank",
            Bank::Kotak => "Kotak",
            Bank::IdfcFirst => "IDFC FIRST",
        }
    }

    /// Short identifier used in config files and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Bank::Sbi => "sbi",
            Bank::Axis => "axis",
            Bank::Kotak => "kotak",
            Bank::IdfcFirst => "idfc-first",
        }
    }

    /// Transaction row layout printed by this bank.
    ///
    /// SBI:   `12/09/2025 AMAZON *Mktplace 1,234.56 DR`
    /// Axis:  `12-09-2025 ZOMATO*ORDER 345.00 DR`
    /// Kotak: same shape as Axis
    /// IDFC:  `12-09-2025 Merchant Desc Dr 345.00`
    pub fn layout(&self) -> LineLayout {
        match self {
            Bank::Sbi => LineLayout::new("/", MarkerPosition::AfterAmount),
            Bank::Axis | Bank::Kotak => LineLayout::new("-/", MarkerPosition::AfterAmount),
            Bank::IdfcFirst => LineLayout::new("-", MarkerPosition::BeforeAmount),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Bank {
    type Err = UnknownBank;

    /// Accepts display names and slugs, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "sbi" | "sbicard" => Ok(Bank::Sbi),
            "axis" | "axisbank" => Ok(Bank::Axis),
            "kotak" | "kotakmahindra" | "kotakbank" => Ok(Bank::Kotak),
            "idfc" | "idfcfirst" | "idfcfirstbank" => Ok(Bank::IdfcFirst),
            _ => Err(UnknownBank(s.trim().to_string())),
        }
    }
}
