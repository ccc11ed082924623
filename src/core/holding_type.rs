use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Enumerates the claims a Holding can make against a certificate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingType {
	Ownership,
	Reservation,
	Consumption,
}

impl HoldingType {
	pub fn all() -> [HoldingType; 3] {
		[HoldingType::Ownership, HoldingType::Reservation, HoldingType::Consumption]
	}
	pub fn as_str(&self) -> &'static str {
		match self {
			HoldingType::Ownership => "OWNERSHIP",
			HoldingType::Reservation => "RESERVATION",
			HoldingType::Consumption => "CONSUMPTION",
		}
	}
}

impl fmt::Display for HoldingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for HoldingType {
	type Err = LedgerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		HoldingType::all()
			.into_iter()
			.find(|it| it.as_str() == s)
			.ok_or_else(|| LedgerError::UnknownHoldingType(s.to_string()))
	}
}
