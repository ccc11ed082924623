use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Settlement state of a Donation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationState {
	Pending,
	Confirmed,
	Rejected,
}

impl DonationState {
	pub fn all() -> [DonationState; 3] {
		[DonationState::Pending, DonationState::Confirmed, DonationState::Rejected]
	}
	pub fn as_str(&self) -> &'static str {
		match self {
			DonationState::Pending => "PENDING",
			DonationState::Confirmed => "CONFIRMED",
			DonationState::Rejected => "REJECTED",
		}
	}
	pub fn is_confirmed(&self) -> bool { *self == DonationState::Confirmed }
}

impl fmt::Display for DonationState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for DonationState {
	type Err = LedgerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		DonationState::all()
			.into_iter()
			.find(|it| it.as_str() == s)
			.ok_or_else(|| LedgerError::UnknownDonationState(s.to_string()))
	}
}
