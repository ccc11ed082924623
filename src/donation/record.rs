use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, Amount, DonationId, DonationState, ProjectId};
use crate::error::{LedgerError, Result};

/// The project a donation went to.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
	pub id: ProjectId,
	pub title: String,
	pub is_public: bool,
}

impl ProjectRef {
	pub fn new(id: &str, title: &str, is_public: bool) -> Self {
		ProjectRef { id: id.to_string(), title: title.to_string(), is_public }
	}
}

/// A contribution from a user to a project.
///
/// `amount` is absent only on donations that never reached `CONFIRMED`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
	pub id: DonationId,
	pub state: DonationState,
	pub amount: Option<Amount>,
	pub time: DateTime<Utc>,
	pub project: ProjectRef,
}

impl Donation {
	pub fn confirmed(id: &str, amount: Amount, time: DateTime<Utc>, project: &ProjectRef) -> Self {
		Donation { id: id.to_string(), state: DonationState::Confirmed, amount: Some(amount), time, project: project.clone() }
	}
	pub fn is_confirmed(&self) -> bool { self.state.is_confirmed() }

	/// Amount of a donation that counts toward totals.
	pub(crate) fn confirmed_amount(&self) -> Result<Option<&Amount>> {
		if !self.is_confirmed() {
			return Ok(None);
		}
		match &self.amount {
			Some(amount) => Ok(Some(amount)),
			None => Err(LedgerError::MissingAmount { donation_id: self.id.clone() }),
		}
	}
}

/// A donation row as read from storage, before validation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
	pub id: DonationId,
	pub state: String,
	pub amount: Option<String>,
	pub time: DateTime<Utc>,
	pub project: ProjectRef,
}

impl TryFrom<&DonationRecord> for Donation {
	type Error = LedgerError;

	fn try_from(record: &DonationRecord) -> Result<Self> {
		let state = record.state.parse::<DonationState>()?;
		let amount = match (&record.amount, state.is_confirmed()) {
			(Some(amount), _) => Some(parse_amount("amount", amount)?),
			(None, true) => return Err(LedgerError::MissingAmount { donation_id: record.id.clone() }),
			(None, false) => None,
		};
		Ok(Donation {
			id: record.id.clone(),
			state,
			amount,
			time: record.time,
			project: record.project.clone(),
		})
	}
}

impl TryFrom<DonationRecord> for Donation {
	type Error = LedgerError;

	fn try_from(record: DonationRecord) -> Result<Self> { Donation::try_from(&record) }
}
