use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Amount;
use crate::donation::record::ProjectRef;

/// Confirmed donations from one user to one project.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationGroup {
	pub(crate) project: ProjectRef,
	pub(crate) total_amount: Amount,
	pub(crate) earliest_date: DateTime<Utc>,
	pub(crate) latest_date: DateTime<Utc>,
	pub(crate) donation_count: usize,
}

impl DonationGroup {
	pub(crate) fn open(project: &ProjectRef, amount: &Amount, time: DateTime<Utc>) -> Self {
		DonationGroup {
			project: project.clone(),
			total_amount: amount.clone(),
			earliest_date: time,
			latest_date: time,
			donation_count: 1,
		}
	}
	pub(crate) fn absorb(&mut self, amount: &Amount, time: DateTime<Utc>) {
		self.total_amount += amount;
		self.earliest_date = self.earliest_date.min(time);
		self.latest_date = self.latest_date.max(time);
		self.donation_count += 1;
	}
	pub fn project(&self) -> &ProjectRef { &self.project }
	pub fn total_amount(&self) -> &Amount { &self.total_amount }
	pub fn earliest_date(&self) -> DateTime<Utc> { self.earliest_date }
	pub fn latest_date(&self) -> DateTime<Utc> { self.latest_date }
	pub fn donation_count(&self) -> usize { self.donation_count }
}
