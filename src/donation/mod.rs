use std::collections::HashMap;

use bigdecimal::Zero;
use tracing::debug;

use crate::core::{Amount, ProjectId};
use crate::error::Result;

pub use group::DonationGroup;
pub use record::{Donation, DonationRecord, ProjectRef};

pub mod group;
pub mod record;

/// Groups a user's confirmed donations by project, most recently supported first.
///
/// Groups whose latest donations share a timestamp keep the order in which
/// their project first appeared. Fails on a confirmed donation without an
/// amount, returning no groups at all.
#[tracing::instrument(level = "debug", skip_all, fields(donations = donations.len()))]
pub fn compute_donation_groups(donations: &[Donation]) -> Result<Vec<DonationGroup>> {
	let mut slots: HashMap<ProjectId, usize> = HashMap::new();
	let mut groups: Vec<DonationGroup> = Vec::new();
	for donation in donations {
		let amount = match donation.confirmed_amount()? {
			Some(amount) => amount,
			None => continue,
		};
		match slots.get(&donation.project.id) {
			Some(&slot) => groups[slot].absorb(amount, donation.time),
			None => {
				slots.insert(donation.project.id.clone(), groups.len());
				groups.push(DonationGroup::open(&donation.project, amount, donation.time));
			}
		}
	}
	groups.sort_by(|a, b| b.latest_date.cmp(&a.latest_date));
	debug!(groups = groups.len(), "grouped donations");
	Ok(groups)
}

/// Sum of every confirmed donation.
pub fn total_confirmed(donations: &[Donation]) -> Result<Amount> {
	let mut total = Amount::zero();
	for donation in donations {
		if let Some(amount) = donation.confirmed_amount()? {
			total += amount;
		}
	}
	Ok(total)
}

/// Validates raw storage rows, failing on the first malformed one, then groups them.
pub fn group_donation_records(records: &[DonationRecord]) -> Result<Vec<DonationGroup>> {
	let donations = records.iter().map(Donation::try_from).collect::<Result<Vec<_>>>()?;
	compute_donation_groups(&donations)
}
