use std::collections::BTreeMap;

use bigdecimal::Zero;
use tracing::{debug, warn};

use crate::core::{to_percent, Amount, CertificateId, HoldingType};
use crate::error::{LedgerError, Result};

pub use holding::{Holding, HoldingRecord};
pub use summary::HoldingsSummary;

pub mod holding;
pub mod summary;

/// A source of holdings for one certificate.
pub trait CertificateLedger {
	/// All Holdings recorded against the certificate.
	fn holdings(&self) -> &[Holding];
	/// Available, reserved and consumed percentages of the certificate.
	fn summary(&self) -> HoldingsSummary { compute_holdings_summary(self.holdings()) }
}

impl CertificateLedger for [Holding] {
	fn holdings(&self) -> &[Holding] { self }
}

impl CertificateLedger for Vec<Holding> {
	fn holdings(&self) -> &[Holding] { self.as_slice() }
}

/// Sums of holding sizes per type, in certificate fractions.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct TypeSums {
	ownership: Amount,
	reservation: Amount,
	consumption: Amount,
}

impl TypeSums {
	fn collect(holdings: &[Holding]) -> Self {
		let mut sums = TypeSums { ownership: Amount::zero(), reservation: Amount::zero(), consumption: Amount::zero() };
		for holding in holdings {
			let bucket = match holding.holding_type {
				HoldingType::Ownership => &mut sums.ownership,
				HoldingType::Reservation => &mut sums.reservation,
				HoldingType::Consumption => &mut sums.consumption,
			};
			*bucket += &holding.size;
		}
		sums
	}
}

/// Computes the available, reserved and consumed percentages of a certificate.
///
/// Holdings are not checked to belong to a single certificate; see
/// [`summarize_certificate`] for the checked variant. Negative availability
/// is returned as-is.
#[tracing::instrument(level = "debug", skip_all, fields(holdings = holdings.len()))]
pub fn compute_holdings_summary(holdings: &[Holding]) -> HoldingsSummary {
	if holdings.is_empty() {
		return HoldingsSummary::zero();
	}
	let sums = TypeSums::collect(holdings);
	let consumed = to_percent(&sums.consumption);
	let reserved = to_percent(&sums.reservation);
	let available = to_percent(&sums.ownership) - &reserved;
	let summary = HoldingsSummary { available, reserved, consumed };
	if summary.is_overreserved() {
		match single_certificate(holdings) {
			Some(certificate) => warn!(certificate, available = %summary.available, "reservations exceed recorded ownership"),
			None => warn!(available = %summary.available, "reservations exceed recorded ownership"),
		}
	}
	summary
}

/// The certificate every holding belongs to, if there is exactly one.
fn single_certificate(holdings: &[Holding]) -> Option<&str> {
	let first = holdings.first()?.certificate_id.as_str();
	holdings.iter().all(|it| it.certificate_id == first).then(|| first)
}

/// Summarizes one certificate, rejecting holdings recorded against any other.
pub fn summarize_certificate(certificate_id: &str, holdings: &[Holding]) -> Result<HoldingsSummary> {
	if let Some(foreign) = holdings.iter().find(|it| it.certificate_id != certificate_id) {
		return Err(LedgerError::ForeignHolding {
			holding_id: foreign.id.clone(),
			expected: certificate_id.to_string(),
			found: foreign.certificate_id.clone(),
		});
	}
	Ok(compute_holdings_summary(holdings))
}

/// Summarizes every certificate present in a mixed ledger.
pub fn summaries_by_certificate(holdings: &[Holding]) -> BTreeMap<CertificateId, HoldingsSummary> {
	let mut by_certificate: BTreeMap<CertificateId, Vec<Holding>> = BTreeMap::new();
	for holding in holdings {
		by_certificate.entry(holding.certificate_id.clone()).or_default().push(holding.clone());
	}
	debug!(certificates = by_certificate.len(), "partitioned holdings");
	by_certificate
		.into_iter()
		.map(|(certificate_id, holdings)| {
			let summary = compute_holdings_summary(&holdings);
			(certificate_id, summary)
		})
		.collect()
}

/// Validates raw storage rows, failing on the first malformed one, then summarizes them.
pub fn summarize_holding_records(records: &[HoldingRecord]) -> Result<HoldingsSummary> {
	let holdings = records.iter().map(Holding::try_from).collect::<Result<Vec<_>>>()?;
	Ok(compute_holdings_summary(&holdings))
}
