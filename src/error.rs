use thiserror::Error;

use crate::core::{CertificateId, DonationId, HoldingId};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reasons a ledger or donation record cannot be aggregated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
	#[error("unknown holding type: {0}")]
	UnknownHoldingType(String),
	#[error("unknown donation state: {0}")]
	UnknownDonationState(String),
	#[error("holding {holding_id} has no size")]
	MissingSize { holding_id: HoldingId },
	#[error("confirmed donation {donation_id} has no amount")]
	MissingAmount { donation_id: DonationId },
	#[error("invalid decimal in {field}: {value}")]
	InvalidDecimal { field: &'static str, value: String },
	#[error("holding {holding_id} belongs to certificate {found}, not {expected}")]
	ForeignHolding {
		holding_id: HoldingId,
		expected: CertificateId,
		found: CertificateId,
	},
}
