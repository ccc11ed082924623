//! Holdings and donation aggregation for retroactive impact certificates.
//!
//! Both aggregators are pure: they read caller-supplied records and return
//! freshly derived values. All quantities stay in exact decimal arithmetic
//! until [`HoldingsSummary::to_display`] converts them for charting.

pub use crate::certificate::{
	compute_holdings_summary, summaries_by_certificate, summarize_certificate, summarize_holding_records,
	CertificateLedger, Holding, HoldingRecord, HoldingsSummary,
};
pub use crate::core::{Amount, CertificateId, DonationId, DonationState, HoldingId, HoldingType, ProjectId, PERCENT_SCALE};
pub use crate::display::{DisplayConfig, DisplayShares};
pub use crate::donation::{
	compute_donation_groups, group_donation_records, total_confirmed, Donation, DonationGroup, DonationRecord,
	ProjectRef,
};
pub use crate::error::{LedgerError, Result};

pub mod certificate;
pub mod core;
pub mod display;
pub mod donation;
mod error;

pub mod prelude {
	pub use crate::{
		compute_donation_groups, compute_holdings_summary, Amount, CertificateLedger, DisplayConfig, Donation,
		DonationGroup, DonationState, Holding, HoldingType, HoldingsSummary, LedgerError, ProjectRef,
	};
}
