use bigdecimal::{BigDecimal, RoundingMode};

pub use donation_state::*;
pub use holding_type::*;
pub(crate) use decimal::parse_amount;

mod decimal;
mod donation_state;
mod holding_type;

/// An exact decimal quantity.
pub type Amount = BigDecimal;

/// Identifies a Holding.
pub type HoldingId = String;

/// Identifies a Certificate.
pub type CertificateId = String;

/// Identifies a Donation.
pub type DonationId = String;

/// Identifies a Project.
pub type ProjectId = String;

/// Fractional digits kept in derived percentages.
///
/// Sits just under the 100 digits `BigDecimal` keeps from a division, so only
/// the tail of a repeating fraction is rounded away.
pub const PERCENT_SCALE: i64 = 90;

/// Converts a fraction of a certificate into a percentage.
pub fn to_percent(fraction: &Amount) -> Amount {
	let percent = fraction * BigDecimal::from(100);
	percent.with_scale_round(PERCENT_SCALE, RoundingMode::HalfEven).normalized()
}
