use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::core::Amount;
use crate::display::{DisplayConfig, DisplayShares};

/// Percentages of a certificate that are available, reserved and consumed.
///
/// Each value is a percentage in the same units as a proportional bar. The
/// `available` share is ownership minus reservations and is negative when
/// reservations exceed recorded ownership.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsSummary {
	pub(crate) available: Amount,
	pub(crate) reserved: Amount,
	pub(crate) consumed: Amount,
}

impl HoldingsSummary {
	pub fn zero() -> Self {
		HoldingsSummary { available: Amount::zero(), reserved: Amount::zero(), consumed: Amount::zero() }
	}
	pub fn available(&self) -> &Amount { &self.available }
	pub fn reserved(&self) -> &Amount { &self.reserved }
	pub fn consumed(&self) -> &Amount { &self.consumed }
	pub fn is_overreserved(&self) -> bool { self.available.is_negative() }

	/// Share of the certificate not yet issued to any holder.
	pub fn unallocated(&self) -> Amount {
		BigDecimal::from(100) - &self.available - &self.reserved - &self.consumed
	}

	/// Converts to floats for charting. Call only after all arithmetic is done.
	pub fn to_display(&self, config: &DisplayConfig) -> DisplayShares {
		let overreserved = self.is_overreserved();
		let available = if overreserved && config.clamp_negative { Amount::zero() } else { self.available.clone() };
		DisplayShares {
			available: display_value(&available, config.precision),
			reserved: display_value(&self.reserved, config.precision),
			consumed: display_value(&self.consumed, config.precision),
			overreserved,
		}
	}
}

/// Values beyond the `f64` range saturate toward their sign.
fn display_value(value: &Amount, precision: u32) -> f64 {
	match value.round(i64::from(precision)).to_f64() {
		Some(value) if value.is_finite() => value,
		_ if value.is_negative() => f64::MIN,
		_ => f64::MAX,
	}
}
