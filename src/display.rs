use serde::{Deserialize, Serialize};

/// Presentation settings for converting percentages into chart values.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
	/// Fractional digits kept after rounding.
	pub precision: u32,
	/// Render a negative availability as an empty segment.
	pub clamp_negative: bool,
}

impl Default for DisplayConfig {
	fn default() -> Self { DisplayConfig { precision: 2, clamp_negative: true } }
}

/// Floating point bar-chart inputs for one certificate.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayShares {
	pub available: f64,
	pub reserved: f64,
	pub consumed: f64,
	/// Reservations exceed ownership, whether or not `available` was clamped.
	pub overreserved: bool,
}

impl DisplayShares {
	pub fn total(&self) -> f64 { self.available + self.reserved + self.consumed }
}
