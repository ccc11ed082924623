use std::str::FromStr;

use crate::core::Amount;
use crate::error::{LedgerError, Result};

/// Parses a stored decimal string without passing through floating point.
pub(crate) fn parse_amount(field: &'static str, value: &str) -> Result<Amount> {
	Amount::from_str(value.trim()).map_err(|_| LedgerError::InvalidDecimal { field, value: value.to_string() })
}
