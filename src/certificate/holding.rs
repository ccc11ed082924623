use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, Amount, CertificateId, HoldingId, HoldingType};
use crate::error::{LedgerError, Result};

/// A claim against a fraction of a certificate.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
	pub id: HoldingId,
	pub certificate_id: CertificateId,
	#[serde(rename = "type")]
	pub holding_type: HoldingType,
	pub size: Amount,
}

impl Holding {
	pub fn new(id: &str, certificate_id: &str, holding_type: HoldingType, size: Amount) -> Self {
		Holding { id: id.to_string(), certificate_id: certificate_id.to_string(), holding_type, size }
	}
}

/// A holding row as read from storage, before validation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
	pub id: HoldingId,
	pub certificate_id: CertificateId,
	#[serde(rename = "type")]
	pub holding_type: String,
	pub size: Option<String>,
}

impl TryFrom<&HoldingRecord> for Holding {
	type Error = LedgerError;

	fn try_from(record: &HoldingRecord) -> Result<Self> {
		let holding_type = record.holding_type.parse::<HoldingType>()?;
		let size = match &record.size {
			Some(size) => parse_amount("size", size)?,
			None => return Err(LedgerError::MissingSize { holding_id: record.id.clone() }),
		};
		Ok(Holding {
			id: record.id.clone(),
			certificate_id: record.certificate_id.clone(),
			holding_type,
			size,
		})
	}
}

impl TryFrom<HoldingRecord> for Holding {
	type Error = LedgerError;

	fn try_from(record: HoldingRecord) -> Result<Self> { Holding::try_from(&record) }
}
