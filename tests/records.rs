use std::str::FromStr;

use impact_ledger::prelude::*;
use impact_ledger::{group_donation_records, summarize_holding_records, DonationRecord, HoldingRecord};
use serde_json::json;

fn amount(s: &str) -> Amount { Amount::from_str(s).unwrap() }

fn holding_records(value: serde_json::Value) -> Vec<HoldingRecord> {
	serde_json::from_value(value).expect("holding records")
}

fn donation_records(value: serde_json::Value) -> Vec<DonationRecord> {
	serde_json::from_value(value).expect("donation records")
}

#[test]
fn stored_holdings_are_validated_then_summarized() {
	let records = holding_records(json!([
		{ "id": "h1", "certificateId": "c1", "type": "OWNERSHIP", "size": "0.8" },
		{ "id": "h2", "certificateId": "c1", "type": "RESERVATION", "size": "0.15" },
		{ "id": "h3", "certificateId": "c1", "type": "CONSUMPTION", "size": "0.05" },
	]));
	let summary = summarize_holding_records(&records).unwrap();
	assert_eq!(summary.available(), &amount("65"));
	assert_eq!(summary.reserved(), &amount("15"));
	assert_eq!(summary.consumed(), &amount("5"));
}

#[test]
fn unknown_holding_type_is_rejected() {
	let records = holding_records(json!([
		{ "id": "h1", "certificateId": "c1", "type": "OWNERSHIP", "size": "0.5" },
		{ "id": "h2", "certificateId": "c1", "type": "LOAN", "size": "0.5" },
	]));
	let err = summarize_holding_records(&records).unwrap_err();
	assert_eq!(err, LedgerError::UnknownHoldingType("LOAN".to_string()));
}

#[test]
fn missing_size_is_rejected_rather_than_zeroed() {
	let records = holding_records(json!([
		{ "id": "h1", "certificateId": "c1", "type": "OWNERSHIP", "size": null },
	]));
	let err = summarize_holding_records(&records).unwrap_err();
	assert_eq!(err, LedgerError::MissingSize { holding_id: "h1".to_string() });
	assert_eq!(err.to_string(), "holding h1 has no size");
}

#[test]
fn unparseable_size_is_rejected() {
	let record = HoldingRecord {
		id: "h1".to_string(),
		certificate_id: "c1".to_string(),
		holding_type: "OWNERSHIP".to_string(),
		size: Some("half".to_string()),
	};
	let err = Holding::try_from(record).unwrap_err();
	assert_eq!(err, LedgerError::InvalidDecimal { field: "size", value: "half".to_string() });
}

#[test]
fn stored_donations_are_validated_then_grouped() {
	let records = donation_records(json!([
		{
			"id": "d1", "state": "CONFIRMED", "amount": "10.10", "time": "2023-01-05T10:00:00Z",
			"project": { "id": "p1", "title": "Clean water", "isPublic": true }
		},
		{
			"id": "d2", "state": "PENDING", "amount": null, "time": "2024-01-05T10:00:00Z",
			"project": { "id": "p2", "title": "Hidden", "isPublic": false }
		},
		{
			"id": "d3", "state": "CONFIRMED", "amount": "4.9", "time": "2023-03-05T10:00:00Z",
			"project": { "id": "p1", "title": "Clean water", "isPublic": true }
		},
	]));
	let groups = group_donation_records(&records).unwrap();
	assert_eq!(groups.len(), 1);
	assert_eq!(groups[0].project().id, "p1");
	assert!(groups[0].project().is_public);
	assert_eq!(groups[0].total_amount(), &amount("15"));
}

#[test]
fn unknown_donation_state_is_rejected() {
	let records = donation_records(json!([
		{
			"id": "d1", "state": "REFUNDED", "amount": "1", "time": "2023-01-05T10:00:00Z",
			"project": { "id": "p1", "title": "Clean water", "isPublic": true }
		},
	]));
	let err = group_donation_records(&records).unwrap_err();
	assert_eq!(err, LedgerError::UnknownDonationState("REFUNDED".to_string()));
}

#[test]
fn confirmed_record_without_amount_is_rejected() {
	let records = donation_records(json!([
		{
			"id": "d9", "state": "CONFIRMED", "amount": null, "time": "2023-01-05T10:00:00Z",
			"project": { "id": "p1", "title": "Clean water", "isPublic": true }
		},
	]));
	let err = group_donation_records(&records).unwrap_err();
	assert_eq!(err, LedgerError::MissingAmount { donation_id: "d9".to_string() });
}

#[test]
fn display_config_fills_in_defaults() {
	let config: DisplayConfig = serde_json::from_value(json!({ "precision": 4 })).unwrap();
	assert_eq!(config, DisplayConfig { precision: 4, clamp_negative: true });
	let config: DisplayConfig = serde_json::from_value(json!({})).unwrap();
	assert_eq!(config, DisplayConfig::default());
}

#[test]
fn holding_types_serialize_in_storage_form() {
	let holding = Holding::new("h1", "c1", HoldingType::Reservation, amount("0.25"));
	let value = serde_json::to_value(&holding).unwrap();
	assert_eq!(value["type"], json!("RESERVATION"));
	assert_eq!(value["certificateId"], json!("c1"));
}
