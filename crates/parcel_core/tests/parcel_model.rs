use chrono::DateTime;
use parcel_core::{Parcel, ParcelValidationError, STATUS_REGISTERED};

#[test]
fn parcel_new_sets_defaults() {
    let parcel = Parcel::new(1000, "test");

    assert_eq!(parcel.number, 0);
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, STATUS_REGISTERED);
    assert_eq!(parcel.address, "test");
    assert!(parcel.is_registered());
    assert!(parcel.created_at.ends_with('Z'));
    DateTime::parse_from_rfc3339(&parcel.created_at).unwrap();
}

#[test]
fn validate_rejects_empty_status() {
    let mut parcel = Parcel::new(1, "somewhere");
    parcel.status = String::new();

    assert_eq!(
        parcel.validate().unwrap_err(),
        ParcelValidationError::EmptyStatus
    );
    assert!(!parcel.is_registered());
}

#[test]
fn parcel_serialization_uses_expected_wire_fields() {
    let parcel = Parcel {
        number: 12,
        client: 1000,
        status: "sent".to_string(),
        address: "Pskov, Voennaya 15".to_string(),
        created_at: "2026-10-18T09:30:00Z".to_string(),
    };

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 12);
    assert_eq!(json["client"], 1000);
    assert_eq!(json["status"], "sent");
    assert_eq!(json["address"], "Pskov, Voennaya 15");
    assert_eq!(json["created_at"], "2026-10-18T09:30:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);
}
