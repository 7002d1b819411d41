use super::*;

#[test]
fn lookup_message_lists_vehicle_fields() {
    let found = PlateLookup {
        placa: "ABC123".to_owned(),
        tipo: "Auto".to_owned(),
        color: "Rojo".to_owned(),
        propietario: "Ana".to_owned(),
    };
    let msg = lookup_message(&Ok(found));
    assert!(msg.contains("ABC123"));
    assert!(msg.contains("Propietario: Ana"));
}

#[test]
fn lookup_message_reports_missing_vehicle() {
    let err = ApiError::Status { status: 404, message: "no existe".to_owned() };
    assert_eq!(lookup_message(&Err(err)), "Vehículo no encontrado");
}

#[test]
fn lookup_message_falls_back_to_error_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(lookup_message(&Err(err.clone())), err.to_string());
}

#[test]
fn outcome_class_marks_granted_access() {
    assert_eq!(outcome_class("Verde"), "outcome outcome--granted");
    assert_eq!(outcome_class("Rojo"), "outcome outcome--denied");
}
