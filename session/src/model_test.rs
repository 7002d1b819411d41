use super::*;

#[test]
fn role_parse_accepts_wire_names() {
    assert_eq!(Role::parse("Administrador"), Some(Role::Administrador));
    assert_eq!(Role::parse("Vigilante"), Some(Role::Vigilante));
}

#[test]
fn role_parse_is_case_sensitive() {
    assert_eq!(Role::parse("administrador"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_serializes_as_wire_name() {
    let json = serde_json::to_string(&Role::Vigilante).expect("serialize");
    assert_eq!(json, "\"Vigilante\"");
}

#[test]
fn session_user_deserializes_backend_payload() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({
        "nombre": "Ana",
        "usuario": "ana",
        "rol": "Administrador"
    }))
    .expect("user");
    assert_eq!(user.nombre, "Ana");
    assert_eq!(user.rol, Role::Administrador);
    assert_eq!(user.usuario.as_deref(), Some("ana"));
}

#[test]
fn session_user_usuario_is_optional() {
    let user: SessionUser =
        serde_json::from_value(serde_json::json!({ "nombre": "Ana", "rol": "Vigilante" })).expect("user");
    assert_eq!(user.usuario, None);
    let raw = serde_json::to_value(&user).expect("serialize");
    assert!(raw.get("usuario").is_none());
}

#[test]
fn session_user_rejects_unknown_role() {
    let result = serde_json::from_value::<SessionUser>(serde_json::json!({ "nombre": "Ana", "rol": "Root" }));
    assert!(result.is_err());
}

#[test]
fn bearer_prefixes_token() {
    let session = Session {
        token: "abc".to_owned(),
        user: SessionUser { nombre: "Ana".to_owned(), rol: Role::Administrador, usuario: None },
    };
    assert_eq!(session.bearer(), "Bearer abc");
    assert_eq!(session.role(), Role::Administrador);
}
