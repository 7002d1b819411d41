//! End-to-end session contract against a fake backend.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use session::api::AccessFilters;
use session::{ApiError, AuthError, Role, SessionStore, SessionUser};
use smartcar_cli::commands::{self, GetTarget};
use smartcar_cli::{Backend, CliError, FileStorage};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

impl Hits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match (body["usuario"].as_str(), body["clave"].as_str()) {
        (Some("ana"), Some("secreto")) => (
            StatusCode::OK,
            Json(json!({ "token": "tok-admin", "user": { "nombre": "Ana", "rol": "Administrador" } })),
        ),
        (Some("luis"), Some("secreto")) => (
            StatusCode::OK,
            Json(json!({ "token": "tok-guard", "user": { "nombre": "Luis", "rol": "Vigilante" } })),
        ),
        (Some("vacio"), _) => (StatusCode::OK, Json(json!({ "token": "", "user": { "nombre": "X", "rol": "Vigilante" } }))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Credenciales inválidas" }))),
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()?.strip_prefix("Bearer ")
}

fn check_token(hits: &Hits, headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    hits.0.fetch_add(1, Ordering::SeqCst);
    match bearer(headers) {
        Some("tok-admin" | "tok-guard") => Ok(()),
        Some("tok-suspended") => Err((StatusCode::FORBIDDEN, Json(json!({ "error": "Cuenta suspendida" })))),
        _ => Err((StatusCode::UNAUTHORIZED, Json(json!({ "error": "Token expirado" })))),
    }
}

async fn personas(State(hits): State<Hits>, headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    check_token(&hits, &headers)?;
    Ok(Json(json!([{ "nombre": "Marta", "documento": "123" }])))
}

async fn accesos(
    State(hits): State<Hits>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    check_token(&hits, &headers)?;
    Ok(Json(json!([query])))
}

async fn auditoria(State(hits): State<Hits>, headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    check_token(&hits, &headers)?;
    Ok(Json(json!([{ "accion": "login", "usuario": "ana" }])))
}

async fn buscar_placa(
    State(hits): State<Hits>,
    headers: HeaderMap,
    Path(placa): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    check_token(&hits, &headers)?;
    if placa == "ABC123" {
        Ok(Json(json!({ "placa": "ABC123", "tipo": "Auto", "color": "Rojo", "propietario": "Marta" })))
    } else {
        Err((StatusCode::NOT_FOUND, Json(json!({ "error": "Vehículo no encontrado" }))))
    }
}

struct Harness {
    backend: Backend,
    store: SessionStore<FileStorage>,
    hits: Hits,
    _dir: TempDir,
}

async fn harness() -> Harness {
    let hits = Hits::default();
    let app = Router::new()
        .route("/login", post(login))
        .route("/api/personas", get(personas))
        .route("/api/accesos", get(accesos))
        .route("/api/admin/auditoria", get(auditoria))
        .route("/api/buscar_placa/{placa}", get(buscar_placa))
        .with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(FileStorage::new(dir.path().join("session.json")));
    let backend = Backend::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    Harness { backend, store, hits, _dir: dir }
}

fn store_session(h: &Harness, token: &str, rol: Role) {
    h.store.save(token, &SessionUser { nombre: "Prueba".to_owned(), rol, usuario: None });
}

fn target(name: &str) -> GetTarget {
    GetTarget::parse(name, None, AccessFilters::default()).unwrap()
}

#[tokio::test]
async fn login_lands_on_the_returned_role() {
    let h = harness().await;
    let landing = commands::login(&h.backend, &h.store, "ana", "secreto", Some(Role::Administrador)).await.unwrap();
    assert_eq!(landing, "/admin/inicio");

    let current = h.store.load().unwrap();
    assert_eq!(current.token, "tok-admin");
    assert_eq!(current.user.nombre, "Ana");
}

#[tokio::test]
async fn selected_role_is_only_a_hint() {
    let h = harness().await;
    let landing = commands::login(&h.backend, &h.store, "luis", "secreto", Some(Role::Administrador)).await.unwrap();
    assert_eq!(landing, "/vigilante/inicio");
    assert_eq!(h.store.load().unwrap().role(), Role::Vigilante);
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let h = harness().await;
    let err = commands::login(&h.backend, &h.store, "ana", "mala", Some(Role::Administrador)).await.unwrap_err();
    match err {
        CliError::Auth(AuthError::Rejected { status, message }) => {
            assert_eq!(status, Some(401));
            assert_eq!(message, "Credenciales inválidas");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(h.store.load().is_none());
    assert!(!h.store.storage().path().exists());
}

#[tokio::test]
async fn success_without_token_is_rejected() {
    let h = harness().await;
    let err = commands::login(&h.backend, &h.store, "vacio", "x", Some(Role::Vigilante)).await.unwrap_err();
    assert!(matches!(err, CliError::Auth(AuthError::Rejected { .. })));
    assert!(h.store.load().is_none());
}

#[tokio::test]
async fn guarded_get_sends_the_bearer_token() {
    let h = harness().await;
    commands::login(&h.backend, &h.store, "luis", "secreto", Some(Role::Vigilante)).await.unwrap();
    let rows = commands::get(&h.backend, &h.store, &target("personas")).await.unwrap();
    assert_eq!(rows[0]["nombre"], "Marta");
    assert_eq!(h.hits.count(), 1);
}

#[tokio::test]
async fn access_filters_reach_the_backend() {
    let h = harness().await;
    store_session(&h, "tok-guard", Role::Vigilante);
    let filters = AccessFilters {
        placa: Some("ABC123".to_owned()),
        tipo: Some("  ".to_owned()),
        desde: Some("2024-01-01".to_owned()),
        hasta: None,
    };
    let target = GetTarget::parse("accesos", None, filters).unwrap();
    let rows = commands::get(&h.backend, &h.store, &target).await.unwrap();
    assert_eq!(rows[0], json!({ "placa": "ABC123", "desde": "2024-01-01" }));
}

#[tokio::test]
async fn unauthorized_response_clears_the_session() {
    let h = harness().await;
    store_session(&h, "tok-expired", Role::Vigilante);
    let err = commands::get(&h.backend, &h.store, &target("personas")).await.unwrap_err();
    assert!(err.is_session_invalid());
    assert!(h.store.load().is_none());
    assert!(!h.store.storage().path().exists());

    // Subsequent calls fail locally without reaching the backend.
    let err = commands::get(&h.backend, &h.store, &target("personas")).await.unwrap_err();
    assert!(matches!(err, CliError::Api(ApiError::NoSession)));
    assert_eq!(h.hits.count(), 1);
}

#[tokio::test]
async fn forbidden_response_keeps_the_session() {
    let h = harness().await;
    store_session(&h, "tok-suspended", Role::Vigilante);
    let err = commands::get(&h.backend, &h.store, &target("personas")).await.unwrap_err();
    match err {
        CliError::Api(ApiError::Forbidden { message }) => assert_eq!(message, "Cuenta suspendida"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(h.store.load().is_some());
}

#[tokio::test]
async fn role_mismatch_is_refused_before_the_request() {
    let h = harness().await;
    store_session(&h, "tok-guard", Role::Vigilante);
    let err = commands::get(&h.backend, &h.store, &target("auditoria")).await.unwrap_err();
    assert!(matches!(err, CliError::Api(ApiError::Forbidden { .. })));
    assert_eq!(h.hits.count(), 0);

    store_session(&h, "tok-admin", Role::Administrador);
    let rows = commands::get(&h.backend, &h.store, &target("auditoria")).await.unwrap();
    assert_eq!(rows[0]["accion"], "login");
}

#[tokio::test]
async fn plate_lookup_normalises_the_plate() {
    let h = harness().await;
    store_session(&h, "tok-guard", Role::Vigilante);
    let target = GetTarget::parse("placa", Some("abc123"), AccessFilters::default()).unwrap();
    let found = commands::get(&h.backend, &h.store, &target).await.unwrap();
    assert_eq!(found["propietario"], "Marta");

    let missing = GetTarget::parse("placa", Some("ZZZ999"), AccessFilters::default()).unwrap();
    let err = commands::get(&h.backend, &h.store, &missing).await.unwrap_err();
    assert!(matches!(err, CliError::Api(ApiError::Status { status: 404, .. })));
}

#[tokio::test]
async fn logout_then_whoami_reports_no_session() {
    let h = harness().await;
    commands::login(&h.backend, &h.store, "ana", "secreto", Some(Role::Administrador)).await.unwrap();
    assert_eq!(commands::whoami(&h.store).unwrap().user.nombre, "Ana");

    assert_eq!(commands::logout(&h.store), "/login");
    assert!(matches!(commands::whoami(&h.store), Err(CliError::Api(ApiError::NoSession))));
}
