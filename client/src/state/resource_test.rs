use super::*;

#[test]
fn default_is_loading() {
    assert!(LoadState::<u8>::default().is_loading());
}

#[test]
fn from_result_keeps_value() {
    assert_eq!(LoadState::from_result(Ok(3)), LoadState::Loaded(3));
}

#[test]
fn from_result_renders_error_message() {
    let state = LoadState::<u8>::from_result(Err(ApiError::Forbidden { message: "No autorizado".to_owned() }));
    assert_eq!(state, LoadState::Failed("No autorizado".to_owned()));
    assert!(!state.is_loading());
}
