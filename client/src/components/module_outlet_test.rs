use super::*;
use crate::routes::registry::ViewLoadError;

// =============================================================
// placeholder_for
// =============================================================

#[test]
fn loading_state_shows_loading_placeholder_only() {
    let state = OutletState::<ViewId>::Loading { path: "/caja".to_owned() };
    assert_eq!(placeholder_for(&state), Some(Placeholder::Loading));
    assert!(state.resolved_view().is_none());
}

#[test]
fn resolved_state_has_no_placeholder() {
    let state = OutletState::Resolved { path: "/caja".to_owned(), view: ViewId::Cashier };
    assert_eq!(placeholder_for(&state), None);
}

#[test]
fn unmatched_state_shows_selection_message() {
    let state = OutletState::<ViewId>::Unmatched { path: "/nada".to_owned() };
    let placeholder = placeholder_for(&state).expect("unmatched renders a placeholder");
    assert_eq!(placeholder.message(), "Seleccione un módulo");
}

#[test]
fn failed_state_shows_error_placeholder() {
    let state = OutletState::<ViewId>::Failed { error: ViewLoadError::new("/caja", "timeout") };
    assert_eq!(placeholder_for(&state), Some(Placeholder::Failed));
    assert_eq!(Placeholder::Failed.message(), FAILED_MESSAGE);
}

#[test]
fn loading_message_matches_fallback_text() {
    assert_eq!(Placeholder::Loading.message(), "Cargando...");
}
