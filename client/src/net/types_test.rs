use super::*;
use serde_json::json;

#[test]
fn credentials_serialize_as_username_password() {
    let body = serde_json::to_value(AuthCredentials { username: "mozo1", password: "secreto" })
        .expect("credentials serialize");
    assert_eq!(body, json!({ "username": "mozo1", "password": "secreto" }));
}

#[test]
fn refresh_request_serializes_token_field() {
    let body = serde_json::to_value(RefreshRequest { refresh_token: "r-1" }).expect("refresh serializes");
    assert_eq!(body, json!({ "refresh_token": "r-1" }));
}

#[test]
fn token_pair_parses_backend_body() {
    let pair: AuthTokenPair =
        serde_json::from_value(json!({ "access_token": "a", "refresh_token": "b", "token_type": "bearer" }))
            .expect("token pair parses");
    assert_eq!(pair.access_token, "a");
    assert_eq!(pair.refresh_token, "b");
    assert_eq!(pair.token_type, "bearer");
}

#[test]
fn token_pair_missing_field_is_rejected() {
    let parsed = serde_json::from_value::<AuthTokenPair>(json!({ "access_token": "a" }));
    assert!(parsed.is_err());
}

#[test]
fn current_user_last_login_is_optional() {
    let user: CurrentUser = serde_json::from_value(json!({
        "id": 3,
        "username": "caja1",
        "nombre": "Caja Demo",
        "rol": "caja",
        "activo": true
    }))
    .expect("current user parses");
    assert_eq!(user.last_login, None);
    assert_eq!(user.rol, "caja");
}
