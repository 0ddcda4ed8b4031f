//! Typed operations over the backend's resource collections.
//!
//! One function per verb per collection, plus the dashboard's joined
//! aggregate load.

use super::models::*;
use super::{delete as delete_path, get_json, post_json, put_json, ApiError};

/// Unwrap the `{success, user, message?}` auth envelope.
fn unwrap_auth(resp: AuthResponse) -> Result<UserIdentity, ApiError> {
    if resp.success {
        resp.user
            .ok_or_else(|| ApiError::unknown("resposta de autenticação sem usuário"))
    } else {
        Err(ApiError::rejected(
            resp.message
                .unwrap_or_else(|| "Credenciais recusadas".to_string()),
        ))
    }
}

pub mod auth {
    use super::*;

    pub async fn login(email: &str, password: &str) -> Result<UserIdentity, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = post_json("/auth/login", &body).await?;
        unwrap_auth(resp)
    }

    pub async fn register(name: &str, email: &str, password: &str) -> Result<UserIdentity, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = post_json("/auth/register", &body).await?;
        unwrap_auth(resp)
    }
}

pub mod customers {
    use super::*;

    pub async fn list() -> Result<Vec<Customer>, ApiError> {
        get_json("/customers").await
    }

    pub async fn get(id: i64) -> Result<Customer, ApiError> {
        get_json(&format!("/customers/{id}")).await
    }

    pub async fn create(payload: &CustomerPayload) -> Result<Customer, ApiError> {
        post_json("/customers", payload).await
    }

    pub async fn update(id: i64, payload: &CustomerPayload) -> Result<Customer, ApiError> {
        put_json(&format!("/customers/{id}"), payload).await
    }

    pub async fn delete(id: i64) -> Result<(), ApiError> {
        delete_path(&format!("/customers/{id}")).await
    }
}

pub mod rooms {
    use super::*;

    pub async fn list() -> Result<Vec<Room>, ApiError> {
        get_json("/rooms").await
    }

    pub async fn get(id: i64) -> Result<Room, ApiError> {
        get_json(&format!("/rooms/{id}")).await
    }

    pub async fn create(payload: &RoomPayload) -> Result<Room, ApiError> {
        post_json("/rooms", payload).await
    }

    pub async fn update(id: i64, payload: &RoomPayload) -> Result<Room, ApiError> {
        put_json(&format!("/rooms/{id}"), payload).await
    }

    pub async fn delete(id: i64) -> Result<(), ApiError> {
        delete_path(&format!("/rooms/{id}")).await
    }
}

pub mod reservations {
    use super::*;

    pub async fn list() -> Result<Vec<Reservation>, ApiError> {
        get_json("/reservations").await
    }

    pub async fn create(payload: &ReservationPayload) -> Result<Reservation, ApiError> {
        post_json("/reservations", payload).await
    }

    pub async fn delete(id: i64) -> Result<(), ApiError> {
        delete_path(&format!("/reservations/{id}")).await
    }
}

pub mod dashboard {
    use super::*;

    /// Load all six dashboard aggregates concurrently. Fail-together: if any
    /// fetch fails the whole load fails, and the page renders its error
    /// state rather than a partial view.
    pub async fn load() -> Result<DashboardData, ApiError> {
        let (stats, recent_activities, active_reservations, upcoming_checkins, available_rooms, active_customers) =
            futures::try_join!(
                get_json::<DashboardStats>("/dashboard/stats"),
                get_json::<Vec<Reservation>>("/dashboard/recent-activities"),
                get_json::<Vec<Reservation>>("/dashboard/active-reservations"),
                get_json::<Vec<Reservation>>("/dashboard/upcoming-checkins"),
                get_json::<Vec<Room>>("/dashboard/available-rooms"),
                get_json::<Vec<Customer>>("/dashboard/active-customers"),
            )?;
        Ok(DashboardData {
            stats,
            recent_activities,
            active_reservations,
            upcoming_checkins,
            available_rooms,
            active_customers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_envelope_success_yields_identity() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":true,"user":{"id":1,"name":"A"}}"#).unwrap();
        let user = unwrap_auth(resp).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "A");
    }

    #[test]
    fn auth_envelope_failure_carries_backend_message() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Senha incorreta"}"#).unwrap();
        let err = unwrap_auth(resp).unwrap_err();
        assert_eq!(err.kind, crate::app::api::ErrorKind::ServerRejected);
        assert_eq!(err.message, "Senha incorreta");
    }

    #[test]
    fn auth_envelope_failure_without_message_gets_a_default() {
        let resp: AuthResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = unwrap_auth(resp).unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn auth_success_without_user_is_unknown() {
        let resp: AuthResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let err = unwrap_auth(resp).unwrap_err();
        assert_eq!(err.kind, crate::app::api::ErrorKind::Unknown);
    }
}

// Drives the real reqwest client against a local axum fixture backend. The
// only test allowed to initialize the process-wide base URL.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod fixture_backend_tests {
    use super::*;
    use crate::app::api::ErrorKind;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn empty_list() -> Json<serde_json::Value> {
        Json(json!([]))
    }

    fn fixture_router() -> Router {
        Router::new()
            .route(
                "/api/customers/7",
                get(|| async {
                    Json(json!({
                        "id": 7,
                        "name": "Maria da Silva",
                        "cpf": "123.456.789-01",
                        "email": "maria@email.com",
                        "phone": "(11) 99999-0000",
                        "observacoes": "VIP"
                    }))
                }),
            )
            .route(
                "/api/rooms/3",
                get(|| async {
                    Json(json!({
                        "id": 3,
                        "number": "101",
                        "type": "OURO",
                        "dailyRate": 250.0,
                        "status": "DISPONIVEL"
                    }))
                }),
            )
            // One aggregate rejects; the other five answer normally.
            .route(
                "/api/dashboard/stats",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"message": "agregados indisponíveis"})),
                    )
                }),
            )
            .route("/api/dashboard/recent-activities", get(empty_list))
            .route("/api/dashboard/active-reservations", get(empty_list))
            .route("/api/dashboard/upcoming-checkins", get(empty_list))
            .route("/api/dashboard/available-rooms", get(empty_list))
            .route("/api/dashboard/active-customers", get(empty_list))
    }

    #[tokio::test]
    async fn client_reads_entities_and_dashboard_fails_together() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, fixture_router()).await.unwrap();
        });
        crate::config::set_base_url(&format!("http://{addr}/api")).unwrap();

        let customer = customers::get(7).await.unwrap();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name, "Maria da Silva");
        assert_eq!(customer.notes, "VIP");

        let room = rooms::get(3).await.unwrap();
        assert_eq!(room.number, "101");
        assert_eq!(room.room_type, RoomType::Gold);
        assert!(room.is_available());

        // One failing aggregate sinks the whole load, no partial data.
        let err = dashboard::load().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ServerRejected);
        assert_eq!(err.message, "agregados indisponíveis");
    }
}
