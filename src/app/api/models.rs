//! Wire types for the Admin Stay backend.
//!
//! Field and enum literal names are pinned to what the backend actually
//! speaks (a mix of English and Portuguese); the Rust side uses canonical
//! names and keeps the wire spelling in serde attributes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth
// =============================================================================

/// The authenticated user as returned by `/auth/login` and `/auth/register`.
///
/// Treated as opaque beyond `id` and `name`: any extra fields the backend
/// sends ride along in `extra` and survive storage round trips untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope wrapping both auth endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserIdentity>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for POST `/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for POST `/auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Wire name is the backend's Portuguese field.
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

/// Create/update body for `/customers`. The backend assigns ids.
#[derive(Clone, Debug, Serialize)]
pub struct CustomerPayload {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "observacoes")]
    pub notes: String,
}

// =============================================================================
// Rooms
// =============================================================================

/// Room tier. Wire literals are the backend's Portuguese names; the English
/// spellings are accepted on input for forward compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "PRATA", alias = "SILVER")]
    Silver,
    #[serde(rename = "OURO", alias = "GOLD")]
    Gold,
    #[serde(rename = "DIAMANTE", alias = "DIAMOND")]
    Diamond,
    #[serde(rename = "PRESIDENCIAL", alias = "PRESIDENTIAL")]
    Presidential,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Silver,
        RoomType::Gold,
        RoomType::Diamond,
        RoomType::Presidential,
    ];

    /// The wire literal, also used as the UI label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Silver => "PRATA",
            RoomType::Gold => "OURO",
            RoomType::Diamond => "DIAMANTE",
            RoomType::Presidential => "PRESIDENCIAL",
        }
    }

    /// Parse a wire literal (either spelling).
    pub fn parse(s: &str) -> Option<RoomType> {
        match s {
            "PRATA" | "SILVER" => Some(RoomType::Silver),
            "OURO" | "GOLD" => Some(RoomType::Gold),
            "DIAMANTE" | "DIAMOND" => Some(RoomType::Diamond),
            "PRESIDENCIAL" | "PRESIDENTIAL" => Some(RoomType::Presidential),
            _ => None,
        }
    }
}

/// Room occupancy status. One canonical literal per state; the aliases cover
/// the legacy literals older backend builds emitted, so availability is
/// decided in exactly one place (`Room::is_available`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[serde(rename = "AVAILABLE", alias = "DISPONIVEL", alias = "FREE")]
    Available,
    #[serde(rename = "OCCUPIED", alias = "OCUPADO")]
    Occupied,
    #[serde(rename = "MAINTENANCE", alias = "MANUTENCAO")]
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Disponível",
            RoomStatus::Occupied => "Ocupado",
            RoomStatus::Maintenance => "Manutenção",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(rename = "dailyRate")]
    pub daily_rate: f64,
    pub status: RoomStatus,
}

impl Room {
    /// The single availability check used by the reservation form and the
    /// dashboard grid.
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

/// Create/update body for `/rooms`. The backend expects the id echoed back
/// (0 for a new room) and a status alongside the editable fields.
#[derive(Clone, Debug, Serialize)]
pub struct RoomPayload {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(rename = "dailyRate")]
    pub daily_rate: f64,
    pub status: RoomStatus,
}

// =============================================================================
// Reservations
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[serde(rename = "IN_USE")]
    InUse,
    #[serde(rename = "FINISHED")]
    Finished,
    #[serde(rename = "CANCELED")]
    Canceled,
    #[serde(rename = "ABSENCE")]
    Absence,
}

impl ReservationStatus {
    /// UI label (the product speaks Portuguese to its users).
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Scheduled => "Agendado",
            ReservationStatus::InUse => "Em Uso",
            ReservationStatus::Finished => "Finalizado",
            ReservationStatus::Canceled => "Cancelado",
            ReservationStatus::Absence => "Ausência",
        }
    }

    /// Badge styling per status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReservationStatus::Scheduled => "bg-yellow-100 text-yellow-700",
            ReservationStatus::InUse => "bg-blue-100 text-blue-700",
            ReservationStatus::Finished => "bg-green-100 text-green-700",
            ReservationStatus::Canceled => "bg-red-100 text-red-700",
            ReservationStatus::Absence => "bg-gray-100 text-gray-700",
        }
    }
}

/// A reservation as listed by the backend. Customer and room come embedded
/// but may be absent on partially deleted data, so both are optional.
/// Timestamps are kept as the backend sent them and only parsed for display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub checkin: String,
    #[serde(default)]
    pub checkout: String,
    pub status: ReservationStatus,
    #[serde(rename = "totalValue", default)]
    pub total_value: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Create body for POST `/reservations`.
///
/// The backend keys the room by *number*, not id, and wants timestamps as
/// `DD/MM/YYYY HH:mm`; both are existing backend contracts.
#[derive(Clone, Debug, Serialize)]
pub struct ReservationPayload {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
    #[serde(rename = "roomNumber")]
    pub room_number: String,
    pub checkin: String,
    pub checkout: String,
}

// =============================================================================
// Dashboard aggregates
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_reservations: u64,
    pub total_rooms: u64,
    pub total_customers: u64,
    pub available_rooms: u64,
    pub active_reservations: u64,
    pub scheduled_reservations: u64,
}

/// The six dashboard aggregates, loaded together (fail-together policy).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_activities: Vec<Reservation>,
    pub active_reservations: Vec<Reservation>,
    pub upcoming_checkins: Vec<Reservation>,
    pub available_rooms: Vec<Room>,
    pub active_customers: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_identity_preserves_unknown_fields() {
        let raw = r#"{"id":1,"name":"A","role":"admin","hotel":"central"}"#;
        let user: UserIdentity = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "A");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], "admin");
        assert_eq!(back["hotel"], "central");
    }

    #[test]
    fn room_type_uses_backend_literals() {
        let json = serde_json::to_string(&RoomType::Silver).unwrap();
        assert_eq!(json, "\"PRATA\"");

        let parsed: RoomType = serde_json::from_str("\"PRESIDENCIAL\"").unwrap();
        assert_eq!(parsed, RoomType::Presidential);

        // English aliases accepted on input
        let parsed: RoomType = serde_json::from_str("\"GOLD\"").unwrap();
        assert_eq!(parsed, RoomType::Gold);
    }

    #[test]
    fn room_status_accepts_legacy_literals() {
        for raw in ["\"AVAILABLE\"", "\"DISPONIVEL\"", "\"FREE\""] {
            let status: RoomStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, RoomStatus::Available);
        }
        // but only one canonical spelling goes out
        assert_eq!(
            serde_json::to_string(&RoomStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
    }

    #[test]
    fn availability_is_a_single_predicate() {
        let mut room = Room {
            id: 1,
            number: "101".into(),
            room_type: RoomType::Silver,
            daily_rate: 150.0,
            status: RoomStatus::Available,
        };
        assert!(room.is_available());
        room.status = RoomStatus::Occupied;
        assert!(!room.is_available());
    }

    #[test]
    fn customer_notes_map_to_observacoes() {
        let payload = CustomerPayload {
            name: "Maria".into(),
            cpf: "123.456.789-00".into(),
            email: "m@x.com".into(),
            phone: "11 99999-0000".into(),
            notes: "VIP".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["observacoes"], "VIP");
        assert!(json.get("notes").is_none());

        let customer: Customer =
            serde_json::from_str(r#"{"id":7,"name":"Maria","observacoes":"VIP"}"#).unwrap();
        assert_eq!(customer.notes, "VIP");
    }

    #[test]
    fn reservation_payload_keys_room_by_number() {
        let payload = ReservationPayload {
            customer_id: 3,
            room_number: "101".into(),
            checkin: "01/02/2026 14:00".into(),
            checkout: "03/02/2026 11:00".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["customerId"], 3);
        assert_eq!(json["roomNumber"], "101");
        assert_eq!(json["checkin"], "01/02/2026 14:00");
    }

    #[test]
    fn reservation_tolerates_missing_embeds() {
        let raw = r#"{"id":9,"status":"SCHEDULED"}"#;
        let r: Reservation = serde_json::from_str(raw).unwrap();
        assert!(r.customer.is_none());
        assert!(r.room.is_none());
        assert_eq!(r.total_value, 0.0);
        assert_eq!(r.status, ReservationStatus::Scheduled);
    }

    #[test]
    fn dashboard_stats_default_missing_counters() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalRooms":12,"availableRooms":5}"#).unwrap();
        assert_eq!(stats.total_rooms, 12);
        assert_eq!(stats.available_rooms, 5);
        assert_eq!(stats.active_reservations, 0);
    }

    #[test]
    fn reservation_status_labels_are_exhaustive() {
        for status in [
            ReservationStatus::Scheduled,
            ReservationStatus::InUse,
            ReservationStatus::Finished,
            ReservationStatus::Canceled,
            ReservationStatus::Absence,
        ] {
            assert!(!status.label().is_empty());
            assert!(status.badge_class().contains("bg-"));
        }
    }
}
