use crate::domain::common::{AggregateId, EntityRef};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub i32);

impl SaleId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(SaleId::new)
            .map_err(|e| format!("Invalid sale id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Recorded sale document.
///
/// `deleted_at` carries the soft-delete (cancellation) timestamp; a
/// cancelled sale stays in the register and can be restored, but cannot be
/// edited until it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "id_venta")]
    pub id: SaleId,

    #[serde(rename = "fecha_creacion")]
    pub created_at: chrono::DateTime<chrono::Utc>,

    #[serde(deserialize_with = "lenient::f64_lenient")]
    pub total: f64,

    /// Seller, embedded as `{nombre}` (id omitted by the API).
    #[serde(rename = "usuario", default)]
    pub seller: EntityRef,

    #[serde(rename = "detalles", default)]
    pub lines: Vec<SaleLine>,

    #[serde(rename = "fecha_eliminacion", default)]
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Sale {
    pub fn is_cancelled(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// One recorded line of a sale, with the authoritative backend pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(rename = "producto")]
    pub product: EntityRef,

    #[serde(rename = "cantidad")]
    pub quantity: u32,

    #[serde(rename = "precio_unitario", deserialize_with = "lenient::f64_lenient")]
    pub unit_price: f64,

    #[serde(deserialize_with = "lenient::f64_lenient")]
    pub subtotal: f64,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Minimal external-facing line shape.
///
/// Only the product reference and quantity are sent; the backend recomputes
/// authoritative pricing and performs the real stock check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLineDto {
    #[serde(rename = "id_producto")]
    pub product_id: i32,

    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Payload for `POST /venta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    #[serde(rename = "detalles")]
    pub lines: Vec<SaleLineDto>,
}

/// Payload for `PATCH /venta/:id/detalles`. The reason is mandatory and is
/// recorded in the sale's change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSaleLinesRequest {
    #[serde(rename = "detalles")]
    pub lines: Vec<SaleLineDto>,

    #[serde(rename = "motivo")]
    pub reason: String,
}

// ============================================================================
// Change history
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleAction {
    #[serde(rename = "CREACION")]
    Creation,
    #[serde(rename = "MODIFICACION")]
    Modification,
    #[serde(rename = "CANCELACION")]
    Cancellation,
    #[serde(rename = "RESTAURACION")]
    Restoration,
}

impl SaleAction {
    pub fn label(&self) -> &'static str {
        match self {
            SaleAction::Creation => "CREACION",
            SaleAction::Modification => "MODIFICACION",
            SaleAction::Cancellation => "CANCELACION",
            SaleAction::Restoration => "RESTAURACION",
        }
    }
}

/// One entry of `GET /venta/:id/historial`.
///
/// Before/after snapshots are kept as raw JSON: their shape follows the
/// backend's internal sale representation and is only pretty-printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleHistoryEntry {
    pub id: i32,

    #[serde(rename = "accion")]
    pub action: SaleAction,

    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,

    #[serde(rename = "datos_anteriores", default)]
    pub previous: Option<serde_json::Value>,

    #[serde(rename = "datos_nuevos", default)]
    pub current: Option<serde_json::Value>,

    #[serde(rename = "fecha")]
    pub date: chrono::DateTime<chrono::Utc>,

    #[serde(rename = "usuario", default)]
    pub user: EntityRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_parses_register_payload() {
        let sale: Sale = serde_json::from_str(
            r#"{
                "id_venta": 7,
                "fecha_creacion": "2025-03-15T14:02:26.000Z",
                "total": "1250.50",
                "usuario": {"nombre": "Ana"},
                "detalles": [
                    {"producto": {"id": 1, "nombre": "Widget"}, "cantidad": 2,
                     "precio_unitario": "625.25", "subtotal": 1250.5}
                ],
                "fecha_eliminacion": null
            }"#,
        )
        .unwrap();
        assert_eq!(sale.id.value(), 7);
        assert_eq!(sale.total, 1250.5);
        assert_eq!(sale.lines.len(), 1);
        assert_eq!(sale.lines[0].unit_price, 625.25);
        assert!(!sale.is_cancelled());
    }

    #[test]
    fn create_request_serializes_wire_names() {
        let req = CreateSaleRequest {
            lines: vec![SaleLineDto {
                product_id: 3,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"detalles": [{"id_producto": 3, "cantidad": 2}]})
        );
    }

    #[test]
    fn history_action_wire_names() {
        let entry: SaleHistoryEntry = serde_json::from_str(
            r#"{"id": 1, "accion": "MODIFICACION", "motivo": "cambio de cantidad",
                "datos_anteriores": {"total": 10}, "datos_nuevos": {"total": 20},
                "fecha": "2025-03-15T14:02:26Z", "usuario": {"nombre": "Ana"}}"#,
        )
        .unwrap();
        assert_eq!(entry.action, SaleAction::Modification);
        assert!(entry.previous.is_some());
    }
}
