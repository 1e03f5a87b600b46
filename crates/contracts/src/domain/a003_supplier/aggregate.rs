use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub i32);

impl SupplierId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid supplier id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Supplier (proveedor) of purchased goods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /proveedores`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del proveedor es obligatorio".into());
        }
        Ok(())
    }
}
