use crate::domain::common::{AggregateId, EntityRef};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductLineId(pub i32);

impl ProductLineId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for ProductLineId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(ProductLineId::new)
            .map_err(|e| format!("Invalid product line id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product line (línea): a family of products within one brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLine {
    pub id: ProductLineId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    /// Owning brand, embedded as `{id, nombre}`.
    #[serde(rename = "marca")]
    pub brand: EntityRef,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /lineas`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductLineDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "id_marca")]
    pub brand_id: Option<i32>,
}

impl ProductLineDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre de la línea es obligatorio".into());
        }
        if self.brand_id.is_none() {
            return Err("Selecciona una marca".into());
        }
        Ok(())
    }
}
