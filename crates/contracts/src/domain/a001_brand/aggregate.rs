use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub i32);

impl BrandId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for BrandId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(BrandId::new)
            .map_err(|e| format!("Invalid brand id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product brand (marca).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,

    #[serde(rename = "nombre")]
    pub name: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /marcas`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrandDto {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl BrandDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre de la marca es obligatorio".into());
        }
        Ok(())
    }
}
