use crate::domain::common::{AggregateId, EntityRef};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sellable product with the stock snapshot as of last fetch.
///
/// Price and stock arrive under both snake and camel case names depending on
/// the backend snapshot, and sometimes as strings; both are normalized here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(
        rename = "precio_unitario",
        alias = "precioUnitario",
        deserialize_with = "lenient::f64_lenient"
    )]
    pub unit_price: f64,

    #[serde(
        rename = "stock_actual",
        alias = "stockActual",
        deserialize_with = "lenient::i32_lenient"
    )]
    pub stock: i32,

    #[serde(rename = "imagen", default)]
    pub image: Option<String>,

    #[serde(rename = "marca", default)]
    pub brand: EntityRef,

    #[serde(rename = "linea", default)]
    pub line: EntityRef,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /productos` and `PATCH /productos/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,

    #[serde(rename = "stock_actual")]
    pub stock: i32,

    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "id_marca")]
    pub brand_id: Option<i32>,

    #[serde(rename = "id_linea")]
    pub line_id: Option<i32>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del producto es obligatorio".into());
        }
        if self.unit_price <= 0.0 {
            return Err("El precio unitario debe ser mayor a cero".into());
        }
        if self.stock < 0 {
            return Err("El stock no puede ser negativo".into());
        }
        if self.brand_id.is_none() {
            return Err("Selecciona una marca".into());
        }
        if self.line_id.is_none() {
            return Err("Selecciona una línea".into());
        }
        Ok(())
    }
}

/// Association between a product and one of its suppliers.
///
/// Returned by `GET /productos/:id/proveedores` and sent back (inside
/// [`AssignSuppliersRequest`]) by `PUT /productos/:id/proveedores`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierLink {
    #[serde(rename = "proveedorId")]
    pub supplier_id: i32,

    #[serde(rename = "precioCompra", deserialize_with = "lenient::f64_lenient")]
    pub purchase_price: f64,

    #[serde(rename = "codigoProveedor", default)]
    pub supplier_code: Option<String>,
}

impl SupplierLink {
    pub fn validate(&self) -> Result<(), String> {
        if self.purchase_price <= 0.0 {
            return Err("El precio de compra debe ser un número positivo".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignSuppliersRequest {
    #[serde(rename = "proveedores")]
    pub suppliers: Vec<SupplierLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_accepts_both_field_spellings() {
        let snake: Product = serde_json::from_str(
            r#"{"id": 1, "nombre": "Widget", "precio_unitario": "10.50", "stock_actual": 5,
                "marca": {"id": 1, "nombre": "Acme"}, "linea": {"id": 2, "nombre": "Basics"}}"#,
        )
        .unwrap();
        assert_eq!(snake.unit_price, 10.5);
        assert_eq!(snake.stock, 5);

        let camel: Product = serde_json::from_str(
            r#"{"id": 1, "nombre": "Widget", "precioUnitario": 10.5, "stockActual": "5"}"#,
        )
        .unwrap();
        assert_eq!(camel.unit_price, 10.5);
        assert_eq!(camel.stock, 5);
        assert!(camel.brand.id.is_none());
    }

    #[test]
    fn dto_validation() {
        let mut dto = ProductDto {
            name: "Widget".into(),
            unit_price: 10.0,
            stock: 3,
            brand_id: Some(1),
            line_id: Some(2),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.unit_price = 0.0;
        assert!(dto.validate().is_err());
    }
}
