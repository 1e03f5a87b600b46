use serde::{Deserialize, Serialize};

/// Embedded reference to another aggregate, as the API nests it.
///
/// The backend embeds `{id, nombre}` objects inside products
/// (`marca`, `linea`), sales (`usuario`) and sale lines (`producto`).
/// Some embeddings omit the id (`venta.usuario` carries only the name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntityRef {
    #[serde(default)]
    pub id: Option<i32>,

    #[serde(rename = "nombre", default)]
    pub name: String,
}

impl EntityRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_optional_on_the_wire() {
        let full: EntityRef = serde_json::from_str(r#"{"id": 3, "nombre": "Acme"}"#).unwrap();
        assert_eq!(full, EntityRef::new(3, "Acme"));

        let name_only: EntityRef = serde_json::from_str(r#"{"nombre": "Ana"}"#).unwrap();
        assert_eq!(name_only, EntityRef::named("Ana"));
    }
}
