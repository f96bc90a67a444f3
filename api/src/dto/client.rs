use serde::Deserialize;

/// Query string of `GET /clientes/buscar`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub nombre: Option<String>,
}
