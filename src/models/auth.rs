use serde::{Deserialize, Serialize};

/// Token de acceso emitido por el login (flujo OAuth2 password)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Cuerpo de error estándar del servicio: {"detail": "..."}
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
