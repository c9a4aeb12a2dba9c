// ============================================================================
// ERRORES DE API - Taxonomía de fallos del backend
// ============================================================================
// 401/403 ⇒ Auth (manejado globalmente por el interceptor), resto de 4xx ⇒
// Validation, 5xx ⇒ Server, fallos de transporte/parseo ⇒ Network.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Credenciales inválidas o sesión expirada (HTTP 401/403)
    #[error("no autorizado (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// Rechazo del servidor distinto de autenticación (resto de 4xx)
    #[error("petición rechazada (HTTP {status}): {message}")]
    Validation { status: u16, message: String },

    /// Error interno del servicio (5xx)
    #[error("error del servidor (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Fallo de transporte o respuesta imposible de deserializar
    #[error("error de red: {0}")]
    Network(String),
}

impl ApiError {
    /// Clasifica una respuesta no-2xx según su código de estado
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => ApiError::Auth { status, message },
            400..=499 => ApiError::Validation { status, message },
            _ => ApiError::Server { status, message },
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// Mensaje plano para mostrar junto al control que originó la operación
    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message, .. } => message,
            ApiError::Network(message) => message,
        }
    }
}
