/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Prefijo de versión de la API REST
pub const API_PREFIX: &str = "/api/v1";

/// Clave de localStorage donde persiste el token de sesión
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";

/// Tamaño de página del listado de todos
pub const PER_PAGE: u64 = 5;
