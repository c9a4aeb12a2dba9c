// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una llamada por operación remota. El token se lee del Session Store en el
// momento de cada request, nunca al construir el cliente. Sin reintentos:
// la política de reintento es del llamador.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{ErrorBody, Message, Todo, TodoCreate, TodosResponse, Token};
use crate::state::session_state::SessionStore;
use crate::utils::constants::{API_PREFIX, BACKEND_URL};

/// Cliente del backend de todos
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            base_url: format!("{}{}", BACKEND_URL, API_PREFIX),
            session,
        }
    }

    /// Adjunta el bearer actual (si hay sesión) al request saliente
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Login con flujo OAuth2 password (form-urlencoded)
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let url = format!("{}/login/access-token", self.base_url);
        let body = format!(
            "grant_type=password&username={}&password={}",
            encode_form(username),
            encode_form(password)
        );

        log::info!("🔐 Iniciando sesión: {}", username);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::network(format!("no se pudo construir el request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::into_json(response).await
    }

    /// Listado paginado: `GET /todos/?skip=N&limit=M` → `{data, count}`
    pub async fn read_todos(&self, skip: u64, limit: u64) -> Result<TodosResponse, ApiError> {
        let url = format!("{}/todos/?skip={}&limit={}", self.base_url, skip, limit);

        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let page: TodosResponse = Self::into_json(response).await?;
        log::info!("📋 Todos recibidos: {} de {}", page.data.len(), page.count);
        Ok(page)
    }

    pub async fn create_todo(&self, todo: &TodoCreate) -> Result<Todo, ApiError> {
        let url = format!("{}/todos/", self.base_url);

        log::info!("📝 Creando todo: {}", todo.title);

        let response = self
            .with_auth(Request::post(&url))
            .json(todo)
            .map_err(|e| ApiError::network(format!("no se pudo serializar el todo: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::into_json(response).await
    }

    pub async fn delete_todo(&self, id: &Uuid) -> Result<Message, ApiError> {
        let url = format!("{}/todos/{}", self.base_url, id);

        log::info!("🗑️ Borrando todo: {}", id);

        let response = self
            .with_auth(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Self::into_json(response).await
    }

    /// Respuesta 2xx ⇒ payload deserializado; en otro caso ApiError tipado
    async fn into_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(Self::fail(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::network(format!("respuesta inválida: {}", e)))
    }

    /// Extrae el `detail` del cuerpo de error si existe; si no, el texto crudo
    async fn fail(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.detail)
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        response.status_text()
                    } else {
                        body
                    }
                }),
            Err(_) => response.status_text(),
        };
        ApiError::from_status(status, message)
    }
}

fn encode_form(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
