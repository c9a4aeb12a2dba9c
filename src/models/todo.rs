use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo tal como lo devuelve el servicio.
/// `due_time` llega como fecha naive en UTC (sin offset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_time: Option<NaiveDateTime>,
}

/// Payload de creación
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveDateTime>,
}

/// Página de todos: datos de la página + total para paginar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodosResponse {
    pub data: Vec<Todo>,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_naive_due_time() {
        let raw = r#"{
            "id": "6f2c0fb2-58d4-4a2b-9f0a-0a6a8c0f8f11",
            "owner_id": "1d1a2b3c-4d5e-6f70-8192-a3b4c5d6e7f8",
            "title": "pagar alquiler",
            "description": null,
            "due_time": "2026-08-07T09:30:00"
        }"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.title, "pagar alquiler");
        assert!(todo.description.is_none());
        assert_eq!(
            todo.due_time.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2026-08-07 09:30"
        );
    }

    #[test]
    fn create_payload_omits_absent_fields() {
        let payload = TodoCreate {
            title: "comprar pan".into(),
            description: None,
            due_time: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"title":"comprar pan"}"#);
    }
}
