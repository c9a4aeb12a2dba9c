pub mod use_auth;
pub mod use_todos;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_todos::{use_todos, UseTodosHandle};
