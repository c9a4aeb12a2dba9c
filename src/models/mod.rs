pub mod auth;
pub mod todo;

pub use auth::{ErrorBody, Token};
pub use todo::{Message, Todo, TodoCreate, TodosResponse};
