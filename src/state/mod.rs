pub mod interceptor;
pub mod mutation;
pub mod query_cache;
pub mod reactivity;
pub mod session_state;

pub use interceptor::{install_auth_interceptor, Navigator, HOME_PATH, LOGIN_PATH};
pub use mutation::{Mutation, MutationStatus};
pub use query_cache::{QueryCache, QueryKey, QueryResult, QueryStatus};
pub use session_state::SessionStore;
