pub mod constants;
pub mod pagination;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use constants::{BACKEND_URL, PER_PAGE, STORAGE_KEY_ACCESS_TOKEN};
pub use pagination::{page_from_search, to_offset, total_pages, PageWindow};
