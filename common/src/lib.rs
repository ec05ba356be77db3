//! NASA Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態ロジック（IOなし）

pub mod types;
pub mod error;
pub mod policy;
pub mod normalize;
pub mod storage;
pub mod search;
pub mod pagination;
pub mod selection;
pub mod detail;
pub mod route;
pub mod export;
pub mod theme;
pub mod forms;

pub use types::{CatalogItem, DetailRecord, SelectionEntry, NO_DESCRIPTION};
pub use error::{CatalogError, Error, Result};
pub use policy::{EmptyTermPolicy, SearchPolicy, ZeroResultsPolicy};
pub use normalize::{parse_search_response, search_query, detail_query, endpoint, DEFAULT_API_BASE_URL};
pub use storage::{KeyValueStore, MemoryStore, SEARCH_TERM_KEY};
pub use search::{SearchController, SearchPhase, SearchState, SearchTicket};
pub use pagination::{Pagination, PageButton, PAGE_SIZE};
pub use selection::SelectionStore;
pub use detail::{resolve_detail, thumbnail_url, close_action, CloseAction, DetailOutcome};
pub use route::RouteParams;
pub use export::{to_csv, export_filename, CSV_MIME};
pub use theme::Theme;
pub use forms::{FormEntry, FormInput, FormStore};
