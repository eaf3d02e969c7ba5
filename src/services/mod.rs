// Service exports
pub mod memory;
pub mod postgres;
pub mod recommendation;
pub mod selection;
pub mod store;

pub use memory::InMemoryStore;
pub use postgres::PostgresClient;
pub use recommendation::{get_recommended_candidates, Recommendation};
pub use selection::{list_niches, select_niche, select_style, MAX_CREATOR_STYLES};
pub use store::{MarketplaceStore, StyleWrite};
