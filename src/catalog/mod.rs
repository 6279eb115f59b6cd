pub mod fixtures;
pub mod query;
pub mod seed;
pub mod styles;

pub use query::{
    query_artworks, search_artworks, ArtworkFilter, ArtworkPage, Pagination, DEFAULT_LIMIT,
};
pub use seed::{generate_catalog, seed_database, SeedOptions};
pub use styles::StyleSource;
