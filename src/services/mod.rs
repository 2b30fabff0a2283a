/// Business logic layer
///
/// Currently holds the ranking engine; CRUD operations go straight from
/// handlers to the repositories in `db`.
pub mod ranking;

pub use ranking::RankingService;
