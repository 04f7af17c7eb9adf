pub mod matches;
pub mod ranking;
pub mod search;

pub use matches::reduce_matches;
pub use ranking::reduce_ranking;
pub use search::reduce_search;
