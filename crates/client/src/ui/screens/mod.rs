pub mod compose;
pub mod quotes;
