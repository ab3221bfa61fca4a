//! Verse ranking and the verse-store collaborator seam.

pub mod ranker;
pub mod store;

pub use ranker::{rank_and_select, select_verses};
pub use store::{CachedVerseStore, StaticVerseStore, VerseStore};
