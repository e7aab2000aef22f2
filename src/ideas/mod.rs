//! Idea list pipeline: backend records are normalized into the canonical
//! [`Idea`](crate::models::Idea) shape, then filtered and paged for display.

pub mod display;
pub mod filter;
pub mod normalize;

pub use filter::{select, IdeaQuery, Pager, Selection, GRID_PAGE_SIZE};
pub use normalize::{normalize, normalize_all, normalize_at};
