pub mod dropdown;
pub mod header;
pub mod hooks;
pub mod idea_card;
pub mod ideas_grid;
pub mod layout;
pub mod ui;

pub use dropdown::Dropdown;
pub use header::Header;
pub use idea_card::{IdeaCard, IdeaIcon};
pub use ideas_grid::IdeasGrid;
pub use layout::Layout;
