pub mod use_click_outside;

pub use use_click_outside::{use_click_outside, Disclosure};
