pub mod use_hash_navigation;

pub use use_hash_navigation::{use_hash_navigation, HashNavigation};
