pub mod config_error;
pub mod content_block;
pub mod section_content;
pub mod section_pager;
pub mod sidebar;
pub mod tech_layout;
pub mod top_bar;
