pub mod event;
pub mod text_match;
