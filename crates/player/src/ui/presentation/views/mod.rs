//! Screen-level views

pub mod character_list_view;

pub use character_list_view::CharacterListView;
