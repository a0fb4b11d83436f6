//! View models - UI-independent screen state

mod character_list;

pub use character_list::CharacterListModel;
