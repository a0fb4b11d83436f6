//! Reactive screen state

mod character_list_state;

pub use character_list_state::CharacterListState;
