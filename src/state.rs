use crate::models::{SessionInfo, Theme};
use crate::storage::Store;

/// Everything the renderers need that outlives a single response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub theme: Theme,
    pub session: Option<SessionInfo>,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            session: None,
        }
    }

    pub fn from_store(store: &Store) -> Self {
        Self::new(Theme::from_stored(store.get(Theme::STORAGE_KEY)))
    }
}
