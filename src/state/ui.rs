#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: theme and the transient copied-message indicator.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Message whose "Copied!" indicator is currently showing; cleared
    /// again after a short delay.
    pub copied_message_id: Option<u64>,
}
