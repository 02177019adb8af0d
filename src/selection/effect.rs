use crate::model::ResultsParams;
use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEffect {
    /// Command: fetch the currency catalog. Executed by the store,
    /// never forwarded to observers.
    LoadCatalog,
    /// Transient user-facing error notification.
    ShowError(String),
    /// Navigate to results with a snapshot of the current selection.
    Navigate(ResultsParams),
}

impl Effect for SelectionEffect {}
