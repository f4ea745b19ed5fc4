use crate::LaunchRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The launch request is about to be sent.
    FetchStart,
    /// The launch request completed with a parsed body.
    FetchSuccess(Vec<LaunchRecord>),
    /// The launch request failed; carries the user-facing message.
    FetchError(String),
    /// User picked a record, e.g. clicked a list row.
    SelectRecord(LaunchRecord),
    /// User dismissed the detail view.
    ClearSelection,
}
