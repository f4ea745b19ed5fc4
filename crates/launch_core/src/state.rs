use crate::LaunchRecord;

/// Shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Lifecycle of the launch fetch, derived from [`LaunchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchState {
    records: Vec<LaunchRecord>,
    is_loading: bool,
    error_message: Option<String>,
    selected: Option<LaunchRecord>,
    fetched: bool,
}

impl LaunchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in the order the source returned them.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn selected(&self) -> Option<&LaunchRecord> {
        self.selected.as_ref()
    }

    /// Position of the selected record in the current list, if it is there.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.records.iter().position(|record| record == selected)
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.error_message.is_some() {
            LoadPhase::Failed
        } else if self.fetched {
            LoadPhase::Loaded
        } else {
            LoadPhase::Idle
        }
    }

    /// True once the fetch has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase(), LoadPhase::Loaded | LoadPhase::Failed)
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    // Leaves `error_message` alone; a stale error from an earlier attempt survives.
    pub(crate) fn apply_records(&mut self, records: Vec<LaunchRecord>) {
        self.is_loading = false;
        self.fetched = true;
        self.records = records;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.is_loading = false;
        self.error_message = Some(message);
    }

    pub(crate) fn select(&mut self, record: LaunchRecord) {
        self.selected = Some(record);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }
}
