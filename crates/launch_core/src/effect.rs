/// Side effects requested by [`crate::update`] and executed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue the outbound request for the launch list.
    FetchLaunches,
}
