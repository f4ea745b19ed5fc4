//! Launch engine: fetches the launch list and drives the store.
mod fetch;
mod settings;
mod store;
mod types;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL, DEFAULT_LAUNCH_YEAR};
pub use settings::{load_settings, parse_settings, SettingsError, SETTINGS_FILENAME};
pub use store::LaunchStore;
pub use types::{FailureKind, FetchError};
