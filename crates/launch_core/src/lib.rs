//! Launch core: pure state machine for the launch list and its selection.
mod effect;
mod msg;
mod record;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use record::LaunchRecord;
pub use state::{LaunchState, LoadPhase, UNKNOWN_ERROR_MESSAGE};
pub use update::update;
