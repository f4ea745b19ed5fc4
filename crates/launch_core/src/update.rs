use crate::{Effect, LaunchState, Msg, UNKNOWN_ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: LaunchState, msg: Msg) -> (LaunchState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchStart => {
            state.begin_fetch();
            vec![Effect::FetchLaunches]
        }
        Msg::FetchSuccess(records) => {
            state.apply_records(records);
            Vec::new()
        }
        Msg::FetchError(message) => {
            state.apply_failure(normalize_message(message));
            Vec::new()
        }
        Msg::SelectRecord(record) => {
            state.select(record);
            Vec::new()
        }
        Msg::ClearSelection => {
            state.clear_selection();
            Vec::new()
        }
    };

    (state, effects)
}

fn normalize_message(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
