//! Users slice: a read-only snapshot of the remote user directory.

mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use selectors::{
    author_name, select_all_users, select_user_by_id, users_error, users_status, UNKNOWN_AUTHOR,
};
pub use state::UsersState;
