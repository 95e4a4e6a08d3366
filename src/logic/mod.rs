//! Pure state transitions for the package selection engine.
//!
//! Everything here mutates [`crate::state::PackagesState`] synchronously on
//! the single event-processing actor; network access lives in
//! [`crate::catalog`] and [`crate::worker`].

mod lists;
mod query;
mod rank;
mod results;

pub use lists::{
    add_all, add_selected, remove_all, remove_selected, reset_available, reset_chosen_filter,
    set_chosen_filter, toggle_available_mark, toggle_chosen_mark, visible_chosen,
};
pub use query::send_query;
pub use rank::{match_tier, rank_packages};
pub use results::handle_search_results;
