//! Ranked list views and the action/reducer/effect runtime driving them.
//!
//! Data flow:
//! backend → full ranked list → `filter` → `Window` → displayed rows.
//! `ListView` holds one list's lifecycle; `Runtime` owns the `AppState`,
//! runs the reducer and executes effects on tokio.

pub mod action;
pub mod effects;
pub mod filter;
pub mod interactive;
pub mod list;
pub mod reducer;
pub mod reducers;
pub mod render;
pub mod runtime;
pub mod search;
pub mod state;
pub mod window;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use filter::{filter, Filterable};
pub use list::{ListPhase, ListView};
pub use runtime::Runtime;
pub use state::AppState;
pub use window::Window;
