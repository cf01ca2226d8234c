pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod draft;
pub mod error;
pub mod ops;
pub mod selection;
pub mod toast;
pub mod undo;

pub use tasklane_shared as wire;
