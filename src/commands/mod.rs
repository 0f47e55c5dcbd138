pub mod branches;
pub mod compare;
pub mod config;
pub mod context;
pub mod history;
pub mod index;
pub mod open;
pub mod status;
pub mod terminal_host;

pub use branches::*;
pub use compare::*;
pub use config::*;
pub use context::*;
pub use history::*;
pub use index::*;
pub use open::*;
pub use status::*;
pub use terminal_host::*;
