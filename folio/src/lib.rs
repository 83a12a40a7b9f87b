//! A one-page portfolio for the terminal: a fixed navigation bar with an
//! overlay menu, and sections that reveal themselves as they scroll into
//! view.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod overlay;
pub mod page;
pub mod paths;
pub mod reveal;
pub mod runtime;
pub mod theme;

pub use app::{Action, Portfolio};
pub use config::Config;
pub use error::{ConfigError, FolioError};
