pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod log;
pub mod scanner;
pub mod service;

pub use codec::{ShortcutCodec, ShortcutInfo};
pub use entry::{Scope, StartupEntry};
pub use error::{Error, Result};
pub use service::StartupService;
