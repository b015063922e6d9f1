//! Command implementations

mod init;
mod list;
mod run;
mod show;

pub use init::init;
pub use list::list;
pub use run::run;
pub use show::show;

use lessoncheck::adapters::Catalog;
use lessoncheck::config::GlobalConfig;
use lessoncheck::output::OutputMode;

/// Everything a command needs from the CLI layer
#[derive(Debug)]
pub struct Context {
    /// Output mode
    pub mode: OutputMode,
    /// Lessons available to this invocation
    pub catalog: Catalog,
    /// Loaded configuration
    pub config: GlobalConfig,
}
