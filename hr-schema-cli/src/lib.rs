mod cli;
mod run;
mod settings;

pub use cli::{Args, Command};
pub use run::run;
pub use settings::Settings;
