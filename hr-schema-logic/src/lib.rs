mod diff;
mod error;
mod inspect;
mod migrate;
mod script;
mod status;

pub use diff::{diff, verify, Difference, SchemaDiff};
pub use error::SchemaError;
pub use inspect::{
    inspect, ColumnSnapshot, ForeignKeySnapshot, IndexSnapshot, SchemaSnapshot, TableSnapshot,
};
pub use migrate::{down, fresh, reset, up};
pub use script::{render_down, render_up, to_script};
pub use status::{migration_status, pending_count, MigrationState};
