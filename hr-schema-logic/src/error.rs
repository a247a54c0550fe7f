use crate::diff::SchemaDiff;
use migration::schema::CatalogError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("schema drift detected:\n{0}")]
    Drift(SchemaDiff),
}
