use blockscout_service_launcher::test_database::TestDbGuard;
use hr_schema_logic::{
    diff, inspect, migration_status, pending_count, reset, up, verify, Difference,
    SchemaError, SchemaSnapshot,
};
use migration::{Catalog, Migrator};
use pretty_assertions::assert_eq;
use sea_orm::ConnectionTrait;

async fn init_db(name: &str) -> TestDbGuard {
    TestDbGuard::new::<Migrator>(name).await
}

#[tokio::test]
#[ignore = "needs database to run"]
async fn migrated_schema_matches_catalog() {
    let db = init_db("logic_migrated_schema_matches_catalog").await;
    let catalog = Catalog::hr();

    let actual = inspect(&db).await.unwrap();
    let diff = diff(&SchemaSnapshot::expected(&catalog), &actual);
    assert!(diff.is_empty(), "unexpected drift:\n{diff}");
    assert_eq!(actual.tables.len(), catalog.len());

    verify(&db, &catalog).await.unwrap();
}

#[tokio::test]
#[ignore = "needs database to run"]
async fn status_tracks_applied_migrations() {
    let db = init_db("logic_status_tracks_applied_migrations").await;

    let status = migration_status(&db).await.unwrap();
    assert_eq!(status.len(), 1);
    assert!(status[0].applied);
    assert_eq!(pending_count(&db).await.unwrap(), 0);

    reset(&db).await.unwrap();
    assert_eq!(pending_count(&db).await.unwrap(), 1);
    let snapshot = inspect(&db).await.unwrap();
    assert!(snapshot.tables.is_empty(), "{:?}", snapshot.tables.keys());

    up(&db, None).await.unwrap();
    assert_eq!(pending_count(&db).await.unwrap(), 0);
    verify(&db, &Catalog::hr()).await.unwrap();
}

#[tokio::test]
#[ignore = "needs database to run"]
async fn manual_changes_are_detected() {
    let db = init_db("logic_manual_changes_are_detected").await;
    db.execute_unprepared("ALTER TABLE holidays ALTER COLUMN name TYPE varchar(300)")
        .await
        .unwrap();
    db.execute_unprepared("DROP INDEX ix_audit_logs_user_id")
        .await
        .unwrap();
    db.execute_unprepared("CREATE TABLE scratch (id int)")
        .await
        .unwrap();

    let drift = match verify(&db, &Catalog::hr()).await {
        Err(SchemaError::Drift(drift)) => drift,
        other => panic!("expected drift, got {other:?}"),
    };
    let tables: Vec<_> = drift
        .differences
        .iter()
        .map(|difference| match difference {
            Difference::ColumnMismatch { table, column, .. } => format!("{table}.{column}"),
            Difference::MissingIndex { name, .. } => name.clone(),
            Difference::UnexpectedTable { table } => table.clone(),
            other => panic!("unexpected difference {other}"),
        })
        .collect();
    assert_eq!(
        tables,
        vec!["ix_audit_logs_user_id", "holidays.name", "scratch"]
    );
}
