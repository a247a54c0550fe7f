use clap::Parser;
use hr_schema_cli::{run, Args, Settings};
use rstest::rstest;

fn args(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("hr-schema").chain(args.iter().copied()))
        .expect("arguments must parse")
}

fn offline_settings() -> Settings {
    Settings {
        tracing: Default::default(),
        jaeger: Default::default(),
        database: None,
    }
}

#[rstest]
#[case(&["tables"])]
#[case(&["tables", "--domain", "payroll"])]
#[case(&["script"])]
#[case(&["script", "--down"])]
#[tokio::test]
async fn offline_commands_work_without_database(#[case] command: &[&str]) {
    run(args(command), offline_settings()).await.unwrap();
}

#[tokio::test]
async fn unknown_domain_is_rejected() {
    let err = run(args(&["tables", "--domain", "canteen"]), offline_settings())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unknown domain 'canteen'"), "{err}");
}

#[rstest]
#[case(&["up"])]
#[case(&["status"])]
#[case(&["verify"])]
#[tokio::test]
async fn database_commands_require_settings(#[case] command: &[&str]) {
    let err = run(args(command), offline_settings()).await.unwrap_err();
    assert!(
        err.to_string().contains("database settings are missing"),
        "{err}"
    );
}
