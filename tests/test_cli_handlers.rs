//! Command handling end to end against an in-memory store.

use carpentry_records::infra::config;
use carpentry_records::transport::cli::{execute, Command};
use carpentry_records::RecordService;
use serde_json::json;

fn command(line: &[&str]) -> Command {
    let args: Vec<String> = line.iter().map(|s| s.to_string()).collect();
    Command::parse(&args).expect("command should parse")
}

#[tokio::test]
async fn job_commands_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;

    for customer in ["ann", "bob", "cat", "dan"] {
        let response = execute(&service, command(&["job", "add", customer, "Cabinet"])).await?;
        assert!(response.success);
    }

    let moved = execute(&service, command(&["job", "move", "4", "2"])).await?;
    assert!(moved.success);
    let data = moved.data.ok_or("move returned no data")?;
    assert_eq!(data["to"], json!(2));
    let order: Vec<&str> = data["jobs"]
        .as_array()
        .ok_or("jobs should be an array")?
        .iter()
        .filter_map(|job| job["customer_name"].as_str())
        .collect();
    assert_eq!(order, vec!["Ann", "Dan", "Bob", "Cat"]);

    let status = execute(&service, command(&["job", "status", "1", "Finished"])).await?;
    assert_eq!(status.data.ok_or("status returned no data")?["status"], json!("Finished"));

    let missing = execute(&service, command(&["job", "delete", "9"])).await?;
    assert!(!missing.success);
    assert_eq!(service.jobs().count().await?, 4);
    Ok(())
}

#[tokio::test]
async fn job_without_status_gets_default() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;

    let response = execute(&service, command(&["job", "add", "ann", "Bench"])).await?;

    let job = service.jobs().get(1).await?.ok_or("job missing")?;
    assert!(response.success);
    assert_eq!(job.status, config::default_job_status());
    Ok(())
}

#[tokio::test]
async fn stock_commands_enforce_registry_and_stock_levels(
) -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;

    let unregistered = execute(&service, command(&["stock", "add", "oak", "10"])).await?;
    assert!(!unregistered.success);

    execute(&service, command(&["registry", "add", "oak"])).await?;
    let added = execute(&service, command(&["stock", "add", "OAK", "10"])).await?;
    assert!(added.success);
    assert_eq!(
        added.data.ok_or("stock add returned no data")?,
        json!({ "material": "Oak", "quantity": 10 })
    );

    let over = execute(&service, command(&["stock", "use", "Oak", "15"])).await?;
    assert!(!over.success);
    assert_eq!(over.error.as_deref(), Some("Insufficient stock for Oak."));

    let exact = execute(&service, command(&["stock", "use", "Oak", "10"])).await?;
    assert_eq!(exact.data.ok_or("stock use returned no data")?["quantity"], json!(0));
    Ok(())
}

#[tokio::test]
async fn customer_commands_upsert_by_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;

    execute(&service, command(&["customer", "save", "john smith", "555-1234"])).await?;
    execute(&service, command(&["customer", "save", "John Smith", "555-9999", "a@b.com"])).await?;

    let listed = execute(&service, command(&["customer", "list", "john"])).await?;
    let data = listed.data.ok_or("list returned no data")?;
    let rows = data.as_array().ok_or("customers should be an array")?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["phone"], json!("555-9999"));
    Ok(())
}

#[tokio::test]
async fn customer_delete_reports_unmatched_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;
    execute(&service, command(&["customer", "save", "john smith", "555-1234"])).await?;

    let missed = execute(&service, command(&["customer", "delete", "john smith"])).await?;
    assert!(!missed.success);
    assert_eq!(service.customers().list().await?.len(), 1);

    let deleted = execute(&service, command(&["customer", "delete", "John Smith"])).await?;
    assert!(deleted.success);
    assert!(service.customers().list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn registry_remove_reports_unknown_material() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;
    execute(&service, command(&["registry", "add", "oak"])).await?;

    let missed = execute(&service, command(&["registry", "remove", "Teak"])).await?;
    assert!(!missed.success);
    assert_eq!(service.registry().list().await?, vec!["Oak"]);

    let removed = execute(&service, command(&["registry", "remove", "Oak"])).await?;
    assert!(removed.success);
    assert!(service.registry().list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn stock_delete_reports_unknown_material() -> Result<(), Box<dyn std::error::Error>> {
    let service = RecordService::in_memory().await?;
    service.inventory().add_stock("Oak", 3).await?;

    let missed = execute(&service, command(&["stock", "delete", "Teak"])).await?;
    assert!(!missed.success);
    assert!(service.inventory().get("Oak").await?.is_some());

    let deleted = execute(&service, command(&["stock", "delete", "Oak"])).await?;
    assert!(deleted.success);
    assert_eq!(service.inventory().get("Oak").await?, None);
    Ok(())
}
