use crate::app::record_service::{RecordService, StockIntake};
use crate::infra::config;
use crate::transport::cli::command::Command;
use crate::transport::cli::types::CliResponse;
use anyhow::Result;
use serde_json::json;

/// Runs one command against the service and describes the outcome.
///
/// Expected refusals (unknown material, insufficient stock, missing job) come back as an
/// unsuccessful `CliResponse`; storage failures are returned as errors.
pub async fn execute(service: &RecordService, command: Command) -> Result<CliResponse> {
    let response = match command {
        Command::Init => {
            let tables = service.store().table_names().await?;
            CliResponse::ok(json!({ "tables": tables }))
        }

        Command::AddJob {
            customer,
            description,
            status,
        } => {
            let status = status.unwrap_or_else(config::default_job_status);
            let job = service.jobs().append(&customer, &description, &status).await?;
            CliResponse::ok(json!(job))
        }
        Command::ListJobs { filter } => {
            let jobs = service.jobs().list(filter.as_deref()).await?;
            CliResponse::ok(json!(jobs))
        }
        Command::SetJobStatus { priority, status } => {
            if service.jobs().update_status(priority, &status).await? {
                CliResponse::ok(json!(service.jobs().get(priority).await?))
            } else {
                CliResponse::failed(format!("No job at priority {}.", priority))
            }
        }
        Command::MoveJob { from, to } => {
            moved(service, from, service.jobs().move_to(from, to).await?).await?
        }
        Command::MoveJobUp { priority } => {
            moved(service, priority, service.jobs().move_up(priority).await?).await?
        }
        Command::MoveJobDown { priority } => {
            moved(service, priority, service.jobs().move_down(priority).await?).await?
        }
        Command::DeleteJob { priority } => {
            if service.jobs().delete(priority).await? {
                CliResponse::ok(json!(service.jobs().list(None).await?))
            } else {
                CliResponse::failed(format!("No job at priority {}.", priority))
            }
        }

        Command::SaveCustomer { name, phone, email } => {
            let customer = service.customers().save(&name, &phone, &email).await?;
            CliResponse::ok(json!(customer))
        }
        Command::ListCustomers { search } => {
            let customers = match search {
                Some(term) => service.customers().search(&term).await?,
                None => service.customers().list().await?,
            };
            CliResponse::ok(json!(customers))
        }
        Command::DeleteCustomer { name } => {
            if service.customers().delete(&name).await? {
                CliResponse::ok(json!({ "deleted": name }))
            } else {
                CliResponse::failed(format!("No customer named {}.", name))
            }
        }

        Command::RegisterMaterial { name } => {
            let name = service.registry().add(&name).await?;
            CliResponse::ok(json!({ "registered": name }))
        }
        Command::UnregisterMaterial { name } => {
            if service.registry().remove(&name).await? {
                CliResponse::ok(json!({ "removed": name }))
            } else {
                CliResponse::failed(format!("{} is not in the registry.", name))
            }
        }
        Command::ListRegistry => CliResponse::ok(json!(service.registry().list().await?)),

        Command::AddStock { material, quantity } => {
            match service.receive_stock(&material, quantity).await? {
                StockIntake::Received { material, .. } => {
                    CliResponse::ok(json!(service.inventory().get(&material).await?))
                }
                StockIntake::Unregistered => {
                    CliResponse::failed("This material is not in the database registry.")
                }
            }
        }
        Command::UseStock { material, quantity } => {
            if service.inventory().use_stock(&material, quantity).await? {
                CliResponse::ok(json!(service.inventory().get(&material).await?))
            } else {
                CliResponse::failed(format!("Insufficient stock for {}.", material))
            }
        }
        Command::ListStock { filter } => {
            CliResponse::ok(json!(service.inventory().list(filter.as_deref()).await?))
        }
        Command::DeleteStock { material } => {
            if service.inventory().delete_material(&material).await? {
                CliResponse::ok(json!({ "deleted": material }))
            } else {
                CliResponse::failed(format!("No stock recorded for {}.", material))
            }
        }
    };
    Ok(response)
}

async fn moved(service: &RecordService, from: i64, landed: Option<i64>) -> Result<CliResponse> {
    let response = match landed {
        Some(priority) => CliResponse::ok(json!({
            "from": from,
            "to": priority,
            "jobs": service.jobs().list(None).await?,
        })),
        None => CliResponse::failed(format!("No job at priority {}.", from)),
    };
    Ok(response)
}
