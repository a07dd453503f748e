//! Argument parsing and input validation for the `carpentry` command line.
//!
//! The record components trust their input; the checks here (required fields, whole-number
//! quantities, numeric priorities) are the front end's half of that contract.

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str = "\
Usage: carpentry <command> [args]

  init                                     create the database and tables
  job add <customer> <description> [status]
  job list [filter]
  job status <priority> <status>
  job move <from> <to>
  job up <priority> | job down <priority>
  job delete <priority>
  customer save <name> <phone> [email]
  customer list [search]
  customer delete <name>
  registry add <material> | registry remove <material> | registry list
  stock add <material> <quantity>
  stock use <material> <quantity>
  stock list [filter]
  stock delete <material>

Environment: DATABASE_PATH, DATABASE_MAX_CONNECTIONS, DEFAULT_JOB_STATUS, RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init,
    AddJob {
        customer: String,
        description: String,
        status: Option<String>,
    },
    ListJobs {
        filter: Option<String>,
    },
    SetJobStatus {
        priority: i64,
        status: String,
    },
    MoveJob {
        from: i64,
        to: i64,
    },
    MoveJobUp {
        priority: i64,
    },
    MoveJobDown {
        priority: i64,
    },
    DeleteJob {
        priority: i64,
    },
    SaveCustomer {
        name: String,
        phone: String,
        email: String,
    },
    ListCustomers {
        search: Option<String>,
    },
    DeleteCustomer {
        name: String,
    },
    RegisterMaterial {
        name: String,
    },
    UnregisterMaterial {
        name: String,
    },
    ListRegistry,
    AddStock {
        material: String,
        quantity: u32,
    },
    UseStock {
        material: String,
        quantity: u32,
    },
    ListStock {
        filter: Option<String>,
    },
    DeleteStock {
        material: String,
    },
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(|a| a.as_str()).collect();
        let command = match args.as_slice() {
            ["init"] => Command::Init,

            ["job", "add", customer, description, rest @ ..] if rest.len() <= 1 => {
                Command::AddJob {
                    customer: required(customer, "Customer")?,
                    description: required(description, "Description")?,
                    status: rest.first().and_then(|s| optional(s)),
                }
            }
            ["job", "list"] => Command::ListJobs { filter: None },
            ["job", "list", filter] => Command::ListJobs {
                filter: optional(filter),
            },
            ["job", "status", priority, status] => Command::SetJobStatus {
                priority: parse_priority(priority)?,
                status: required(status, "Status")?,
            },
            ["job", "move", from, to] => Command::MoveJob {
                from: parse_priority(from)?,
                to: parse_priority(to)?,
            },
            ["job", "up", priority] => Command::MoveJobUp {
                priority: parse_priority(priority)?,
            },
            ["job", "down", priority] => Command::MoveJobDown {
                priority: parse_priority(priority)?,
            },
            ["job", "delete", priority] => Command::DeleteJob {
                priority: parse_priority(priority)?,
            },

            ["customer", "save", name, phone, rest @ ..] if rest.len() <= 1 => {
                let name = name.trim();
                let phone = phone.trim();
                if name.is_empty() || phone.is_empty() {
                    bail!("Customer Name and Phone Number are required.");
                }
                Command::SaveCustomer {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    email: rest.first().map(|e| e.trim().to_string()).unwrap_or_default(),
                }
            }
            ["customer", "list"] => Command::ListCustomers { search: None },
            ["customer", "list", search] => Command::ListCustomers {
                search: optional(search),
            },
            ["customer", "delete", name] => Command::DeleteCustomer {
                name: required(name, "Customer name")?,
            },

            ["registry", "add", name] => Command::RegisterMaterial {
                name: required(name, "Material")?,
            },
            ["registry", "remove", name] => Command::UnregisterMaterial {
                name: required(name, "Material")?,
            },
            ["registry", "list"] => Command::ListRegistry,

            ["stock", "add", material, quantity] => Command::AddStock {
                material: required(material, "Material")?,
                quantity: parse_quantity(quantity)?,
            },
            ["stock", "use", material, quantity] => Command::UseStock {
                material: required(material, "Material")?,
                quantity: parse_quantity(quantity)?,
            },
            ["stock", "list"] => Command::ListStock { filter: None },
            ["stock", "list", filter] => Command::ListStock {
                filter: optional(filter),
            },
            ["stock", "delete", material] => Command::DeleteStock {
                material: required(material, "Material")?,
            },

            _ => bail!("unrecognized command\n\n{}", USAGE),
        };
        Ok(command)
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{} is required.", field);
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_priority(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("Priority must be a whole number, got '{}'.", value))
}

/// Quantities are plain digit strings; signs, decimals and blanks are rejected.
fn parse_quantity(value: &str) -> Result<u32> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        bail!("Please enter a whole number for quantity.");
    }
    value
        .parse::<u32>()
        .map_err(|_| anyhow!("Quantity {} is too large.", value))
}

#[cfg(test)]
mod tests {
    use super::Command;

    fn parse(line: &[&str]) -> anyhow::Result<Command> {
        let args: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        Command::parse(&args)
    }

    #[test]
    fn parses_job_add_with_and_without_status() {
        assert_eq!(
            parse(&["job", "add", "john smith", "Oak table"]).unwrap(),
            Command::AddJob {
                customer: "john smith".into(),
                description: "Oak table".into(),
                status: None,
            }
        );
        assert_eq!(
            parse(&["job", "add", "john smith", "Oak table", "Pending"]).unwrap(),
            Command::AddJob {
                customer: "john smith".into(),
                description: "Oak table".into(),
                status: Some("Pending".into()),
            }
        );
    }

    #[test]
    fn rejects_blank_required_fields() {
        assert!(parse(&["job", "add", "  ", "Oak table"]).is_err());
        assert!(parse(&["customer", "save", "John", ""]).is_err());
    }

    #[test]
    fn quantity_must_be_digits() {
        assert!(parse(&["stock", "add", "Oak", "-3"]).is_err());
        assert!(parse(&["stock", "add", "Oak", "2.5"]).is_err());
        assert!(parse(&["stock", "use", "Oak", "ten"]).is_err());
        assert_eq!(
            parse(&["stock", "use", "Oak", "10"]).unwrap(),
            Command::UseStock {
                material: "Oak".into(),
                quantity: 10,
            }
        );
    }

    #[test]
    fn parses_moves() {
        assert_eq!(
            parse(&["job", "move", "4", "2"]).unwrap(),
            Command::MoveJob { from: 4, to: 2 }
        );
        assert_eq!(parse(&["job", "up", "3"]).unwrap(), Command::MoveJobUp { priority: 3 });
        assert!(parse(&["job", "move", "four", "2"]).is_err());
    }

    #[test]
    fn customer_email_is_optional() {
        assert_eq!(
            parse(&["customer", "save", "jane doe", "555-1234"]).unwrap(),
            Command::SaveCustomer {
                name: "jane doe".into(),
                phone: "555-1234".into(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(parse(&["jobs"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
