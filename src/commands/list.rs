use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::client::{UserSource, UsersClient};
use crate::error::Result;
use crate::render::{ADDRESS_PLACEHOLDER, COMPANY_PLACEHOLDER};
use crate::types::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Website")]
    website: String,
    #[tabled(rename = "Company")]
    company: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            city: user
                .address
                .as_ref()
                .map_or_else(|| ADDRESS_PLACEHOLDER.to_string(), |a| a.city.clone()),
            website: user.website.clone(),
            company: user
                .company
                .as_ref()
                .map_or_else(|| COMPANY_PLACEHOLDER.to_string(), |c| c.name.clone()),
        }
    }
}

fn format_users(users: &[User], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(users)?),
        OutputFormat::Table => {
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
    }
}

pub async fn list(client: &UsersClient, format: OutputFormat) -> Result<()> {
    let users = client.fetch_users().await?;
    println!("{}", format_users(&users, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Company;

    fn sample() -> Vec<User> {
        vec![
            User {
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                company: Some(Company {
                    name: "Romaguera-Crona".to_string(),
                }),
                ..User::default()
            },
            User {
                name: "Ervin Howell".to_string(),
                ..User::default()
            },
        ]
    }

    #[test]
    fn test_table_has_placeholders() {
        let table = format_users(&sample(), OutputFormat::Table).unwrap();
        assert!(table.contains("Leanne Graham"));
        assert!(table.contains("Romaguera-Crona"));
        assert!(table.contains("N/A"));
        assert!(table.contains("—"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let json = format_users(&sample(), OutputFormat::Json).unwrap();
        let users: Vec<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(users, sample());
    }
}
