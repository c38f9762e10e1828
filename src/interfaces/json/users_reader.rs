use crate::domain::account::{Account, Role};
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

/// One entry of the users input file.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub is_admin: bool,
}

/// Reads the `username -> {password, is_admin}` JSON records.
///
/// Wraps any `Read` source (File, test buffer). Loaded once at startup;
/// malformed input is a startup error, not a menu condition.
pub struct UsersReader<R: Read> {
    source: R,
}

impl<R: Read> UsersReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes the records into accounts, `is_admin` picking the role.
    pub fn accounts(self) -> Result<Vec<Account>> {
        let records: BTreeMap<String, UserRecord> = serde_json::from_reader(self.source)?;
        Ok(records
            .into_iter()
            .map(|(username, record)| {
                let role = if record.is_admin {
                    Role::Administrator
                } else {
                    Role::Shopper
                };
                Account::new(username, record.password, role)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_roles_from_flag() {
        let data = r#"{
            "alice": { "password": "wonderland", "is_admin": false },
            "bob": { "password": "builder", "is_admin": true }
        }"#;
        let accounts = UsersReader::new(data.as_bytes()).accounts().unwrap();

        assert_eq!(accounts.len(), 2);
        let alice = accounts.iter().find(|a| a.username == "alice").unwrap();
        assert_eq!(alice.role, Role::Shopper);
        let bob = accounts.iter().find(|a| a.username == "bob").unwrap();
        assert_eq!(bob.role, Role::Administrator);
        assert!(bob.session_token.is_none());
        assert!(bob.cart.is_empty());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let data = r#"{ "alice": { "password": "wonderland" } }"#;
        assert!(UsersReader::new(data.as_bytes()).accounts().is_err());
    }
}
