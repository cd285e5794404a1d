// SPDX-License-Identifier: MPL-2.0
//! In-memory account gateway adapter.
//!
//! The desktop build keeps accounts in a mutex-guarded map for the lifetime
//! of the process. The registry exists so the full sign-up → sign-in →
//! reset flow works offline; passwords are compared verbatim because this
//! adapter is the trust boundary's local stand-in, not a credential store.

use super::port::{AccountGateway, Credentials, GatewayError, PasswordReset, Profile, Registration};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct AccountRecord {
    name: String,
    password: String,
}

/// Session-lifetime account registry.
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    accounts: Mutex<HashMap<String, AccountRecord>>,
}

impl InMemoryAccounts {
    /// Seeds the registry with an account. Builder-style, mainly for tests.
    #[must_use]
    pub fn with_account(self, name: &str, email: &str, password: &str) -> Self {
        {
            let mut accounts = self.accounts.lock().expect("account registry poisoned");
            accounts.insert(
                normalize_email(email),
                AccountRecord {
                    name: name.to_string(),
                    password: password.to_string(),
                },
            );
        }
        self
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.lock().map(|a| a.len()).unwrap_or(0)
    }

    /// Returns true when no account is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// E-mail addresses compare case-insensitively.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AccountGateway for InMemoryAccounts {
    fn sign_in(&self, credentials: &Credentials) -> Result<Profile, GatewayError> {
        let accounts = self.accounts.lock().expect("account registry poisoned");
        let key = normalize_email(&credentials.email);
        match accounts.get(&key) {
            Some(record) if record.password == credentials.password => Ok(Profile {
                name: record.name.clone(),
                email: key,
            }),
            // Unknown e-mail and wrong password answer the same
            _ => Err(GatewayError::InvalidCredentials),
        }
    }

    fn sign_up(&self, registration: &Registration) -> Result<(), GatewayError> {
        let mut accounts = self.accounts.lock().expect("account registry poisoned");
        let key = normalize_email(&registration.email);
        if accounts.contains_key(&key) {
            return Err(GatewayError::EmailAlreadyRegistered);
        }
        accounts.insert(
            key,
            AccountRecord {
                name: registration.name.clone(),
                password: registration.password.clone(),
            },
        );
        Ok(())
    }

    fn reset_password(&self, reset: &PasswordReset) -> Result<(), GatewayError> {
        let mut accounts = self.accounts.lock().expect("account registry poisoned");
        let key = normalize_email(&reset.email);
        match accounts.get_mut(&key) {
            Some(record) => {
                record.password = reset.password.clone();
                Ok(())
            }
            None => Err(GatewayError::AccountNotFound),
        }
    }
}
