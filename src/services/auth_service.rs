use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{UpdateUserRequest, User, UserAccount, UserRole},
};

/// In-memory member directory backing sign-up and sign-in.
///
/// The directory only stores and looks up bcrypt hashes. Hashing and
/// verification happen in the handlers, outside the directory lock.
#[derive(Debug, Default)]
pub struct UserDirectory {
    accounts: HashMap<Uuid, UserAccount>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_up(&mut self, email: &str, password_hash: String, name: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        if self.find_by_email(&email).is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            name: name.trim().to_string(),
            role: UserRole::User,
            reputation: 0,
            join_date: Utc::now(),
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/initials/svg?seed={}",
                name.trim().replace(' ', "%20")
            )),
        };

        self.accounts.insert(
            user.id,
            UserAccount {
                user: user.clone(),
                password_hash,
            },
        );

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// The account's profile and stored hash, for verification outside the
    /// lock. An unknown email fails the same way as a wrong password.
    pub fn credentials(&self, email: &str) -> Result<(User, String)> {
        self.find_by_email(&email.trim().to_lowercase())
            .map(|account| (account.user.clone(), account.password_hash.clone()))
            .ok_or_else(invalid_credentials)
    }

    /// Applies a profile edit. Snapshots already embedded in questions and
    /// answers keep the old values.
    pub fn update_user(&mut self, user_id: Uuid, update: UpdateUserRequest) -> Result<User> {
        let account = self
            .accounts
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(name) = update.name {
            account.user.name = name;
        }
        if let Some(avatar) = update.avatar {
            account.user.avatar = Some(avatar);
        }

        Ok(account.user.clone())
    }

    pub fn get(&self, user_id: Uuid) -> Option<&User> {
        self.accounts.get(&user_id).map(|account| &account.user)
    }

    fn find_by_email(&self, email: &str) -> Option<&UserAccount> {
        self.accounts
            .values()
            .find(|account| account.user.email == email)
    }
}

pub fn invalid_credentials() -> AppError {
    AppError::Authentication("Invalid email or password".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stand-in hash; the directory never inspects it
    fn hash(tag: &str) -> String {
        format!("$2b$04$hash-of-{tag}")
    }

    #[test]
    fn test_sign_up_stores_the_given_hash() {
        let mut directory = UserDirectory::new();
        let user = directory
            .sign_up("Ada@Example.com", hash("hunter22"), "Ada Lovelace")
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.reputation, 0);
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/initials/svg?seed=Ada%20Lovelace")
        );

        let (found, stored) = directory.credentials(" ADA@example.com ").unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(stored, hash("hunter22"));
    }

    #[test]
    fn test_duplicate_email_conflicts() {
        let mut directory = UserDirectory::new();
        directory.sign_up("ada@example.com", hash("a"), "Ada").unwrap();

        let err = directory
            .sign_up("ada@example.com", hash("b"), "Ada Again")
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_unknown_email_is_rejected() {
        let directory = UserDirectory::new();

        assert!(matches!(
            directory.credentials("nobody@example.com"),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn test_update_user_changes_profile() {
        let mut directory = UserDirectory::new();
        let user = directory.sign_up("ada@example.com", hash("a"), "Ada").unwrap();

        let updated = directory
            .update_user(
                user.id,
                UpdateUserRequest {
                    name: Some("Countess Ada".to_string()),
                    avatar: None,
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Countess Ada");
        assert_eq!(directory.get(user.id).unwrap().name, "Countess Ada");
        assert!(matches!(
            directory.update_user(Uuid::new_v4(), UpdateUserRequest::default()),
            Err(AppError::NotFound(_))
        ));
    }
}
