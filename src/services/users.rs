//! User management

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{NewUser, User},
};

use super::Library;

impl Library {
    /// Register a user. Fields are trimmed first; blank fields and an id
    /// already in use are rejected.
    pub fn add_user(&mut self, user: NewUser) -> AppResult<User> {
        let user = user.trimmed();
        user.validate()?;

        if self.find_user(&user.id).is_some() {
            tracing::warn!("Rejected duplicate user id {}", user.id);
            return Err(AppError::Conflict(format!(
                "A user with ID {} already exists",
                user.id
            )));
        }

        let user = User::from(user);
        self.repository.users.append(user.clone());
        self.log(format!("User added: {}", user.name));
        tracing::info!("User added: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.repository.users.find(|u| u.id == user_id)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repository.users.to_vec()
    }

    pub fn user_count(&self) -> usize {
        self.repository.users.len()
    }

    /// Remove a user along with their pending loan requests.
    /// Other requests keep their order.
    pub fn remove_user(&mut self, user_id: &str) -> AppResult<User> {
        let user = self
            .repository
            .users
            .remove(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("No user with ID {}", user_id)))?;

        let dropped = self.repository.loan_queue.retain(|r| r.user_id != user_id);

        self.log(format!("User removed: {}", user.name));
        tracing::info!(
            "User removed: {} ({}), {} pending request(s) dropped",
            user.name,
            user.id,
            dropped
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBook;

    #[test]
    fn test_add_and_find_user() {
        let mut lib = Library::new("Biblioteca");
        lib.add_user(NewUser::new("u1", "Ada")).unwrap();
        lib.add_user(NewUser::new("u2", "Grace")).unwrap();

        assert_eq!(lib.find_user("u2").map(|u| u.name.as_str()), Some("Grace"));
        assert!(lib.find_user("u3").is_none());
        assert_eq!(lib.user_count(), 2);
        assert_eq!(lib.recent_history(1)[0].action, "User added: Grace");
    }

    #[test]
    fn test_add_user_rejects_duplicates() {
        let mut lib = Library::new("Biblioteca");
        lib.add_user(NewUser::new("u1", "Ada")).unwrap();
        let err = lib.add_user(NewUser::new("u1", "Other")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_add_user_trims_literal_request() {
        let mut lib = Library::new("Biblioteca");
        let blank = NewUser {
            id: "u1".to_string(),
            name: "  ".to_string(),
        };
        assert!(matches!(lib.add_user(blank), Err(AppError::Validation(_))));

        let padded = NewUser {
            id: " u1 ".to_string(),
            name: " Ada".to_string(),
        };
        lib.add_user(padded).unwrap();
        assert_eq!(lib.find_user("u1").map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(lib.user_count(), 1);
    }

    #[test]
    fn test_remove_user_drops_only_their_requests() {
        let mut lib = Library::new("Biblioteca");
        lib.add_user(NewUser::new("u1", "Ada")).unwrap();
        lib.add_user(NewUser::new("u2", "Grace")).unwrap();
        lib.add_book(NewBook::new("Dune", "Herbert", "i1")).unwrap();
        lib.add_book(NewBook::new("Emma", "Austen", "i2")).unwrap();

        lib.request_loan("u1", "i1").unwrap();
        lib.request_loan("u2", "i1").unwrap();
        lib.request_loan("u1", "i2").unwrap();
        lib.request_loan("u2", "i2").unwrap();

        lib.remove_user("u1").unwrap();

        let pending: Vec<(String, String)> = lib
            .pending_requests()
            .into_iter()
            .map(|r| (r.user_id, r.isbn))
            .collect();
        assert_eq!(
            pending,
            vec![
                ("u2".to_string(), "i1".to_string()),
                ("u2".to_string(), "i2".to_string())
            ]
        );
        assert!(lib.find_user("u1").is_none());
    }

    #[test]
    fn test_remove_unknown_user() {
        let mut lib = Library::new("Biblioteca");
        assert!(matches!(lib.remove_user("ghost"), Err(AppError::NotFound(_))));
    }
}
