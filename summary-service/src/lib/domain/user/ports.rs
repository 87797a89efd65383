use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Checks email availability, hashes the password, and persists the
    /// new identity.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - another identity owns this email
    /// * `Hashing` - password hashing failed
    /// * `DatabaseError` - persistence failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - lookup failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve a user by login email.
    ///
    /// # Errors
    /// * `NotFound` - no user with this email
    /// * `DatabaseError` - lookup failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;

    /// Apply a partial profile update (name and/or email).
    ///
    /// A new email must not belong to a different user. Re-submitting the
    /// caller's current email is a no-op success.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `EmailAlreadyRegistered` - new email owned by a different user
    /// * `DatabaseError` - persistence failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The store is the authority on email uniqueness: implementations must
/// surface a unique-constraint violation as `EmailAlreadyRegistered` so
/// racing registrations cannot both commit.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - unique constraint on email violated
    /// * `DatabaseError` - insert failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - query failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - query failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Update an existing user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `EmailAlreadyRegistered` - unique constraint on email violated
    /// * `DatabaseError` - update failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}
