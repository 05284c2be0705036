//! Service layer for user registration, review and presence.

use crate::notification::{domain::NotificationEvent, ports::NotificationSink};
use crate::user::{
    domain::{
        EmailAddress, ReviewDecision, User, UserDomainError, UserId, UserRegistration, UserStatus,
    },
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    department: String,
}

impl RegisterUserRequest {
    /// Creates a request with the sign-up fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

/// Service-level errors for user registry operations.
#[derive(Debug, Error)]
pub enum UserRegistryError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// The email address is already registered.
    #[error("email already registered: {0}")]
    EmailTaken(EmailAddress),

    /// No user carries the requested identifier.
    #[error("user not found: {0}")]
    NotFound(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for UserRegistryError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateEmail(email) => Self::EmailTaken(email),
            UserRepositoryError::NotFound(id) => Self::NotFound(id.to_string()),
            other => Self::Repository(other),
        }
    }
}

/// Result type for user registry operations.
pub type UserRegistryResult<T> = Result<T, UserRegistryError>;

/// User registration and review orchestration service.
pub struct UserRegistryService<R, N, C>
where
    R: UserRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    writer: Arc<Mutex<()>>,
}

impl<R, N, C> Clone for UserRegistryService<R, N, C>
where
    R: UserRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<R, N, C> UserRegistryService<R, N, C>
where
    R: UserRepository + ?Sized,
    N: NotificationSink + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new user registry service.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            clock,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Registers a `pending`, offline user and notifies the operator.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::Domain`] when a field is invalid,
    /// [`UserRegistryError::EmailTaken`] when the address is already
    /// registered, or [`UserRegistryError::Repository`] when persistence
    /// fails.
    pub async fn register_user(&self, request: RegisterUserRequest) -> UserRegistryResult<User> {
        let RegisterUserRequest {
            name,
            email,
            department,
        } = request;
        let registration = UserRegistration::new(&name, &email, &department)?;
        let _guard = self.writer.lock().await;
        if self
            .repository
            .find_by_email(registration.email())
            .await?
            .is_some()
        {
            return Err(UserRegistryError::EmailTaken(registration.email().clone()));
        }

        let user = User::register(registration, &*self.clock);
        self.repository.store(&user).await?;

        tracing::info!(user_id = %user.id(), email = %user.email(), "user registered");
        self.announce(NotificationEvent::user_registered(&user, &*self.clock))
            .await;
        Ok(user)
    }

    /// Approves or rejects the user identified by `id`.
    ///
    /// Setting the status the user already holds is a no-op. Moving into
    /// `approved` notifies the user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::Domain`] when `status` is `pending`,
    /// [`UserRegistryError::NotFound`] when `id` is malformed or unknown, or
    /// [`UserRegistryError::Repository`] when persistence fails.
    pub async fn set_user_status(&self, id: &str, status: UserStatus) -> UserRegistryResult<User> {
        self.review_and_set_presence(id, Some(status), None).await
    }

    /// Sets the presence flag of the user identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::NotFound`] when `id` is malformed or
    /// unknown, or [`UserRegistryError::Repository`] when persistence fails.
    pub async fn set_presence(&self, id: &str, online: bool) -> UserRegistryResult<User> {
        self.review_and_set_presence(id, None, Some(online)).await
    }

    /// Applies a review decision and a presence change as one write.
    ///
    /// Both inputs are validated before the user is loaded, and the stored
    /// record is replaced at most once, so a failure leaves it untouched.
    /// Only a transition into `approved` notifies the user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::Domain`] when neither change is given or
    /// `status` is `pending`, [`UserRegistryError::NotFound`] when `id` is
    /// malformed or unknown, or [`UserRegistryError::Repository`] when
    /// persistence fails.
    pub async fn review_and_set_presence(
        &self,
        id: &str,
        status: Option<UserStatus>,
        online: Option<bool>,
    ) -> UserRegistryResult<User> {
        if status.is_none() && online.is_none() {
            return Err(UserDomainError::NothingToUpdate.into());
        }
        let decision = status.map(ReviewDecision::try_from).transpose()?;

        let _guard = self.writer.lock().await;
        let mut user = self.find_user(id).await?;
        let reviewed = decision.is_some_and(|decision| user.review(decision, &*self.clock));
        let moved = online.is_some_and(|online| user.set_presence(online, &*self.clock));
        if !reviewed && !moved {
            tracing::debug!(user_id = %user.id(), "user unchanged");
            return Ok(user);
        }
        self.repository.update(&user).await?;

        if moved {
            tracing::debug!(user_id = %user.id(), online = user.is_online(), "user presence changed");
        }
        if reviewed {
            tracing::info!(user_id = %user.id(), status = %user.status(), "user reviewed");
            if user.status() == UserStatus::Approved {
                self.announce(NotificationEvent::user_approved(&user, &*self.clock))
                    .await;
            }
        }
        Ok(user)
    }

    /// Returns the user identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::NotFound`] when `id` is malformed or
    /// unknown, or [`UserRegistryError::Repository`] when lookup fails.
    pub async fn find_user(&self, id: &str) -> UserRegistryResult<User> {
        let not_found = || UserRegistryError::NotFound(id.trim().to_owned());
        let user_id: UserId = id.parse().map_err(|_| not_found())?;
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Returns every user in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistryError::Repository`] when lookup fails.
    pub async fn list_users(&self) -> UserRegistryResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    async fn announce(&self, event: NotificationEvent) {
        if let Err(err) = self.notifier.notify(&event).await {
            tracing::warn!(
                kind = %event.kind(),
                recipient = %event.recipient(),
                error = %err,
                "user notification not delivered"
            );
        }
    }
}
