//! Account Workflow - login, registration, logout and the account screen.

use std::sync::Arc;

use tracing::{info, warn};

use super::access::{require_login, AccessDecision, FlowOutcome};
use super::errors::WorkflowError;
use super::identity_store::IdentityStore;
use crate::domain::foundation::{AuthError, Credentials, RegisterRequest, SignedIn};
use crate::domain::user::User;
use crate::ports::{AuthProvider, Navigator, Notifier, Route, UserDirectory};

pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";

pub struct AccountWorkflow {
    identity: IdentityStore,
    auth: Arc<dyn AuthProvider>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl AccountWorkflow {
    pub fn new(
        identity: IdentityStore,
        auth: Arc<dyn AuthProvider>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            auth,
            users,
            notifier,
            navigator,
        }
    }

    /// Signs in, stores the identity and goes to the sessions list.
    ///
    /// On failure the identity is left untouched and the view stays.
    pub async fn login(&self, credentials: &Credentials) -> Result<SignedIn, WorkflowError> {
        credentials.validate().map_err(AuthError::from)?;

        let signed_in = self.auth.login(credentials).await.map_err(|err| {
            warn!(error = %err, "Login failed");
            err
        })?;

        info!(user_id = %signed_in.id, admin = signed_in.admin, "User signed in");
        self.identity.set_identity(signed_in.identity());
        self.navigator.navigate(Route::Sessions);
        Ok(signed_in)
    }

    /// Creates an account and goes to the login view.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), WorkflowError> {
        request.validate().map_err(AuthError::from)?;

        self.auth.register(request).await.map_err(|err| {
            warn!(error = %err, "Registration failed");
            err
        })?;

        info!("Account registered");
        self.navigator.navigate(Route::Login);
        Ok(())
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.identity.clear_identity();
        self.navigator.navigate(Route::Home);
    }

    /// The signed-in user's own profile.
    pub async fn account(&self) -> Result<FlowOutcome<User>, WorkflowError> {
        let identity = match require_login(self.identity.get_identity()) {
            AccessDecision::Allowed(identity) => identity,
            AccessDecision::Redirect(route) => {
                self.navigator.navigate(route);
                return Ok(FlowOutcome::Redirected(route));
            }
        };

        let user = self.users.get(identity.id).await?;
        Ok(FlowOutcome::Completed(user))
    }

    /// Deletes the signed-in user's own account, then signs out.
    pub async fn delete_account(&self) -> Result<FlowOutcome<()>, WorkflowError> {
        let identity = match require_login(self.identity.get_identity()) {
            AccessDecision::Allowed(identity) => identity,
            AccessDecision::Redirect(route) => {
                self.navigator.navigate(route);
                return Ok(FlowOutcome::Redirected(route));
            }
        };

        self.users.delete(identity.id).await.map_err(|err| {
            warn!(user_id = %identity.id, error = %err, "Account deletion failed");
            err
        })?;

        info!(user_id = %identity.id, "Account deleted");
        self.notifier.notify(ACCOUNT_DELETED);
        self.auth.logout();
        self.identity.clear_identity();
        self.navigator.navigate(Route::Home);
        Ok(FlowOutcome::Completed(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::booking::test_support::{RecordingNavigator, RecordingNotifier};
    use crate::domain::foundation::{DomainError, ErrorCode, Identity, UserId};
    use async_trait::async_trait;
    use secrecy::ExposeSecret;
    use std::sync::Mutex;

    struct MockAuth {
        registered: Mutex<Vec<String>>,
        logouts: Mutex<u32>,
    }

    impl MockAuth {
        fn new() -> Self {
            Self {
                registered: Mutex::new(Vec::new()),
                logouts: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthProvider for MockAuth {
        async fn login(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
            if credentials.password.expose_secret() != "test!1234" {
                return Err(AuthError::InvalidCredentials);
            }
            Ok(SignedIn {
                token: "token".to_string(),
                token_type: "Bearer".to_string(),
                id: UserId::new(1),
                username: credentials.email.clone(),
                first_name: "Admin".to_string(),
                last_name: "Admin".to_string(),
                admin: true,
            })
        }

        async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
            let mut registered = self.registered.lock().unwrap();
            if registered.contains(&request.email) {
                return Err(AuthError::EmailTaken);
            }
            registered.push(request.email.clone());
            Ok(())
        }

        fn logout(&self) {
            *self.logouts.lock().unwrap() += 1;
        }
    }

    struct MockUsers {
        deleted: Mutex<Vec<UserId>>,
    }

    #[async_trait]
    impl UserDirectory for MockUsers {
        async fn get(&self, id: UserId) -> Result<User, DomainError> {
            if id == UserId::new(1) {
                Ok(User::new(id, "yoga@studio.com", "Admin", "Admin", true))
            } else {
                Err(DomainError::new(ErrorCode::UserNotFound, "User not found"))
            }
        }

        async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
            Ok(id == UserId::new(1))
        }

        async fn delete(&self, id: UserId) -> Result<(), DomainError> {
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    struct Setup {
        store: IdentityStore,
        auth: Arc<MockAuth>,
        users: Arc<MockUsers>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
        workflow: AccountWorkflow,
    }

    fn setup() -> Setup {
        let store = IdentityStore::new();
        let auth = Arc::new(MockAuth::new());
        let users = Arc::new(MockUsers {
            deleted: Mutex::new(Vec::new()),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let workflow = AccountWorkflow::new(
            store.clone(),
            auth.clone(),
            users.clone(),
            notifier.clone(),
            navigator.clone(),
        );
        Setup {
            store,
            auth,
            users,
            notifier,
            navigator,
            workflow,
        }
    }

    #[tokio::test]
    async fn login_stores_identity_and_goes_to_sessions() {
        let s = setup();

        let signed_in = s
            .workflow
            .login(&Credentials::new("yoga@studio.com", "test!1234"))
            .await
            .unwrap();

        assert_eq!(signed_in.username, "yoga@studio.com");
        assert_eq!(s.store.get_identity(), Some(Identity::admin(UserId::new(1))));
        assert_eq!(s.navigator.routes(), vec![Route::Sessions]);
    }

    #[tokio::test]
    async fn failed_login_keeps_user_signed_out() {
        let s = setup();

        let err = s
            .workflow
            .login(&Credentials::new("yoga@studio.com", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(s.store.get_identity(), None);
        assert!(s.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn incomplete_credentials_are_rejected_locally() {
        let s = setup();
        let err = s
            .workflow
            .login(&Credentials::new("", "test!1234"))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Auth(AuthError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn register_goes_to_login() {
        let s = setup();
        let request = RegisterRequest::new("toto@toto.com", "toto", "toto", "test!1234");

        s.workflow.register(&request).await.unwrap();
        assert_eq!(s.navigator.routes(), vec![Route::Login]);

        let again = s.workflow.register(&request).await.unwrap_err();
        assert!(matches!(again, WorkflowError::Auth(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn logout_clears_identity() {
        let s = setup();
        s.store.set_identity(Identity::user(UserId::new(1)));

        s.workflow.logout();

        assert_eq!(s.store.get_identity(), None);
        assert_eq!(*s.auth.logouts.lock().unwrap(), 1);
        assert_eq!(s.navigator.routes(), vec![Route::Home]);
    }

    #[tokio::test]
    async fn account_requires_login() {
        let s = setup();
        let outcome = s.workflow.account().await.unwrap();
        assert_eq!(outcome, FlowOutcome::Redirected(Route::Login));
    }

    #[tokio::test]
    async fn account_returns_own_profile() {
        let s = setup();
        s.store.set_identity(Identity::admin(UserId::new(1)));

        let user = s.workflow.account().await.unwrap().completed().unwrap();
        assert_eq!(user.email, "yoga@studio.com");
    }

    #[tokio::test]
    async fn delete_account_signs_out() {
        let s = setup();
        s.store.set_identity(Identity::user(UserId::new(1)));

        let outcome = s.workflow.delete_account().await.unwrap();

        assert_eq!(outcome, FlowOutcome::Completed(()));
        assert_eq!(*s.users.deleted.lock().unwrap(), vec![UserId::new(1)]);
        assert_eq!(
            s.notifier.messages(),
            vec!["Your account has been deleted !"]
        );
        assert_eq!(s.store.get_identity(), None);
        assert_eq!(s.navigator.routes(), vec![Route::Home]);
    }
}
