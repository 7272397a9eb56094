use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::*;
use crate::net::types::{Member, MemberQuery, NewMember, NewVisitRecord, Registration, VisitRecord};

// =========================================================================
// ScriptedApi
// =========================================================================

/// Backend double answering auth calls from per-endpoint queues.
/// An unscripted call fails as if the network were down.
#[derive(Default)]
struct ScriptedApi {
    login: RefCell<VecDeque<Result<(), ApiError>>>,
    logout: RefCell<VecDeque<Result<(), ApiError>>>,
    profile: RefCell<VecDeque<Result<User, ApiError>>>,
    profile_calls: Cell<usize>,
    logout_calls: Cell<usize>,
    /// Scheduler turns the next profile call waits before answering.
    profile_delay: Cell<usize>,
}

impl ScriptedApi {
    fn with_profile(self, result: Result<User, ApiError>) -> Self {
        self.profile.borrow_mut().push_back(result);
        self
    }

    fn with_login(self, result: Result<(), ApiError>) -> Self {
        self.login.borrow_mut().push_back(result);
        self
    }

    fn with_slow_profile(self, result: Result<User, ApiError>, turns: usize) -> Self {
        self.profile_delay.set(turns);
        self.with_profile(result)
    }

    fn with_logout(self, result: Result<(), ApiError>) -> Self {
        self.logout.borrow_mut().push_back(result);
        self
    }
}

fn unreachable_backend() -> ApiError {
    ApiError::Network("connection refused".to_owned())
}

#[async_trait::async_trait(?Send)]
impl SalonApi for ScriptedApi {
    async fn login(&self, _credentials: &Credentials) -> Result<(), ApiError> {
        self.login.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }

    async fn register(&self, _registration: &Registration) -> Result<(), ApiError> {
        Err(unreachable_backend())
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        let result = self.profile.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()));
        for _ in 0..self.profile_delay.replace(0) {
            tokio::task::yield_now().await;
        }
        result
    }

    async fn add_member(&self, _member: &NewMember) -> Result<(), ApiError> {
        Err(unreachable_backend())
    }

    async fn search_members(&self, _query: &MemberQuery) -> Result<Vec<Member>, ApiError> {
        Err(unreachable_backend())
    }

    async fn create_visit_record(&self, _record: &NewVisitRecord) -> Result<(), ApiError> {
        Err(unreachable_backend())
    }

    async fn visit_records_for_member(&self, _member_id: i64) -> Result<Vec<VisitRecord>, ApiError> {
        Err(unreachable_backend())
    }

    async fn visit_records_on(&self, _date: &str) -> Result<Vec<VisitRecord>, ApiError> {
        Err(unreachable_backend())
    }
}

// =========================================================================
// RecordingStore
// =========================================================================

/// Store that keeps every published state, in order.
#[derive(Clone, Default)]
struct RecordingStore {
    history: Rc<RefCell<Vec<AuthState>>>,
}

impl RecordingStore {
    fn history(&self) -> Vec<AuthState> {
        self.history.borrow().clone()
    }
}

impl SessionStore for RecordingStore {
    fn snapshot(&self) -> AuthState {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn publish(&self, state: AuthState) {
        self.history.borrow_mut().push(state);
    }
}

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), display_name: "Alice".to_owned() }
}

fn unauthorized(message: &str) -> ApiError {
    ApiError::Unauthorized { message: Some(message.to_owned()) }
}

fn guard(api: ScriptedApi) -> (SessionGuard<ScriptedApi, RecordingStore>, RecordingStore) {
    let store = RecordingStore::default();
    (SessionGuard::new(api, store.clone()), store)
}

/// A guard that has already settled into `Authenticated(alice)`.
async fn signed_in_guard(api: ScriptedApi) -> (SessionGuard<ScriptedApi, RecordingStore>, RecordingStore) {
    api.profile.borrow_mut().push_front(Ok(alice()));
    let (guard, store) = guard(api);
    guard.initialize().await;
    assert!(guard.is_authenticated());
    (guard, store)
}

// =========================================================================
// initialize
// =========================================================================

#[tokio::test]
async fn initialize_without_session_settles_unauthenticated() {
    let (guard, store) = guard(ScriptedApi::default().with_profile(Err(unauthorized("Unauthorized"))));
    assert!(!guard.is_ready());

    guard.initialize().await;

    assert!(guard.is_ready());
    assert!(!guard.is_authenticated());
    assert_eq!(store.history(), vec![AuthState::Checking, AuthState::Unauthenticated]);
}

#[tokio::test]
async fn initialize_with_session_settles_authenticated() {
    let (guard, store) = guard(ScriptedApi::default().with_profile(Ok(alice())));

    guard.initialize().await;

    assert_eq!(guard.user(), Some(alice()));
    assert_eq!(store.history(), vec![AuthState::Checking, AuthState::Authenticated(alice())]);
}

#[tokio::test]
async fn initialize_absorbs_network_and_body_errors() {
    for err in [unreachable_backend(), ApiError::Body("expected value".to_owned())] {
        let (guard, _) = guard(ScriptedApi::default().with_profile(Err(err)));
        guard.initialize().await;
        assert_eq!(guard.state(), AuthState::Unauthenticated);
    }
}

#[tokio::test]
async fn initialize_runs_the_check_only_once() {
    let (guard, store) = guard(ScriptedApi::default().with_profile(Ok(alice())));

    guard.initialize().await;
    guard.initialize().await;

    assert_eq!(guard.api().profile_calls.get(), 1);
    assert_eq!(store.history().len(), 2);
    assert!(guard.is_authenticated());
}

#[tokio::test]
async fn initialize_after_logout_does_not_recheck() {
    let (guard, store) = guard(ScriptedApi::default().with_logout(Ok(())));
    guard.logout().await;

    guard.initialize().await;

    assert_eq!(guard.api().profile_calls.get(), 0);
    assert_eq!(store.history(), vec![AuthState::Unauthenticated]);
}

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn login_with_valid_credentials_authenticates() {
    let (guard, _) = guard(ScriptedApi::default().with_profile(Err(unauthorized("Unauthorized"))));
    guard.initialize().await;
    guard.api().login.borrow_mut().push_back(Ok(()));
    guard.api().profile.borrow_mut().push_back(Ok(alice()));

    let outcome = guard.login(&Credentials::new("alice", "secret")).await;

    assert_eq!(outcome, Ok(alice()));
    assert!(guard.is_authenticated());
    assert_eq!(guard.user(), Some(alice()));
}

#[tokio::test]
async fn login_with_wrong_password_surfaces_backend_message() {
    let (guard, store) = guard(ScriptedApi::default().with_profile(Err(unauthorized("Unauthorized"))));
    guard.initialize().await;
    guard.api().login.borrow_mut().push_back(Err(unauthorized("비밀번호가 틀렸습니다")));
    let before = store.history();

    let err = guard
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message("로그인에 실패했습니다."), "비밀번호가 틀렸습니다");
    assert!(!guard.is_authenticated());
    assert_eq!(store.history(), before);
    assert_eq!(guard.api().profile_calls.get(), 1);
}

#[tokio::test]
async fn login_error_without_message_uses_caller_default() {
    let (guard, _) = guard(ScriptedApi::default().with_login(Err(unreachable_backend())));

    let err = guard
        .login(&Credentials::new("alice", "secret"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message("로그인에 실패했습니다."), "로그인에 실패했습니다.");
}

#[tokio::test]
async fn login_fails_when_profile_cannot_be_verified() {
    let api = ScriptedApi::default()
        .with_profile(Err(unauthorized("Unauthorized")))
        .with_login(Ok(()))
        .with_profile(Err(unauthorized("Unauthorized")));
    let (guard, _) = guard(api);
    guard.initialize().await;

    let outcome = guard.login(&Credentials::new("alice", "secret")).await;

    assert!(outcome.is_err());
    assert!(!guard.is_authenticated());
    assert!(guard.is_ready());
}

#[tokio::test]
async fn failed_verification_clears_a_previous_session() {
    let api = ScriptedApi::default()
        .with_login(Ok(()))
        .with_profile(Err(unreachable_backend()));
    let (guard, store) = signed_in_guard(api).await;

    let outcome = guard.login(&Credentials::new("bob", "secret")).await;

    assert_eq!(outcome, Err(unreachable_backend()));
    assert_eq!(store.snapshot(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn login_before_initialize_leaves_guard_uninitialized_on_failure() {
    let (guard, store) = guard(ScriptedApi::default().with_login(Err(unauthorized("비밀번호가 틀렸습니다"))));

    let _ = guard.login(&Credentials::new("alice", "wrong")).await;

    assert!(store.history().is_empty());
    assert_eq!(guard.state(), AuthState::Uninitialized);
}

#[tokio::test]
async fn login_during_startup_check_survives_late_check_failure() {
    let api = ScriptedApi::default()
        .with_slow_profile(Err(unauthorized("Unauthorized")), 20)
        .with_login(Ok(()))
        .with_profile(Ok(alice()));
    let (guard, store) = guard(api);

    let ((), outcome) = tokio::join!(guard.initialize(), async {
        tokio::task::yield_now().await;
        guard.login(&Credentials::new("alice", "secret")).await
    });

    assert_eq!(outcome, Ok(alice()));
    assert!(guard.is_authenticated());
    assert_eq!(store.history(), vec![AuthState::Checking, AuthState::Authenticated(alice())]);
}

#[tokio::test]
async fn logout_during_startup_check_survives_late_check_success() {
    let api = ScriptedApi::default().with_slow_profile(Ok(alice()), 20).with_logout(Ok(()));
    let (guard, store) = guard(api);

    tokio::join!(guard.initialize(), async {
        tokio::task::yield_now().await;
        guard.logout().await;
    });

    assert!(!guard.is_authenticated());
    assert_eq!(store.history(), vec![AuthState::Checking, AuthState::Unauthenticated]);
}

// =========================================================================
// logout
// =========================================================================

#[tokio::test]
async fn logout_clears_session() {
    let (guard, _) = signed_in_guard(ScriptedApi::default().with_logout(Ok(()))).await;

    guard.logout().await;

    assert!(!guard.is_authenticated());
    assert_eq!(guard.api().logout_calls.get(), 1);
}

#[tokio::test]
async fn logout_clears_session_when_backend_is_unreachable() {
    let (guard, _) = signed_in_guard(ScriptedApi::default().with_logout(Err(unreachable_backend()))).await;

    guard.logout().await;

    assert!(!guard.is_authenticated());
    assert!(guard.is_ready());
}

#[tokio::test]
async fn logout_clears_session_on_server_error() {
    let api = ScriptedApi::default().with_logout(Err(ApiError::Status { status: 500, message: None }));
    let (guard, _) = signed_in_guard(api).await;

    guard.logout().await;

    assert_eq!(guard.state(), AuthState::Unauthenticated);
}

// =========================================================================
// expire / authorized
// =========================================================================

#[tokio::test]
async fn expire_signs_out_locally_and_stays_ready() {
    let (guard, _) = signed_in_guard(ScriptedApi::default()).await;

    guard.expire();

    assert!(!guard.is_authenticated());
    assert!(guard.is_ready());
}

#[tokio::test]
async fn expire_is_a_no_op_without_session() {
    let (guard, store) = guard(ScriptedApi::default());
    guard.initialize().await;
    let before = store.history();

    guard.expire();

    assert_eq!(store.history(), before);
}

#[tokio::test]
async fn authorized_call_returning_401_expires_session() {
    let (guard, _) = signed_in_guard(ScriptedApi::default()).await;

    let result: Result<Vec<Member>, ApiError> = guard
        .authorized(async { Err(unauthorized("세션이 만료되었습니다")) })
        .await;

    assert!(result.unwrap_err().is_unauthorized());
    assert!(!guard.is_authenticated());
}

#[tokio::test]
async fn authorized_call_with_other_error_keeps_session() {
    let (guard, _) = signed_in_guard(ScriptedApi::default()).await;

    let result: Result<(), ApiError> = guard
        .authorized(async { Err(ApiError::Status { status: 400, message: None }) })
        .await;

    assert!(result.is_err());
    assert!(guard.is_authenticated());
}

#[tokio::test]
async fn authorized_call_passes_success_through() {
    let (guard, _) = signed_in_guard(ScriptedApi::default()).await;

    let result = guard.authorized(async { Ok::<_, ApiError>(3) }).await;

    assert_eq!(result, Ok(3));
    assert!(guard.is_authenticated());
}

#[tokio::test]
async fn authorized_wraps_calls_through_the_guard_api() {
    let (guard, _) = signed_in_guard(ScriptedApi::default()).await;

    let result = guard
        .authorized(guard.api().visit_records_on("2024-05-01"))
        .await;

    assert_eq!(result, Err(unreachable_backend()));
    assert!(guard.is_authenticated());
}

// =========================================================================
// Whole-lifecycle properties
// =========================================================================

#[tokio::test]
async fn observers_see_checking_before_exactly_one_settled_state() {
    let (guard, store) = guard(ScriptedApi::default().with_profile(Ok(alice())));

    guard.initialize().await;

    let history = store.history();
    assert_eq!(history.first(), Some(&AuthState::Checking));
    assert_eq!(history.iter().filter(|s| s.is_ready()).count(), 1);
}

#[tokio::test]
async fn ready_never_regresses_and_auth_tracks_user() {
    let api = ScriptedApi::default()
        .with_profile(Err(unauthorized("Unauthorized")))
        .with_login(Err(unauthorized("비밀번호가 틀렸습니다")))
        .with_login(Ok(()))
        .with_profile(Ok(alice()))
        .with_logout(Err(unreachable_backend()))
        .with_login(Ok(()))
        .with_profile(Ok(alice()));
    let (guard, store) = guard(api);

    guard.initialize().await;
    let _ = guard.login(&Credentials::new("alice", "wrong")).await;
    let _ = guard.login(&Credentials::new("alice", "secret")).await;
    guard.logout().await;
    let _ = guard.login(&Credentials::new("alice", "secret")).await;
    guard.expire();
    guard.initialize().await;

    let history = store.history();
    let first_ready = history.iter().position(AuthState::is_ready).unwrap();
    assert!(history[first_ready..].iter().all(AuthState::is_ready));
    for state in &history {
        assert_eq!(state.is_authenticated(), state.user().is_some());
    }
    assert_eq!(guard.state(), AuthState::Unauthenticated);
}
