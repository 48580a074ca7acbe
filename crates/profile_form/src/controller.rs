//! Orchestration between form state and the collaborators.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use async_trait::async_trait;
use auth::AuthProvider;
use chrono::NaiveTime;
use entities::{ProfileRecord, Weekday};
use profile_store::ProfileStore;

use crate::{DraftField, FormError, FormMode, FormResult, ProfileDraft, ProfileState, TimeBound};

/// A host-supplied save hook, invoked with the draft instead of the default
/// update path. The signup flow is the canonical implementation.
#[async_trait]
pub trait SaveHandler: Send + Sync {
    /// Persists the draft, or fails with the error to show the user.
    async fn save(&self, draft: &ProfileDraft) -> FormResult<()>;
}

/// Host callback invoked when the user cancels out of the form.
pub type CancelHook = Box<dyn Fn() + Send + Sync>;

/// Configuration the host hands to a [`ProfileController`].
pub struct FormOptions {
    /// Operating mode.
    pub mode: FormMode,
    /// Record to seed the draft from, if the host already has one.
    pub seed: Option<ProfileRecord>,
    /// Save hook overriding the default update path.
    pub on_save: Option<Arc<dyn SaveHandler>>,
    /// Cancel callback.
    pub on_cancel: Option<CancelHook>,
    /// Forces all fields non-editable regardless of editing state.
    pub read_only: bool,
}

impl FormOptions {
    /// Creates options for a mode with no seed, hooks, or read-only lock.
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            seed: None,
            on_save: None,
            on_cancel: None,
            read_only: false,
        }
    }

    /// Seeds the draft from a record the host already holds.
    pub fn with_seed(mut self, record: ProfileRecord) -> Self {
        self.seed = Some(record);
        self
    }

    /// Installs a save handler.
    pub fn with_save_handler(mut self, handler: Arc<dyn SaveHandler>) -> Self {
        self.on_save = Some(handler);
        self
    }

    /// Installs a cancel callback.
    pub fn with_cancel(mut self, on_cancel: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Box::new(on_cancel));
        self
    }

    /// Forces all fields non-editable.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Clears the loading flag on every exit path.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Bridges [`ProfileState`] to the persistence and authentication
/// collaborators.
///
/// One controller per editing session; dropping it abandons any in-flight
/// operation. Methods take `&self` so a host can share the controller, but
/// the loading gate ensures at most one load or submit is in flight.
/// Internal locks are never held across an await.
pub struct ProfileController {
    mode: FormMode,
    seeded: bool,
    read_only: bool,
    store: Arc<dyn ProfileStore>,
    auth: Arc<dyn AuthProvider>,
    on_save: Option<Arc<dyn SaveHandler>>,
    on_cancel: Option<CancelHook>,
    state: Mutex<ProfileState>,
    loading: AtomicBool,
    error: Mutex<Option<String>>,
    success: Mutex<Option<String>>,
}

impl ProfileController {
    /// Creates a controller and initializes form state per the options.
    pub fn new(
        store: Arc<dyn ProfileStore>,
        auth: Arc<dyn AuthProvider>,
        options: FormOptions,
    ) -> Self {
        let state = ProfileState::initialize(options.mode, options.seed.as_ref());
        Self {
            mode: options.mode,
            seeded: options.seed.is_some(),
            read_only: options.read_only,
            store,
            auth,
            on_save: options.on_save,
            on_cancel: options.on_cancel,
            state: Mutex::new(state),
            loading: AtomicBool::new(false),
            error: Mutex::new(None),
            success: Mutex::new(None),
        }
    }

    fn try_begin(&self) -> FormResult<LoadingGuard<'_>> {
        self.loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| LoadingGuard(&self.loading))
            .map_err(|_| FormError::Busy)
    }

    fn clear_messages(&self) {
        *lock(&self.error) = None;
        *lock(&self.success) = None;
    }

    fn record_failure(&self, error: &FormError) {
        tracing::warn!(%error, "profile form operation failed");
        *lock(&self.error) = Some(error.user_message());
    }

    /// Fetches the current user's profile and seeds the draft from it.
    ///
    /// Only meaningful in view mode without a seed; a no-op otherwise. When
    /// no record matches, the draft stays unset and the not-found message is
    /// surfaced. When more than one record matches, the first by index order
    /// is used, a documented limitation of the store's data rather than a
    /// consistency guarantee.
    pub async fn load(&self) -> FormResult<()> {
        if self.mode != FormMode::View || self.seeded {
            return Ok(());
        }
        let _guard = self.try_begin()?;
        self.clear_messages();

        let result = self.load_inner().await;
        if let Err(error) = &result {
            self.record_failure(error);
        }
        result
    }

    async fn load_inner(&self) -> FormResult<()> {
        let user = self
            .auth
            .current_user()
            .await?
            .ok_or(FormError::NotAuthenticated)?;
        tracing::debug!(user_id = %user.id, "loading handyman profile");

        let matches = self.store.find_by_user_id(&user.id).await?;
        let Some(record) = matches.into_iter().next() else {
            return Err(FormError::NotFound);
        };
        lock(&self.state).seed_from_record(&record);
        Ok(())
    }

    /// Validates the draft and persists it.
    ///
    /// With a save handler configured, the handler receives the draft and
    /// its error is recorded and returned. Otherwise the draft is shaped
    /// into the six-field partial update and applied to the record it was
    /// loaded from. On success the success message is set and a view-mode
    /// form leaves editing. Failures leave the draft intact; a submit while
    /// another is in flight is rejected without touching the store.
    pub async fn submit(&self) -> FormResult<()> {
        let _guard = self.try_begin()?;
        self.clear_messages();

        let result = self.submit_inner().await;
        match &result {
            Ok(()) => {
                *lock(&self.success) = Some("Profile updated successfully!".to_string());
                if self.mode == FormMode::View {
                    lock(&self.state).end_editing();
                }
            }
            Err(error) => self.record_failure(error),
        }
        result
    }

    async fn submit_inner(&self) -> FormResult<()> {
        let draft = lock(&self.state)
            .draft()
            .cloned()
            .ok_or(FormError::NotFound)?;
        draft.require_complete()?;

        if let Some(handler) = &self.on_save {
            handler.save(&draft).await
        } else {
            let user = self
                .auth
                .current_user()
                .await?
                .ok_or(FormError::NotAuthenticated)?;
            let record_id = lock(&self.state)
                .record_id()
                .ok_or(FormError::NotPersisted)?;
            let update = draft.to_update()?;
            tracing::debug!(user_id = %user.id, %record_id, "updating handyman profile");
            self.store.update(record_id, &update).await?;
            Ok(())
        }
    }

    /// Transitions a view-mode form into editing. Ignored in other modes
    /// and on read-only forms.
    pub fn begin_editing(&self) {
        if self.mode == FormMode::View && !self.read_only {
            lock(&self.state).begin_editing();
        }
    }

    /// Invokes the host's cancel callback, if configured.
    pub fn cancel(&self) {
        if let Some(on_cancel) = &self.on_cancel {
            on_cancel();
        }
    }

    /// Whether field mutations are currently accepted.
    pub fn fields_editable(&self) -> bool {
        !self.read_only && lock(&self.state).is_editing()
    }

    /// Replaces one scalar field. Ignored while fields are not editable.
    pub fn set_field(&self, field: DraftField) {
        if self.fields_editable() {
            lock(&self.state).set_field(field);
        }
    }

    /// Toggles an availability day. Ignored while fields are not editable.
    pub fn toggle_day(&self, day: Weekday) {
        if self.fields_editable() {
            lock(&self.state).toggle_day(day);
        }
    }

    /// Sets one end of the availability window. Ignored while fields are
    /// not editable.
    pub fn set_time(&self, bound: TimeBound, value: Option<NaiveTime>) {
        if self.fields_editable() {
            lock(&self.state).set_time(bound, value);
        }
    }

    /// A snapshot of the current draft, if one is open.
    pub fn draft(&self) -> Option<ProfileDraft> {
        lock(&self.state).draft().cloned()
    }

    /// Whether the form is in the editing state.
    pub fn is_editing(&self) -> bool {
        lock(&self.state).is_editing()
    }

    /// Whether an async operation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The transient error message, if any.
    pub fn error_message(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    /// The transient success message, if any.
    pub fn success_message(&self) -> Option<String> {
        lock(&self.success).clone()
    }
}
