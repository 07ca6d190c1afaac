//! Repository clone coordinator
//!
//! Owns the source list, the filtered view, the observable property surface
//! and the clone command, and mediates between that surface and the
//! external fetch/clone collaborators.
//!
//! Concurrency model: one owning task reads and writes every property and
//! the view. Spawned work (the initial fetch, the debounce timer, a clone
//! body) never touches state directly; it sends a [`CoordinatorEvent`] over
//! the coordinator's channel, and the owner applies it through
//! [`RepositoryCloneCoordinator::apply_event`]. That channel is the only
//! cross-thread interaction point, so every observation of the view is a
//! consistent (source, filter) pair and per-property notification order
//! equals write order.

use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::command::AsyncCommand;
use crate::debounce::{FilterDebouncer, DEFAULT_QUIET_INTERVAL};
use crate::domain_models::{AccountSummary, CloneRequest, RepositoryRecord};
use crate::error::{CloneError, CommandRefused, FetchState};
use crate::filtered_view::FilteredRepositoryList;
use crate::observable::{derive, ObservableProperty, ReadOnlyProperty};
use crate::traits::{
    AvatarResolver, ClonePathResolver, RawRepository, RepositoryCloner, RepositoryFetcher,
};

/// Terminal outcome of one clone invocation: the request that was carried
/// out, or the typed failure.
pub type CloneOutcome = Result<CloneRequest, CloneError>;

/// Completions marshaled back onto the owning task.
#[derive(Debug)]
pub enum CoordinatorEvent {
    /// First fetched batch, flattened to individual records.
    RepositoriesFetched(Vec<RepositoryRecord>),
    /// The fetch collaborator failed or emitted nothing.
    FetchFailed(String),
    /// The filter text has been quiet for the configured interval.
    FilterSettled(String),
    /// A clone body finished, successfully or not.
    CloneFinished(CloneOutcome),
}

/// The external capabilities the coordinator composes.
pub struct Collaborators {
    pub fetcher: Arc<dyn RepositoryFetcher>,
    pub cloner: Arc<dyn RepositoryCloner>,
    pub path_resolver: Arc<dyn ClonePathResolver>,
    pub avatar_resolver: Arc<dyn AvatarResolver>,
}

pub struct RepositoryCloneCoordinator {
    list: FilteredRepositoryList,
    filter_text: ObservableProperty<Option<String>>,
    selected_repository: ObservableProperty<Option<RepositoryRecord>>,
    base_repository_path: ObservableProperty<Option<String>>,
    source_len: ObservableProperty<usize>,
    filter_enabled: ReadOnlyProperty<bool>,
    fetch_state: ObservableProperty<FetchState>,
    clone_command: AsyncCommand<CloneOutcome>,
    debouncer: FilterDebouncer,
    cloner: Arc<dyn RepositoryCloner>,
    events_tx: mpsc::UnboundedSender<CoordinatorEvent>,
    events_rx: mpsc::UnboundedReceiver<CoordinatorEvent>,
}

impl RepositoryCloneCoordinator {
    /// Build the coordinator and kick off exactly one fetch.
    ///
    /// Must be called within a tokio runtime: the fetch task and the
    /// debounce timer are spawned here. The default clone path is resolved
    /// once, before anything else runs.
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_quiet_interval(collaborators, DEFAULT_QUIET_INTERVAL)
    }

    pub fn with_quiet_interval(collaborators: Collaborators, quiet: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let default_path = collaborators.path_resolver.resolve_default_clone_path();
        log::debug!("default clone path resolved to {default_path:?}");

        let settle_tx = events_tx.clone();
        let (debouncer, _debounce_task) = FilterDebouncer::spawn(quiet, move |text| {
            let _ = settle_tx.send(CoordinatorEvent::FilterSettled(text));
        });

        let selected_repository = ObservableProperty::new(None::<RepositoryRecord>);
        let source_len = ObservableProperty::new(0usize);
        let filter_enabled = derive(&source_len, |len| *len > 0);
        let clone_command =
            AsyncCommand::new(derive(&selected_repository, |sel| sel.is_some()));

        spawn_fetch(
            Arc::clone(&collaborators.fetcher),
            Arc::clone(&collaborators.avatar_resolver),
            events_tx.clone(),
        );

        Self {
            list: FilteredRepositoryList::new(),
            filter_text: ObservableProperty::new(None),
            selected_repository,
            base_repository_path: ObservableProperty::new(default_path),
            source_len,
            filter_enabled,
            fetch_state: ObservableProperty::new(FetchState::Loading),
            clone_command,
            debouncer,
            cloner: collaborators.cloner,
            events_tx,
            events_rx,
        }
    }

    // --- mutable surface -------------------------------------------------

    /// Write the filter text. An effective change (equality-gated) feeds the
    /// debouncer; the view itself only recomputes when the text settles.
    pub fn set_filter_text(&self, text: Option<String>) {
        let settled_input = text.clone().unwrap_or_default();
        if self.filter_text.set(text) {
            self.debouncer.input(settled_input);
        }
    }

    pub fn set_selected_repository(&self, selection: Option<RepositoryRecord>) {
        self.selected_repository.set(selection);
    }

    pub fn set_base_repository_path(&self, path: Option<String>) {
        self.base_repository_path.set(path);
    }

    // --- observable surface ----------------------------------------------

    pub fn filter_text(&self) -> ReadOnlyProperty<Option<String>> {
        self.filter_text.read_only()
    }

    pub fn selected_repository(&self) -> ReadOnlyProperty<Option<RepositoryRecord>> {
        self.selected_repository.read_only()
    }

    pub fn base_repository_path(&self) -> ReadOnlyProperty<Option<String>> {
        self.base_repository_path.read_only()
    }

    /// False while the source list is empty; there is no point offering a
    /// filter box over nothing.
    pub fn filter_enabled(&self) -> ReadOnlyProperty<bool> {
        self.filter_enabled.clone()
    }

    pub fn fetch_state(&self) -> ReadOnlyProperty<FetchState> {
        self.fetch_state.read_only()
    }

    pub fn clone_command(&self) -> &AsyncCommand<CloneOutcome> {
        &self.clone_command
    }

    /// Snapshot of the records visible under the settled filter, in source
    /// order.
    pub fn visible_repositories(&self) -> Vec<RepositoryRecord> {
        self.list.visible().cloned().collect()
    }

    pub fn source_repositories(&self) -> &[RepositoryRecord] {
        self.list.source()
    }

    // --- clone command ---------------------------------------------------

    /// Invoke the clone command.
    ///
    /// Refused synchronously while disabled (no selection) or while a
    /// previous invocation is in flight. Otherwise the request is built from
    /// the current selection and base path and the body is spawned: create
    /// the destination root if missing, then delegate the clone. The
    /// terminal outcome arrives as [`CoordinatorEvent::CloneFinished`].
    pub fn invoke_clone(&self) -> Result<(), CommandRefused> {
        self.clone_command.try_begin()?;

        let request = self.selected_repository.get().map(|repository| {
            CloneRequest::for_repository(
                &repository,
                self.base_repository_path.get().unwrap_or_default(),
            )
        });

        let cloner = Arc::clone(&self.cloner);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = perform_clone(cloner, request).await;
            if events_tx
                .send(CoordinatorEvent::CloneFinished(outcome))
                .is_err()
            {
                log::error!("clone finished but the coordinator is gone");
            }
        });
        Ok(())
    }

    // --- event pump ------------------------------------------------------

    /// Wait for the next completion from spawned work. `None` only when the
    /// coordinator itself has been torn down.
    pub async fn next_event(&mut self) -> Option<CoordinatorEvent> {
        self.events_rx.recv().await
    }

    /// Apply one completion on the owning task. All list mutation and
    /// property writing funnels through here.
    pub fn apply_event(&mut self, event: CoordinatorEvent) {
        match event {
            CoordinatorEvent::RepositoriesFetched(records) => {
                log::info!("fetched {} repositories", records.len());
                for record in records {
                    self.list.append(record);
                    self.source_len.set(self.list.source_len());
                }
                self.fetch_state.set(FetchState::Loaded);
            }
            CoordinatorEvent::FetchFailed(reason) => {
                log::warn!("repository fetch failed: {reason}");
                self.fetch_state.set(FetchState::Failed(reason));
            }
            CoordinatorEvent::FilterSettled(text) => {
                log::debug!("filter settled to {text:?}");
                self.list.set_filter(&text);
            }
            CoordinatorEvent::CloneFinished(outcome) => {
                match &outcome {
                    Ok(request) => log::info!(
                        "cloned {} into {}",
                        request.name,
                        request.destination_root
                    ),
                    Err(err) => log::warn!("clone failed: {err}"),
                }
                self.clone_command.finish(outcome);
            }
        }
    }

    /// Apply everything already queued without waiting. Convenient for
    /// tick-driven hosts.
    pub fn drain_pending(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }
}

/// Kick off the one population fetch. Only the first emitted page is
/// consumed; dropping the stream afterwards stops listening to the rest.
fn spawn_fetch(
    fetcher: Arc<dyn RepositoryFetcher>,
    avatar_resolver: Arc<dyn AvatarResolver>,
    events_tx: mpsc::UnboundedSender<CoordinatorEvent>,
) {
    tokio::spawn(async move {
        let mut pages = fetcher.fetch_user_repositories();
        let event = match pages.next().await {
            Some(Ok(page)) => {
                let records = page
                    .iter()
                    .map(|raw| to_record(raw, avatar_resolver.as_ref()))
                    .collect();
                CoordinatorEvent::RepositoriesFetched(records)
            }
            Some(Err(err)) => CoordinatorEvent::FetchFailed(err.to_string()),
            None => CoordinatorEvent::FetchFailed("fetch emitted no repositories".to_string()),
        };
        let _ = events_tx.send(event);
    });
}

fn to_record(raw: &RawRepository, avatar_resolver: &dyn AvatarResolver) -> RepositoryRecord {
    RepositoryRecord::new(
        raw.name.clone(),
        raw.clone_url.clone(),
        AccountSummary::new(
            raw.owner.id,
            raw.owner.login.clone(),
            avatar_resolver.resolve_avatar(&raw.owner),
        ),
    )
}

async fn perform_clone(
    cloner: Arc<dyn RepositoryCloner>,
    request: Option<CloneRequest>,
) -> CloneOutcome {
    let Some(request) = request else {
        return Err(CloneError::NoSelection);
    };

    // Creating an already-existing destination root is not an error.
    if let Err(err) = tokio::fs::create_dir_all(&request.destination_root).await {
        return Err(CloneError::DirectoryCreation {
            path: request.destination_root.clone(),
            reason: err.to_string(),
        });
    }

    match cloner
        .clone_repository(
            &request.clone_url,
            &request.name,
            Path::new(&request.destination_root),
        )
        .await
    {
        Ok(()) => Ok(request),
        Err(err) => Err(CloneError::CloneFailed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::AvatarImage;
    use crate::traits::RawAccount;
    use async_trait::async_trait;
    use futures::stream::{self, BoxStream};
    use std::sync::Mutex;

    fn raw(name: &str, owner_id: u64) -> RawRepository {
        RawRepository {
            name: name.to_string(),
            clone_url: format!("https://example.com/{name}.git"),
            owner: RawAccount {
                id: owner_id,
                login: format!("user{owner_id}"),
                avatar_url: Some(format!("https://example.com/{owner_id}.png")),
            },
            updated_at: None,
        }
    }

    struct PagedFetcher {
        pages: Vec<Vec<RawRepository>>,
    }

    impl RepositoryFetcher for PagedFetcher {
        fn fetch_user_repositories(
            &self,
        ) -> BoxStream<'static, anyhow::Result<Vec<RawRepository>>> {
            let pages: Vec<anyhow::Result<Vec<RawRepository>>> =
                self.pages.clone().into_iter().map(Ok).collect();
            Box::pin(stream::iter(pages))
        }
    }

    struct FailingFetcher;

    impl RepositoryFetcher for FailingFetcher {
        fn fetch_user_repositories(
            &self,
        ) -> BoxStream<'static, anyhow::Result<Vec<RawRepository>>> {
            Box::pin(stream::iter(vec![Err(anyhow::anyhow!("transport down"))]))
        }
    }

    struct SilentFetcher;

    impl RepositoryFetcher for SilentFetcher {
        fn fetch_user_repositories(
            &self,
        ) -> BoxStream<'static, anyhow::Result<Vec<RawRepository>>> {
            Box::pin(stream::empty())
        }
    }

    #[derive(Default)]
    struct RecordingCloner {
        calls: Arc<Mutex<Vec<(String, String, String)>>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl RepositoryCloner for RecordingCloner {
        async fn clone_repository(
            &self,
            clone_url: &str,
            name: &str,
            destination_root: &Path,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push((
                clone_url.to_string(),
                name.to_string(),
                destination_root.display().to_string(),
            ));
            match &self.fail_with {
                Some(reason) => Err(anyhow::anyhow!("{reason}")),
                None => Ok(()),
            }
        }
    }

    struct FixedPath(Option<String>);

    impl ClonePathResolver for FixedPath {
        fn resolve_default_clone_path(&self) -> Option<String> {
            self.0.clone()
        }
    }

    struct PassthroughAvatars;

    impl AvatarResolver for PassthroughAvatars {
        fn resolve_avatar(&self, account: &RawAccount) -> AvatarImage {
            account
                .avatar_url
                .as_deref()
                .map(AvatarImage::new)
                .unwrap_or_default()
        }
    }

    fn collaborators(
        fetcher: Arc<dyn RepositoryFetcher>,
        cloner: Arc<RecordingCloner>,
        default_path: Option<String>,
    ) -> Collaborators {
        Collaborators {
            fetcher,
            cloner,
            path_resolver: Arc::new(FixedPath(default_path)),
            avatar_resolver: Arc::new(PassthroughAvatars),
        }
    }

    async fn populated(
        pages: Vec<Vec<RawRepository>>,
        cloner: Arc<RecordingCloner>,
        default_path: Option<String>,
    ) -> RepositoryCloneCoordinator {
        let mut coordinator = RepositoryCloneCoordinator::with_quiet_interval(
            collaborators(Arc::new(PagedFetcher { pages }), cloner, default_path),
            Duration::from_millis(100),
        );
        let event = coordinator.next_event().await.expect("fetch event");
        coordinator.apply_event(event);
        coordinator
    }

    #[tokio::test]
    async fn test_population_consumes_first_batch_only() {
        let coordinator = populated(
            vec![vec![raw("Foo", 1), raw("bar", 2)], vec![raw("later", 3)]],
            Arc::new(RecordingCloner::default()),
            None,
        )
        .await;

        let names: Vec<_> = coordinator
            .source_repositories()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["Foo", "bar"]);
        assert_eq!(coordinator.fetch_state().get(), FetchState::Loaded);
        assert!(coordinator.filter_enabled().get());
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_on_observable_channel() {
        let mut coordinator = RepositoryCloneCoordinator::with_quiet_interval(
            collaborators(
                Arc::new(FailingFetcher),
                Arc::new(RecordingCloner::default()),
                None,
            ),
            Duration::from_millis(100),
        );
        assert_eq!(coordinator.fetch_state().get(), FetchState::Loading);

        let event = coordinator.next_event().await.expect("fetch event");
        coordinator.apply_event(event);

        assert_eq!(
            coordinator.fetch_state().get(),
            FetchState::Failed("transport down".to_string())
        );
        assert!(coordinator.source_repositories().is_empty());
        assert!(!coordinator.filter_enabled().get());
    }

    #[tokio::test]
    async fn test_empty_emission_counts_as_fetch_failure() {
        let mut coordinator = RepositoryCloneCoordinator::with_quiet_interval(
            collaborators(
                Arc::new(SilentFetcher),
                Arc::new(RecordingCloner::default()),
                None,
            ),
            Duration::from_millis(100),
        );
        let event = coordinator.next_event().await.expect("fetch event");
        coordinator.apply_event(event);

        assert!(matches!(
            coordinator.fetch_state().get(),
            FetchState::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_filter_enabled_flips_once_per_transition() {
        let flips = Arc::new(Mutex::new(Vec::new()));
        let mut coordinator = RepositoryCloneCoordinator::with_quiet_interval(
            collaborators(
                Arc::new(PagedFetcher {
                    pages: vec![vec![raw("a", 1), raw("b", 2), raw("c", 3)]],
                }),
                Arc::new(RecordingCloner::default()),
                None,
            ),
            Duration::from_millis(100),
        );
        let sink = Arc::clone(&flips);
        coordinator.filter_enabled().subscribe(move |_, new| {
            sink.lock().unwrap().push(*new);
        });
        assert!(!coordinator.filter_enabled().get());

        let event = coordinator.next_event().await.expect("fetch event");
        coordinator.apply_event(event);

        // Three appends, one flip.
        assert_eq!(*flips.lock().unwrap(), vec![true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_filter_edits_recompute_once_with_final_text() {
        let mut coordinator = populated(
            vec![vec![raw("Foo", 1), raw("bar", 2)]],
            Arc::new(RecordingCloner::default()),
            None,
        )
        .await;

        coordinator.set_filter_text(Some("f".to_string()));
        coordinator.set_filter_text(Some("fo".to_string()));

        let event = coordinator.next_event().await.expect("settle event");
        assert!(matches!(&event, CoordinatorEvent::FilterSettled(t) if t == "fo"));
        coordinator.apply_event(event);

        let visible: Vec<_> = coordinator
            .visible_repositories()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(visible, vec!["Foo"]);

        // No further settles are pending.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(coordinator.events_rx.try_recv().is_err());
        assert_eq!(coordinator.list.filter(), "fo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_filter_restores_full_source() {
        let mut coordinator = populated(
            vec![vec![raw("Foo", 1), raw("bar", 2)]],
            Arc::new(RecordingCloner::default()),
            None,
        )
        .await;

        coordinator.set_filter_text(Some("fo".to_string()));
        let event = coordinator.next_event().await.expect("settle event");
        coordinator.apply_event(event);
        assert_eq!(coordinator.visible_repositories().len(), 1);

        coordinator.set_filter_text(Some(String::new()));
        tokio::time::sleep(Duration::from_millis(200)).await;
        coordinator.drain_pending();

        let visible: Vec<_> = coordinator
            .visible_repositories()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(visible, vec!["Foo", "bar"]);
    }

    #[tokio::test]
    async fn test_same_filter_text_twice_notifies_once() {
        let coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::new(RecordingCloner::default()),
            None,
        )
        .await;

        let notifications = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&notifications);
        coordinator.filter_text().subscribe(move |_, _| {
            *sink.lock().unwrap() += 1;
        });

        coordinator.set_filter_text(Some("abc".to_string()));
        coordinator.set_filter_text(Some("abc".to_string()));

        assert_eq!(*notifications.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clone_disabled_without_selection() {
        let coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::new(RecordingCloner::default()),
            Some("/tmp/unused".to_string()),
        )
        .await;

        assert!(!coordinator.clone_command().can_execute().get());
        assert_eq!(coordinator.invoke_clone(), Err(CommandRefused::Disabled));
    }

    #[tokio::test]
    async fn test_selection_enables_clone_command() {
        let coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::new(RecordingCloner::default()),
            None,
        )
        .await;

        let record = coordinator.source_repositories()[0].clone();
        coordinator.set_selected_repository(Some(record));
        assert!(coordinator.clone_command().can_execute().get());

        coordinator.set_selected_repository(None);
        assert!(!coordinator.clone_command().can_execute().get());
    }

    #[tokio::test]
    async fn test_clone_creates_missing_destination_and_delegates_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        let base = temp.path().join("repos");
        assert!(!base.exists());

        let cloner = Arc::new(RecordingCloner::default());
        let mut coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::clone(&cloner),
            Some(base.display().to_string()),
        )
        .await;

        let record = coordinator.source_repositories()[0].clone();
        let clone_url = record.clone_url.clone();
        coordinator.set_selected_repository(Some(record));

        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&outcomes);
        coordinator.clone_command().on_outcome(move |o: &CloneOutcome| {
            sink.lock().unwrap().push(o.clone());
        });

        coordinator.invoke_clone().expect("invocation accepted");
        assert!(coordinator.clone_command().is_executing().get());

        let event = coordinator.next_event().await.expect("clone event");
        coordinator.apply_event(event);

        assert!(base.is_dir());
        assert_eq!(
            *cloner.calls.lock().unwrap(),
            vec![(clone_url, "Foo".to_string(), base.display().to_string())]
        );
        assert!(!coordinator.clone_command().is_executing().get());
        assert!(matches!(outcomes.lock().unwrap().as_slice(), [Ok(_)]));
    }

    #[tokio::test]
    async fn test_delegate_failure_surfaces_verbatim() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cloner = Arc::new(RecordingCloner {
            fail_with: Some("network-error".to_string()),
            ..RecordingCloner::default()
        });
        let mut coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::clone(&cloner),
            Some(temp.path().display().to_string()),
        )
        .await;

        let record = coordinator.source_repositories()[0].clone();
        coordinator.set_selected_repository(Some(record));

        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&outcomes);
        coordinator.clone_command().on_outcome(move |o: &CloneOutcome| {
            sink.lock().unwrap().push(o.clone());
        });

        coordinator.invoke_clone().expect("invocation accepted");
        let event = coordinator.next_event().await.expect("clone event");
        coordinator.apply_event(event);

        assert_eq!(
            *outcomes.lock().unwrap(),
            vec![Err(CloneError::CloneFailed("network-error".to_string()))]
        );
        assert!(!coordinator.clone_command().is_executing().get());
    }

    #[tokio::test]
    async fn test_second_invocation_refused_while_first_outstanding() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cloner = Arc::new(RecordingCloner::default());
        let mut coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::clone(&cloner),
            Some(temp.path().display().to_string()),
        )
        .await;

        let record = coordinator.source_repositories()[0].clone();
        coordinator.set_selected_repository(Some(record));

        coordinator.invoke_clone().expect("first invocation accepted");
        assert_eq!(
            coordinator.invoke_clone(),
            Err(CommandRefused::AlreadyRunning)
        );

        let event = coordinator.next_event().await.expect("clone event");
        coordinator.apply_event(event);

        // Exactly one delegate call happened.
        assert_eq!(cloner.calls.lock().unwrap().len(), 1);
        assert!(!coordinator.clone_command().is_executing().get());
    }

    #[tokio::test]
    async fn test_body_without_selection_fails_before_any_io() {
        let cloner = Arc::new(RecordingCloner::default());
        let outcome = perform_clone(Arc::clone(&cloner) as Arc<dyn RepositoryCloner>, None).await;

        assert_eq!(outcome, Err(CloneError::NoSelection));
        assert!(cloner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_base_path_seeded_from_resolver_once() {
        let coordinator = populated(
            vec![vec![raw("Foo", 1)]],
            Arc::new(RecordingCloner::default()),
            Some("/home/user/github".to_string()),
        )
        .await;

        assert_eq!(
            coordinator.base_repository_path().get(),
            Some("/home/user/github".to_string())
        );

        coordinator.set_base_repository_path(Some("/elsewhere".to_string()));
        assert_eq!(
            coordinator.base_repository_path().get(),
            Some("/elsewhere".to_string())
        );
    }
}
