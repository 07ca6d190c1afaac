//! Reactive state core for the gh-clone repository picker
//!
//! This crate keeps a UI-observable surface consistent with a live list of
//! remote repositories: an append-only source list populated by one fetch,
//! a filtered view maintained under a debounced case-insensitive predicate,
//! a single-flight clone command, and equality-gated observable properties
//! tying it together.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              RepositoryCloneCoordinator              │
//! │  filter_text / selected_repository / base_path ...   │
//! │        │                │                 │          │
//! │        ▼                ▼                 ▼          │
//! │  FilterDebouncer  FilteredRepositoryList  AsyncCommand│
//! └──────────────────────────────────────────────────────┘
//!          ▲ CoordinatorEvent channel (only cross-task path)
//!          │
//!   spawned fetch / clone bodies  ──►  collaborator traits
//!   (implemented by gh-clone-client or by test doubles)
//! ```
//!
//! The network fetch, the actual `git clone`, default-path resolution and
//! avatar lookup are consumed through the traits in [`traits`]; this crate
//! performs no I/O of its own beyond creating the clone destination
//! directory.

pub mod command;
pub mod coordinator;
pub mod debounce;
pub mod domain_models;
pub mod error;
pub mod filtered_view;
pub mod observable;
pub mod traits;

pub use command::AsyncCommand;
pub use coordinator::{
    Collaborators, CloneOutcome, CoordinatorEvent, RepositoryCloneCoordinator,
};
pub use debounce::{FilterDebouncer, DEFAULT_QUIET_INTERVAL};
pub use domain_models::{AccountSummary, AvatarImage, CloneRequest, RepositoryRecord};
pub use error::{CloneError, CommandRefused, FetchState};
pub use filtered_view::FilteredRepositoryList;
pub use observable::{derive, derive2, ObservableProperty, ReadOnlyProperty, SubscriptionId};
pub use traits::{
    AvatarResolver, ClonePathResolver, RawAccount, RawRepository, RepositoryCloner,
    RepositoryFetcher,
};
