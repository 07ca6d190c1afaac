//! Octocrab-based repository fetcher
//!
//! Implements the core's `RepositoryFetcher` contract against the GitHub
//! API: the authenticated user's repositories, emitted page by page. The
//! core decides how much of the stream to consume.

use std::sync::Arc;

use async_stream::stream;
use futures::stream::BoxStream;
use gh_clone_core::{RawAccount, RawRepository, RepositoryFetcher};
use log::debug;
use octocrab::Octocrab;

const PER_PAGE: u8 = 100;

/// Direct GitHub API fetcher using octocrab.
#[derive(Debug, Clone)]
pub struct OctocrabFetcher {
    octocrab: Arc<Octocrab>,
}

impl OctocrabFetcher {
    /// Create a new fetcher with the given octocrab instance.
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }
}

impl RepositoryFetcher for OctocrabFetcher {
    fn fetch_user_repositories(&self) -> BoxStream<'static, anyhow::Result<Vec<RawRepository>>> {
        let octocrab = Arc::clone(&self.octocrab);
        Box::pin(stream! {
            let mut page_num = 1u8;
            loop {
                debug!("Fetching repository page {}", page_num);
                let result = octocrab
                    .current()
                    .list_repos_for_authenticated_user()
                    .type_("owner")
                    .sort("updated")
                    .per_page(PER_PAGE)
                    .page(page_num)
                    .send()
                    .await;

                match result {
                    Ok(page) => {
                        if page.items.is_empty() {
                            break;
                        }
                        let repos: Vec<RawRepository> =
                            page.items.iter().map(convert_repository).collect();
                        yield Ok(repos);
                        page_num += 1;
                    }
                    Err(err) => {
                        yield Err(err.into());
                        break;
                    }
                }
            }
        })
    }
}

/// Convert an octocrab repository to the wire shape the core consumes.
fn convert_repository(repo: &octocrab::models::Repository) -> RawRepository {
    RawRepository {
        name: repo.name.clone(),
        clone_url: clone_url_or_empty(repo.clone_url.as_ref().map(|u| u.as_str())),
        owner: repo
            .owner
            .as_ref()
            .map(|owner| RawAccount {
                id: owner.id.0,
                login: owner.login.clone(),
                avatar_url: Some(owner.avatar_url.to_string()),
            })
            .unwrap_or_default(),
        updated_at: repo.updated_at,
    }
}

/// The API may omit the clone URL for some repository kinds; the core treats
/// the URL as opaque, so an empty string is passed through rather than
/// dropping the record.
fn clone_url_or_empty(url: Option<&str>) -> String {
    url.unwrap_or_default().to_string()
}
