//! Avatar resolution
//!
//! The GitHub API already advertises an avatar URL on every account, so
//! resolution is a pass-through. An account without one gets the empty
//! reference; list population never fails over a missing picture.

use gh_clone_core::{AvatarImage, AvatarResolver, RawAccount};

pub struct AvatarUrlResolver;

impl AvatarResolver for AvatarUrlResolver {
    fn resolve_avatar(&self, account: &RawAccount) -> AvatarImage {
        match account.avatar_url.as_deref() {
            Some(url) if !url.is_empty() => AvatarImage::new(url),
            _ => AvatarImage::default(),
        }
    }
}
