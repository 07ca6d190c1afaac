//! Avatar resolution contract

use crate::domain_models::AvatarImage;
use crate::traits::fetcher::RawAccount;

/// Resolves an account to an avatar image reference.
///
/// Used only while constructing repository records during population; the
/// core never caches the result. Infallible by contract: implementations
/// degrade to [`AvatarImage::default`] instead of failing, so a missing
/// avatar can never fail list population.
pub trait AvatarResolver: Send + Sync {
    fn resolve_avatar(&self, account: &RawAccount) -> AvatarImage;
}
