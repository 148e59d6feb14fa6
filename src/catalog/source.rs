//! Where catalogs come from.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::Result;

/// Produces the catalog for one browse target.
///
/// Failures are reported before any selection tree exists; callers do not retry.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;
}
