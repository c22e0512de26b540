//! Asset catalog trait.

use async_trait::async_trait;
use levelup_core::ImageSource;
use levelup_error::LevelUpResult;

/// Read-only lookup of game-project assets.
///
/// The orchestrator only consults the catalog when the request names a
/// folder; callers substitute an empty list otherwise, so implementations
/// never see an absent folder reference.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Lists sprite file names available under the folder.
    ///
    /// A folder that does not exist or cannot be read yields an empty list
    /// rather than an error; the lookup is side-effect-free.
    async fn list_assets(&self, folder: &str) -> LevelUpResult<Vec<String>>;

    /// Suggests scene names fitting the folder and the uploaded image.
    ///
    /// Same contract as [`AssetCatalog::list_assets`], different semantic
    /// payload.
    async fn suggest_scenes(
        &self,
        folder: &str,
        image: &ImageSource,
    ) -> LevelUpResult<Vec<String>>;
}
