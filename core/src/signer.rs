use crate::time::{now, DateTime};
use crate::{Context, Error, PresignUrl, ProvideCredential, Result, SigningCredential};
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to presign urls.
///
/// Every call resolves the credential again through the configured
/// provider; nothing is cached between calls, so a signer can be shared
/// freely across tasks.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn PresignUrl<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl PresignUrl<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder: Arc::new(builder),
        }
    }

    /// Replace the context.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Presign a url valid from now on.
    pub async fn presign(&self) -> Result<String> {
        self.presign_at(now()).await
    }

    /// Presign a url as if signed at `time`.
    ///
    /// # Note
    ///
    /// We should always take current time to presign urls.
    /// Only use this function for testing.
    pub async fn presign_at(&self, time: DateTime) -> Result<String> {
        let Some(cred) = self.provider.provide_credential(&self.ctx).await? else {
            return Err(Error::credential_missing(
                "no credential found from the configured provider",
            ));
        };
        debug!("resolved credential: {cred:?}");

        self.builder.presign_url(&cred, time)
    }
}
