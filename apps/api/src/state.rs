use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::certificates::CertificateIssuer;
use crate::progress::store::{InMemoryProgressStore, ProgressStore};
use crate::random::{shared_rng, SharedRng};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable curriculum data, read without locking.
    pub catalog: Arc<Catalog>,
    /// Pluggable progress store. Default: InMemoryProgressStore (lost on restart).
    pub store: Arc<dyn ProgressStore>,
    pub issuer: Arc<CertificateIssuer>,
    pub rng: SharedRng,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            store: Arc::new(InMemoryProgressStore::new()),
            issuer: Arc::new(CertificateIssuer::new(config.certificate_base_url.clone())),
            rng: shared_rng(config.rng_seed),
        }
    }
}
