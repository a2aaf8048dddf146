use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::models::{LoadState, Product};
use crate::network::ProductSource;

/// Written once by the fetch task, read every frame by the page.
#[derive(Debug)]
struct CatalogSlot {
    state: LoadState,
    products: Vec<Product>,
}

/// Fetches the catalog at most once per activation.
pub struct ProductLoader {
    slot: Arc<Mutex<CatalogSlot>>,
    cancel: CancellationToken,
    activated: bool,
    task: Option<JoinHandle<()>>,
}

impl Default for ProductLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductLoader {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(CatalogSlot {
                state: LoadState::Loading,
                products: Vec::new(),
            })),
            cancel: CancellationToken::new(),
            activated: false,
            task: None,
        }
    }

    /// Starts the fetch. Further calls on the same loader are ignored.
    pub fn activate<S: ProductSource>(&mut self, handle: &Handle, source: Arc<S>) {
        if self.activated {
            warn!("product loader already activated, not fetching again");
            return;
        }
        if self.cancel.is_cancelled() {
            warn!("product loader was deactivated, not fetching");
            return;
        }
        self.activated = true;

        let slot = Arc::clone(&self.slot);
        let cancel = self.cancel.clone();
        info!("fetching products");
        self.task = Some(handle.spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("product fetch abandoned, page deactivated");
                    return;
                }
                result = source.fetch_products() => result,
            };
            // deactivate() cancels under this lock, so the check and the write are atomic
            let mut slot = lock(&slot);
            if cancel.is_cancelled() {
                debug!("discarding product fetch result, page deactivated");
                return;
            }
            match result {
                Ok(products) => {
                    info!(count = products.len(), "products loaded");
                    settle(&mut slot, LoadState::Ready);
                    slot.products = products;
                }
                Err(e) => {
                    error!(error = %e, "error fetching products");
                    settle(&mut slot, LoadState::Failed);
                }
            }
        }));
    }

    /// Drops interest in the in-flight fetch; its result will not be applied.
    pub fn deactivate(&mut self) {
        let _slot = lock(&self.slot);
        self.cancel.cancel();
    }

    pub fn state(&self) -> LoadState {
        lock(&self.slot).state
    }

    pub fn products(&self) -> Vec<Product> {
        lock(&self.slot).products.clone()
    }

    #[cfg(test)]
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            task.await.unwrap();
        }
    }
}

fn lock(slot: &Mutex<CatalogSlot>) -> MutexGuard<'_, CatalogSlot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn settle(slot: &mut CatalogSlot, next: LoadState) {
    debug_assert!(slot.state.can_transition_to(next), "{:?} -> {:?}", slot.state, next);
    slot.state = next;
}
