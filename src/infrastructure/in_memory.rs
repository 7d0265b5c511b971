use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStore, SharedStore};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An insertion-ordered in-memory payment store.
///
/// Not safe for concurrent mutation on its own; wrap it in
/// [`SharedPaymentStore`] when several tasks need access.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InMemoryPaymentStore {
    payments: Vec<Payment>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Payment>> for InMemoryPaymentStore {
    fn from(payments: Vec<Payment>) -> Self {
        Self { payments }
    }
}

impl PaymentStore for InMemoryPaymentStore {
    fn clear(&mut self) {
        self.payments.clear();
    }

    fn save(&mut self, payments: Vec<Payment>) {
        self.payments.extend(payments);
    }

    fn all(&self) -> Box<dyn Iterator<Item = &Payment> + '_> {
        Box::new(self.payments.iter())
    }

    fn len(&self) -> usize {
        self.payments.len()
    }

    fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// A thread-safe in-memory payment store.
///
/// Uses `Arc<RwLock<Vec<Payment>>>` so clones share one collection. `clear` and
/// `save` hold the write lock for their whole duration; `snapshot` copies the
/// contents under the read lock so queries never observe a half-applied batch.
#[derive(Default, Clone)]
pub struct SharedPaymentStore {
    payments: Arc<RwLock<Vec<Payment>>>,
}

impl SharedPaymentStore {
    /// Creates a new, empty shared payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedStore for SharedPaymentStore {
    async fn clear(&self) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.clear();
        Ok(())
    }

    async fn save(&self, batch: Vec<Payment>) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.extend(batch);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.clone())
    }
}
