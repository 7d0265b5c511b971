use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;

/// Storage backing the query engine.
///
/// `all` must yield payments in insertion order and hand out a fresh view on
/// every call; the "first biggest payment" query depends on that order.
///
/// `save` accepts payments as given. Readers reject NaN amounts before they get
/// here; a NaN saved directly is skipped by the biggest-payment queries.
pub trait PaymentStore: Send + Sync {
    fn clear(&mut self);
    fn save(&mut self, payments: Vec<Payment>);
    fn all(&self) -> Box<dyn Iterator<Item = &Payment> + '_>;

    fn len(&self) -> usize {
        self.all().count()
    }

    fn is_empty(&self) -> bool {
        self.all().next().is_none()
    }
}

/// A store that can be written and read from several tasks at once.
///
/// Writers are mutually exclusive; readers take a copy of the payments and run
/// queries on a store built from it.
#[async_trait]
pub trait SharedStore: Send + Sync {
    async fn clear(&self) -> Result<()>;
    async fn save(&self, payments: Vec<Payment>) -> Result<()>;
    async fn snapshot(&self) -> Result<Vec<Payment>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type SharedStoreBox = Box<dyn SharedStore>;

impl PaymentStore for PaymentStoreBox {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn save(&mut self, payments: Vec<Payment>) {
        (**self).save(payments)
    }

    fn all(&self) -> Box<dyn Iterator<Item = &Payment> + '_> {
        (**self).all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
