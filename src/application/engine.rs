use crate::domain::account::{Account, AccountInfo};
use crate::domain::payment::{Payment, ProductCategory};
use crate::domain::ports::PaymentStore;
use crate::error::{PaymentError, Result};
use crate::infrastructure::in_memory::InMemoryPaymentStore;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Analytical queries over the payments held by a [`PaymentStore`].
///
/// The engine owns its store. `clear` and `save` are the only operations that
/// touch it mutably; every query reads the current contents and returns
/// borrowed payments where it returns payments at all.
pub struct PaymentEngine<S: PaymentStore = InMemoryPaymentStore> {
    store: S,
}

impl Default for PaymentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentEngine {
    pub fn new() -> Self {
        Self {
            store: InMemoryPaymentStore::new(),
        }
    }
}

impl<S: PaymentStore> PaymentEngine<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn clear(&mut self) {
        self.store.clear();
        tracing::debug!("Payment store cleared");
    }

    pub fn save(&mut self, payments: Vec<Payment>) {
        let batch = payments.len();
        self.store.save(payments);
        tracing::debug!(batch, total = self.store.len(), "Payments saved");
    }

    /// Payments strictly inside `(start, end)`; both bounds are excluded.
    pub fn find_all_in_period(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Payment> {
        self.in_period(start, end).collect()
    }

    /// Total spent on food strictly inside `(start, end)`.
    pub fn spent_on_food(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        self.in_period(start, end)
            .filter(|payment| payment.product_category() == ProductCategory::Food)
            .map(Payment::amount)
            .sum()
    }

    /// Categories whose overall spend is strictly greater than `planned`.
    ///
    /// Only categories with at least one payment are considered, so a negative
    /// `planned` still leaves unused categories out.
    pub fn spent_more_than_planned(&self, planned: f64) -> BTreeSet<ProductCategory> {
        let mut totals: HashMap<ProductCategory, f64> = HashMap::new();
        for payment in self.store.all() {
            *totals.entry(payment.product_category()).or_default() += payment.amount();
        }

        totals
            .into_iter()
            .filter(|&(_, total)| total > planned)
            .map(|(category, _)| category)
            .collect()
    }

    /// Payments sent from `(account_number, bic)`, grouped by category.
    pub fn grouped_by_category(
        &self,
        account_number: &str,
        bic: &str,
    ) -> BTreeMap<ProductCategory, Vec<&Payment>> {
        let mut groups: BTreeMap<ProductCategory, Vec<&Payment>> = BTreeMap::new();
        for payment in self
            .store
            .all()
            .filter(|payment| payment.from().matches(account_number, bic))
        {
            groups
                .entry(payment.product_category())
                .or_default()
                .push(payment);
        }
        groups
    }

    pub fn payments_between_different_accounts(&self) -> Vec<&Payment> {
        self.store
            .all()
            .filter(|payment| payment.from() != payment.to())
            .collect()
    }

    /// Total of all payments strictly inside `(start, end)`.
    pub fn payment_sum_in_period(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        self.in_period(start, end).map(Payment::amount).sum()
    }

    /// Distinct dates on which a payment of the maximum amount was made.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::EmptyStore`] when there is no payment to take a
    /// maximum over. NaN amounts never take part in the maximum, so a store
    /// holding only NaN amounts fails the same way.
    pub fn find_days_with_biggest_payment(&self) -> Result<BTreeSet<NaiveDate>> {
        Ok(self.biggest_payments()?.map(Payment::date).collect())
    }

    /// Date of the first maximum-amount payment in storage order.
    ///
    /// This is the first occurrence, not the earliest date.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::EmptyStore`] when the store is empty or holds only
    /// NaN amounts.
    pub fn find_first_day_with_biggest_payment(&self) -> Result<NaiveDate> {
        self.biggest_payments()?
            .next()
            .map(Payment::date)
            .ok_or(PaymentError::EmptyStore)
    }

    /// Number of payments received per recipient account.
    ///
    /// Entries follow the order in which each recipient first appears in the store.
    pub fn find_payments_count_for_account(&self) -> Vec<AccountInfo> {
        let mut index: HashMap<&Account, usize> = HashMap::new();
        let mut infos: Vec<AccountInfo> = Vec::new();

        for payment in self.store.all() {
            match index.get(payment.to()) {
                Some(&position) => infos[position].count += 1,
                None => {
                    index.insert(payment.to(), infos.len());
                    infos.push(AccountInfo::new(payment.to().clone(), 1));
                }
            }
        }
        infos
    }

    /// Number of payments received by `(account_number, bic)`.
    pub fn payments_count(&self, account_number: &str, bic: &str) -> usize {
        self.store
            .all()
            .filter(|payment| payment.to().matches(account_number, bic))
            .count()
    }

    fn in_period(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl Iterator<Item = &Payment> + '_ {
        self.store.all().filter(move |payment| {
            let at = payment.date_time();
            start < at && at < end
        })
    }

    fn biggest_payments(&self) -> Result<impl Iterator<Item = &Payment> + '_> {
        let max = self
            .store
            .all()
            .map(Payment::amount)
            .filter(|amount| !amount.is_nan())
            .reduce(f64::max)
            .ok_or(PaymentError::EmptyStore)?;

        Ok(self
            .store
            .all()
            .filter(move |payment| payment.amount() >= max))
    }
}
