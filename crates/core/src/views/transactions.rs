use std::collections::HashSet;
use std::hash::Hash;

use crate::models::assetable::AssetKind;
use crate::models::transaction::Transaction;

/// Active filter of the transactions listing. Exactly one dimension at a time.
///
/// There is no way back to `Unfiltered`: once chosen, a filter stays for
/// the lifetime of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    FilteredByYear(i32),
    FilteredByType(AssetKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    SelectYear(i32),
    SelectType(AssetKind),
}

/// Filters are absolute: the new selection replaces whatever was active.
pub fn reduce(_state: FilterState, action: FilterAction) -> FilterState {
    match action {
        FilterAction::SelectYear(year) => FilterState::FilteredByYear(year),
        FilterAction::SelectType(kind) => FilterState::FilteredByType(kind),
    }
}

impl FilterState {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            FilterState::Unfiltered => true,
            FilterState::FilteredByYear(year) => transaction.year() == *year,
            FilterState::FilteredByType(kind) => transaction.kind() == *kind,
        }
    }
}

/// Transactions passing `state`, in their original order.
pub fn apply<'a>(state: &FilterState, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| state.matches(t)).collect()
}

fn distinct_in_order<T: Eq + Hash + Copy>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

/// Distinct trade years, in order of first appearance.
pub fn year_options(transactions: &[Transaction]) -> Vec<i32> {
    distinct_in_order(transactions.iter().map(Transaction::year))
}

/// Distinct asset kinds, in order of first appearance.
pub fn type_options(transactions: &[Transaction]) -> Vec<AssetKind> {
    distinct_in_order(transactions.iter().map(Transaction::kind))
}

/// Decoded transactions plus the filter the user has chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsView {
    transactions: Vec<Transaction>,
    state: FilterState,
}

impl TransactionsView {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            state: FilterState::Unfiltered,
        }
    }

    pub fn dispatch(&mut self, action: FilterAction) -> FilterState {
        self.state = reduce(self.state, action);
        self.state
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn visible(&self) -> Vec<&Transaction> {
        apply(&self.state, &self.transactions)
    }

    pub fn year_options(&self) -> Vec<i32> {
        year_options(&self.transactions)
    }

    pub fn type_options(&self) -> Vec<AssetKind> {
        type_options(&self.transactions)
    }

    pub fn is_active_year(&self, year: i32) -> bool {
        self.state == FilterState::FilteredByYear(year)
    }

    pub fn is_active_type(&self, kind: AssetKind) -> bool {
        self.state == FilterState::FilteredByType(kind)
    }
}
