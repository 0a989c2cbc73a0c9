// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over the ledger. Everything here takes slices of model
//! structs and returns summary values; nothing touches the database.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Goal, Transaction, TxKind};

/// Chart palette, assigned to categories in first-seen order, cycling.
pub const PALETTE: [&str; 7] = [
    "#8B5CF6", "#06B6D4", "#10B981", "#F59E0B", "#EF4444", "#EC4899", "#6366F1",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Total income, total expenses (absolute), and net balance.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expenses += t.amount.abs(),
        }
    }
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

pub fn total_savings(goals: &[Goal]) -> Decimal {
    goals.iter().map(|g| g.current_amount).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub totals: Totals,
    pub income_count: usize,
    pub expense_count: usize,
}

/// Income/expense subtotals restricted to transactions dated in the given
/// calendar month.
pub fn month_totals(transactions: &[Transaction], year: i32, month: u32) -> MonthTotals {
    let in_month: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .cloned()
        .collect();
    let income_count = in_month.iter().filter(|t| t.kind == TxKind::Income).count();
    let expense_count = in_month.len() - income_count;
    MonthTotals {
        totals: totals(&in_month),
        income_count,
        expense_count,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: Decimal,
    pub color: &'static str,
}

/// Group expenses by category in first-seen order. Each distinct category
/// takes the next palette color.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == TxKind::Expense) {
        match slices.iter_mut().find(|s| s.category == t.category) {
            Some(s) => s.amount += t.amount.abs(),
            None => slices.push(CategorySlice {
                category: t.category.clone(),
                amount: t.amount.abs(),
                color: PALETTE[slices.len() % PALETTE.len()],
            }),
        }
    }
    slices
}

/// Percent share of `amount` against the summed total of all slices.
pub fn share_percent(slices: &[CategorySlice], amount: Decimal) -> Decimal {
    let total: Decimal = slices.iter().map(|s| s.amount).sum();
    if total.is_zero() {
        return Decimal::ZERO;
    }
    amount / total * Decimal::from(100)
}
