#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Transaction;
use rust_decimal_macros::dec;

fn make_txn(desc: &str, category: &str) -> Transaction {
    Transaction {
        id: None,
        date: "2026-01-15".into(),
        amount: dec!(-10.00),
        description: desc.into(),
        category: category.into(),
    }
}

// ── Default rule table ────────────────────────────────────────

#[test]
fn test_transport_keywords() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Uber trip home"), "Transport");
    assert_eq!(cat.categorize("UBER EATS"), "Transport");
    assert_eq!(cat.categorize("paid for uber"), "Transport");
    assert_eq!(cat.categorize("Ola cab to airport"), "Transport");
}

#[test]
fn test_food_keywords() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Morning coffee"), "Food & Drinks");
    assert_eq!(cat.categorize("STARBUCKS #4021"), "Food & Drinks");
}

#[test]
fn test_housing_keyword() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Monthly rent payment"), "Housing");
}

#[test]
fn test_utilities_keywords() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("Electricity for March"), "Utilities");
    assert_eq!(cat.categorize("Phone bill"), "Utilities");
}

#[test]
fn test_fallback() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("GROCERY STORE"), "Misc");
    assert_eq!(cat.categorize("Salary deposit"), "Misc");
}

#[test]
fn test_empty_description_falls_back() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize(""), "Misc");
}

#[test]
fn test_case_insensitive() {
    let cat = Categorizer::default();
    assert_eq!(cat.categorize("uber"), "Transport");
    assert_eq!(cat.categorize("UBER"), "Transport");
    assert_eq!(cat.categorize("Uber"), "Transport");
}

#[test]
fn test_keyword_matches_anywhere() {
    let cat = Categorizer::default();
    // Substring match, even inside a longer word
    assert_eq!(cat.categorize("Tuber snacks"), "Transport");
    assert_eq!(cat.categorize("Billing adjustment"), "Utilities");
}

#[test]
fn test_rule_order_wins() {
    let cat = Categorizer::default();
    // Transport is checked before Food & Drinks
    assert_eq!(cat.categorize("Paid UBER and STARBUCKS"), "Transport");
    // ...and before Utilities
    assert_eq!(cat.categorize("bill for uber ride"), "Transport");
}

// ── Custom rule tables ────────────────────────────────────────

#[test]
fn test_first_match_wins_within_custom_rules() {
    let cat = Categorizer::new(
        vec![
            Rule::new(&["shop"], "Shopping"),
            Rule::new(&["coffee shop"], "Food & Drinks"),
        ],
        FALLBACK_CATEGORY,
    );
    assert_eq!(cat.categorize("Coffee Shop"), "Shopping");
}

#[test]
fn test_empty_rules_always_fall_back() {
    let cat = Categorizer::new(vec![], "Uncategorized");
    assert_eq!(cat.categorize("anything"), "Uncategorized");
}

#[test]
fn test_custom_fallback_label() {
    let cat = Categorizer::new(vec![Rule::new(&["rent"], "Housing")], "Other");
    assert_eq!(cat.categorize("lunch"), "Other");
    assert_eq!(cat.categorize("rent due"), "Housing");
}

// ── apply ─────────────────────────────────────────────────────

#[test]
fn test_apply_infers_when_empty() {
    let cat = Categorizer::default();
    let mut txn = make_txn("Monthly rent payment", "");
    cat.apply(&mut txn);
    assert_eq!(txn.category, "Housing");
}

#[test]
fn test_apply_infers_fallback_when_no_match() {
    let cat = Categorizer::default();
    let mut txn = make_txn("Bookstore", "");
    cat.apply(&mut txn);
    assert_eq!(txn.category, "Misc");
}

#[test]
fn test_apply_keeps_explicit_category() {
    let cat = Categorizer::default();
    // Description would match Transport; the supplied label wins
    let mut txn = make_txn("Uber to client site", "Work Travel");
    cat.apply(&mut txn);
    assert_eq!(txn.category, "Work Travel");
}
