//! Transaction list derivation
//!
//! The displayed list is always recomputed from the stored transactions and the
//! current selection: filter first, then sort. Neither step touches the input.

use std::cmp::Ordering;

use crate::models::{FilterKey, SortKey, Transaction, ViewSelection};

/// Keep the transactions matching `filter`, in input order
pub fn filter_transactions(transactions: &[Transaction], filter: FilterKey) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|tx| match filter {
            FilterKey::All => true,
            FilterKey::Transfer => tx.kind.as_deref() == Some("transfer"),
            FilterKey::Swap => tx.kind.as_deref() == Some("swap"),
            FilterKey::Other => tx.is_other_kind(),
        })
        .collect()
}

/// Order newest/largest first. Equal keys keep their relative order.
pub fn sort_transactions(mut transactions: Vec<&Transaction>, sort: SortKey) -> Vec<&Transaction> {
    match sort {
        SortKey::Date => {
            transactions.sort_by(|a, b| b.effective_block_time().cmp(&a.effective_block_time()))
        }
        SortKey::Amount => {
            // -0.0 and an absent amount compare equal and keep their order
            transactions.sort_by(|a, b| {
                b.effective_amount()
                    .partial_cmp(&a.effective_amount())
                    .unwrap_or(Ordering::Equal)
            })
        }
        SortKey::Unrecognized => {}
    }
    transactions
}

/// Display-ready list for the current selection
pub fn derive_view(transactions: &[Transaction], selection: ViewSelection) -> Vec<Transaction> {
    let filtered = filter_transactions(transactions, selection.filter);
    sort_transactions(filtered, selection.sort)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(signature: &str, block_time: Option<i64>, kind: Option<&str>, amount: Option<f64>) -> Transaction {
        Transaction {
            signature: signature.to_string(),
            block_time,
            confirmation_status: "confirmed".to_string(),
            amount,
            kind: kind.map(str::to_string),
        }
    }

    fn signatures(txs: &[Transaction]) -> Vec<&str> {
        txs.iter().map(|t| t.signature.as_str()).collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("t1", Some(300), Some("transfer"), Some(2.0)),
            tx("s1", Some(100), Some("swap"), None),
            tx("o1", None, Some("stake"), Some(9.0)),
            tx("o2", Some(300), None, Some(2.0)),
            tx("o3", Some(50), Some("Transfer"), Some(0.5)),
            tx("t2", Some(200), Some("transfer"), Some(2.0)),
        ]
    }

    fn selection(sort: SortKey, filter: FilterKey) -> ViewSelection {
        ViewSelection { sort, filter }
    }

    #[test]
    fn test_scenario_date_order() {
        let txs = vec![
            tx("a", Some(100), Some("transfer"), Some(1.0)),
            tx("b", Some(200), Some("swap"), Some(5.0)),
        ];
        let view = derive_view(&txs, selection(SortKey::Date, FilterKey::All));
        assert_eq!(signatures(&view), vec!["b", "a"]);
    }

    #[test]
    fn test_scenario_transfer_filter() {
        let txs = vec![
            tx("a", Some(100), Some("transfer"), Some(1.0)),
            tx("b", Some(200), Some("swap"), Some(5.0)),
        ];
        let view = derive_view(&txs, selection(SortKey::Date, FilterKey::Transfer));
        assert_eq!(signatures(&view), vec!["a"]);
    }

    #[test]
    fn test_scenario_pending_sorts_last() {
        let txs = vec![
            tx("c", None, Some("other"), Some(3.0)),
            tx("d", Some(50), Some("transfer"), None),
            tx("e", Some(50), Some("swap"), None),
        ];
        let view = derive_view(&txs, selection(SortKey::Date, FilterKey::All));
        assert_eq!(signatures(&view), vec!["d", "e", "c"]);
    }

    #[test]
    fn test_other_is_complement_of_known_kinds() {
        let txs = sample();
        let view = derive_view(&txs, selection(SortKey::Unrecognized, FilterKey::Other));

        assert_eq!(signatures(&view), vec!["o1", "o2", "o3"]);
        assert!(view
            .iter()
            .all(|t| !matches!(t.kind.as_deref(), Some("transfer") | Some("swap"))));
    }

    #[test]
    fn test_date_sort_is_stable_and_non_increasing() {
        let txs = sample();
        let view = derive_view(&txs, selection(SortKey::Date, FilterKey::All));

        assert_eq!(signatures(&view), vec!["t1", "o2", "t2", "s1", "o3", "o1"]);
        assert!(view
            .windows(2)
            .all(|w| w[0].effective_block_time() >= w[1].effective_block_time()));
    }

    #[test]
    fn test_amount_sort_is_stable_and_non_increasing() {
        let txs = sample();
        let view = derive_view(&txs, selection(SortKey::Amount, FilterKey::All));

        assert_eq!(signatures(&view), vec!["o1", "t1", "o2", "t2", "o3", "s1"]);
        assert!(view
            .windows(2)
            .all(|w| w[0].effective_amount() >= w[1].effective_amount()));
    }

    #[test]
    fn test_negative_zero_ties_with_absent_amount() {
        let txs = vec![
            tx("neg", Some(1), None, Some(-0.0)),
            tx("none", Some(2), None, None),
            tx("zero", Some(3), None, Some(0.0)),
        ];
        let view = derive_view(&txs, selection(SortKey::Amount, FilterKey::All));

        assert_eq!(signatures(&view), vec!["neg", "none", "zero"]);
    }

    #[test]
    fn test_sort_acts_on_filtered_subset() {
        let txs = sample();
        for sort in [SortKey::Date, SortKey::Amount] {
            let view = derive_view(&txs, selection(sort, FilterKey::Transfer));
            assert!(view.iter().all(|t| t.kind.as_deref() == Some("transfer")));
            assert_eq!(view.len(), 2);
        }
    }

    #[test]
    fn test_unrecognized_sort_keeps_order() {
        let txs = sample();
        let view = derive_view(&txs, selection(SortKey::from("fee"), FilterKey::from("bogus")));
        assert_eq!(view, txs);
    }

    #[test]
    fn test_source_untouched_and_idempotent() {
        let txs = sample();
        let before = txs.clone();
        let sel = selection(SortKey::Amount, FilterKey::Other);

        let first = derive_view(&txs, sel);
        let second = derive_view(&txs, sel);

        assert_eq!(first, second);
        assert_eq!(txs, before);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_view(&[], ViewSelection::default()).is_empty());
    }
}
