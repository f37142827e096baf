//! Property-based tests for the card selector

use super::*;
use proptest::prelude::*;

fn arb_catalog_name() -> impl Strategy<Value = String> {
    (0..CATALOG.len()).prop_map(|i| CATALOG[i].name.to_string())
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_catalog_name(),
        1 => "[A-Za-z ]{1,20}",
    ]
}

fn arb_action() -> impl Strategy<Value = SelectorAction> {
    prop_oneof![
        arb_name().prop_map(SelectorAction::Toggle),
        arb_name().prop_map(SelectorAction::Remove),
    ]
}

fn selector_after(actions: &[SelectorAction]) -> CardSelector {
    let mut selector = CardSelector::new();
    for action in actions {
        selector.apply(action);
    }
    selector
}

proptest! {
    #[test]
    fn filter_is_ordered_subset_of_catalog(query in "[A-Za-z ]{0,6}") {
        let selector = CardSelector::new();
        let hits = selector.filter(&query);
        let needle = query.to_lowercase();

        for card in &hits {
            prop_assert!(
                card.name.to_lowercase().contains(&needle)
                    || card.bank.to_lowercase().contains(&needle)
            );
        }

        // Order matches catalog order
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| CATALOG.iter().position(|c| c.name == hit.name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Nothing that matches is left out
        let expected = CATALOG
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.bank.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn toggle_twice_keeps_members_and_restores_order_of_tail(
        actions in proptest::collection::vec(arb_action(), 0..12),
        name in arb_name(),
    ) {
        let mut selector = selector_after(&actions);
        let before = selector.selection().clone();
        let was_last = before.names().last() == Some(&name);

        selector.toggle(&name);
        selector.toggle(&name);

        if !before.contains(&name) || was_last {
            prop_assert_eq!(selector.selection(), &before);
        } else {
            // Deselect then reselect moves the card to the end
            let mut expected: Vec<String> =
                before.names().iter().filter(|n| **n != name).cloned().collect();
            expected.push(name.clone());
            prop_assert_eq!(selector.selection().names(), expected.as_slice());
        }
    }

    #[test]
    fn selection_has_no_duplicates_and_only_catalog_names(
        actions in proptest::collection::vec(arb_action(), 0..30),
    ) {
        let selector = selector_after(&actions);
        let names = selector.selection().names();

        for (i, name) in names.iter().enumerate() {
            prop_assert!(crate::catalog::find(name).is_some());
            prop_assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn list_checkmarks_follow_selection(
        actions in proptest::collection::vec(arb_action(), 0..20),
        query in "[a-z]{0,3}",
    ) {
        let mut selector = selector_after(&actions);
        selector.set_query(query);

        for item in selector.list_view().items() {
            prop_assert_eq!(item.selected, selector.selection().contains(item.card.name));
        }
    }
}
