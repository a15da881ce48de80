//! Property tests over random type sequences.

use std::collections::HashSet;

use crate::common::constructible_handles;
use activator::{Activator, ActivatorConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cache_holds_exactly_the_types_seen(picks in proptest::collection::vec(0usize..10, 1..64)) {
        let handles = constructible_handles();
        let activator = Activator::default();

        for &pick in &picks {
            let ty = handles[pick % handles.len()];
            let instance = activator.create_instance(ty).unwrap();
            prop_assert_eq!(Some(instance.type_id()), ty.type_id());
        }

        let distinct: HashSet<usize> = picks.iter().map(|p| p % handles.len()).collect();
        prop_assert_eq!(activator.cache().len(), distinct.len());
        prop_assert_eq!(activator.cache().compilations(), distinct.len());
        for &pick in &distinct {
            prop_assert!(activator.cache().contains(handles[pick]));
        }
    }

    #[test]
    fn both_paths_agree(pick in 0usize..10, dynamic_code in any::<bool>()) {
        let handles = constructible_handles();
        let ty = handles[pick % handles.len()];
        let activator = Activator::new(
            ActivatorConfig::default().with_dynamic_code(dynamic_code),
        );

        let first = activator.create_instance(ty).unwrap();
        let second = activator.create_instance(ty).unwrap();
        prop_assert_eq!(first.type_id(), second.type_id());
        prop_assert_eq!(first.type_name(), ty.name());
    }
}
