//! Property tests for copy, aliasing, and traversal contracts.

use proptest::prelude::*;

use taskmodel::{Priority, Task, TaskHandle, TaskList, TaskStatus};

fn any_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
    ]
}

fn any_priority() -> impl Strategy<Value = Priority> {
    (any::<u8>(), "[A-Za-z ]{0,24}").prop_map(|(level, name)| Priority::new(level, name))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A cloned priority is field-equal to its source, and
    /// replacing either holder leaves the other untouched.
    #[test]
    fn property_priority_copies_are_independent(
        priority in any_priority(),
        replacement in any_priority(),
    ) {
        let original_level = priority.level();
        let original_name = priority.name().to_owned();

        let mut holder = priority.clone();
        prop_assert_eq!(holder.level(), original_level);
        prop_assert_eq!(holder.name(), original_name.as_str());

        holder = replacement;
        let _ = holder;

        prop_assert_eq!(priority.level(), original_level);
        prop_assert_eq!(priority.name(), original_name.as_str());
    }

    /// PROPERTY: Mutations through any alias of a handle are observed
    /// through every other alias.
    #[test]
    fn property_handle_aliases_observe_all_mutations(
        id in any::<u64>(),
        title in "[A-Za-z0-9 ]{0,32}",
        status in any_status(),
    ) {
        let handle = TaskHandle::new(Task::new(id));
        let alias = handle.clone();

        alias.set_title(title.clone());
        alias.set_status(status);

        prop_assert_eq!(handle.title(), Some(title));
        prop_assert_eq!(handle.status(), status);
        prop_assert!(handle.same_record(&alias));
    }

    /// PROPERTY: A detached record never writes back to the shared one.
    #[test]
    fn property_detached_records_are_independent(
        id in any::<u64>(),
        original_title in "[A-Za-z ]{1,16}",
        new_title in "[0-9]{1,16}",
    ) {
        let handle = TaskHandle::new(Task::new(id).with_title(original_title.clone()));
        let mut detached = handle.detach();

        detached.set_title(new_title);
        detached.set_status(TaskStatus::Completed);

        prop_assert_eq!(handle.title(), Some(original_title));
        prop_assert_eq!(handle.status(), TaskStatus::Pending);
    }

    /// PROPERTY: Indexed and sequential traversal visit the same handles in
    /// the same order for lists of any size, and indexed positions are the
    /// insertion positions.
    #[test]
    fn property_traversals_agree_for_any_list(count in 0usize..32) {
        let list: TaskList = (0..count as u64)
            .map(|id| TaskHandle::new(Task::new(id)))
            .collect();

        let sequential: Vec<u64> = list.iter().map(|t| t.id().value()).collect();
        let indexed: Vec<(usize, u64)> =
            list.indexed().map(|(i, t)| (i, t.id().value())).collect();

        prop_assert_eq!(sequential.len(), count);
        prop_assert_eq!(
            &sequential,
            &indexed.iter().map(|(_, id)| *id).collect::<Vec<_>>()
        );
        for (position, (index, _)) in indexed.iter().enumerate() {
            prop_assert_eq!(position, *index);
        }
    }

    /// PROPERTY: Reversed indexed traversal is exactly the forward traversal
    /// backwards.
    #[test]
    fn property_reverse_traversal_mirrors_forward(count in 0usize..32) {
        let list: TaskList = (0..count as u64)
            .map(|id| TaskHandle::new(Task::new(id)))
            .collect();

        let mut forward: Vec<u64> = list.indexed().map(|(_, t)| t.id().value()).collect();
        let backward: Vec<u64> = list.indexed().rev().map(|(_, t)| t.id().value()).collect();

        forward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
