mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use common::{INACTIVE_STATUSES, create_active_admin, create_test_admin};
use gatehouse::gatehouse_models::{Action, AdminStatus, Resource, Role};
use gatehouse::{AccessEvaluator, GrantTable};

#[test]
fn test_super_admin_countries_delete_but_not_suspend() {
    let evaluator = AccessEvaluator::builtin();
    let admin = create_active_admin(Role::SuperAdmin);

    assert!(evaluator.can_access(&admin, Resource::Countries, Action::Delete));
    assert!(!evaluator.can_access(&admin, Resource::Countries, Action::Suspend));
}

#[test]
fn test_analyst_cannot_update_users_but_can_export_analytics() {
    let evaluator = AccessEvaluator::builtin();
    let analyst = create_active_admin(Role::AnalystReadonly);

    assert!(!evaluator.can_access(&analyst, Resource::Users, Action::Update));
    assert!(evaluator.can_access(&analyst, Resource::Analytics, Action::Export));
}

#[test]
fn test_suspended_moderator_cannot_approve() {
    let evaluator = AccessEvaluator::builtin();
    let active = create_test_admin(Role::Moderator, AdminStatus::Active, &["DE"]);
    let suspended = create_test_admin(Role::Moderator, AdminStatus::Suspended, &["DE"]);

    assert!(evaluator.can_access(&active, Resource::Moderation, Action::Approve));
    assert!(!evaluator.can_access(&suspended, Resource::Moderation, Action::Approve));
}

#[test]
fn test_finance_resource_actions() {
    let evaluator = AccessEvaluator::builtin();
    let finance = create_active_admin(Role::Finance);

    assert_eq!(
        evaluator.get_resource_actions(&finance, Resource::Finance),
        BTreeSet::from([Action::Read, Action::Update, Action::Approve, Action::Export])
    );
    assert_eq!(
        evaluator.get_resource_actions(&finance, Resource::Admins),
        BTreeSet::new()
    );
}

#[test]
fn test_resources_absent_from_role_are_denied_for_every_action() {
    let evaluator = AccessEvaluator::builtin();

    for role in Role::ALL {
        let admin = create_active_admin(*role);
        let granted = evaluator.grants().role_grants(*role).unwrap();

        for resource in Resource::ALL.iter().filter(|r| !granted.contains_key(*r)) {
            for action in Action::ALL {
                assert!(
                    !evaluator.can_access(&admin, *resource, *action),
                    "{role} should not {action} {resource}"
                );
            }
        }
    }
}

#[test]
fn test_inactive_accounts_get_no_access() {
    let evaluator = AccessEvaluator::builtin();

    for status in INACTIVE_STATUSES {
        for role in Role::ALL {
            let admin = create_test_admin(*role, status, &["GLOBAL"]);

            assert!(evaluator.get_accessible_resources(&admin).is_empty());
            for resource in Resource::ALL {
                assert!(evaluator.get_resource_actions(&admin, *resource).is_empty());
                for action in Action::ALL {
                    assert!(!evaluator.can_access(&admin, *resource, *action));
                }
            }
        }
    }
}

#[test]
fn test_can_access_agrees_with_resource_actions() {
    let evaluator = AccessEvaluator::builtin();

    for role in Role::ALL {
        let admin = create_active_admin(*role);
        let accessible = evaluator.get_accessible_resources(&admin);

        for resource in Resource::ALL {
            let actions = evaluator.get_resource_actions(&admin, *resource);
            assert_eq!(accessible.contains(resource), !actions.is_empty());

            for action in Action::ALL {
                assert_eq!(
                    evaluator.can_access(&admin, *resource, *action),
                    actions.contains(action),
                    "{role}/{resource}/{action}"
                );
            }
        }
    }
}

#[test]
fn test_decisions_are_repeatable() {
    let evaluator = AccessEvaluator::builtin();
    let admin = create_test_admin(Role::CountryAdmin, AdminStatus::Active, &["DE", "AT"]);

    let first: Vec<bool> = Resource::ALL
        .iter()
        .flat_map(|r| Action::ALL.iter().map(move |a| (*r, *a)))
        .map(|(r, a)| evaluator.can_access(&admin, r, a))
        .collect();

    for _ in 0..3 {
        let again: Vec<bool> = Resource::ALL
            .iter()
            .flat_map(|r| Action::ALL.iter().map(move |a| (*r, *a)))
            .map(|(r, a)| evaluator.can_access(&admin, r, a))
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(
        evaluator.get_accessible_resources(&admin),
        evaluator.get_accessible_resources(&admin)
    );
}

#[test]
fn test_evaluator_shares_table_across_threads() {
    let evaluator = AccessEvaluator::new(Arc::new(GrantTable::builtin()));

    let handles: Vec<_> = Role::ALL
        .iter()
        .map(|role| {
            let evaluator = evaluator.clone();
            let admin = create_active_admin(*role);
            std::thread::spawn(move || evaluator.get_accessible_resources(&admin))
        })
        .collect();

    for (role, handle) in Role::ALL.iter().zip(handles) {
        let resources = handle.join().unwrap();
        let admin = create_active_admin(*role);
        assert_eq!(resources, evaluator.get_accessible_resources(&admin));
    }
}

#[test]
fn test_custom_table_is_honoured() {
    let table = GrantTable::builder()
        .grant(Role::OpsSupport, Resource::System, &[Action::Read])
        .build();
    let evaluator = AccessEvaluator::new(Arc::new(table));
    let ops = create_active_admin(Role::OpsSupport);

    assert!(evaluator.can_access(&ops, Resource::System, Action::Read));
    assert!(!evaluator.can_access(&ops, Resource::Users, Action::Read));
    assert_eq!(
        evaluator.get_accessible_resources(&ops),
        BTreeSet::from([Resource::System])
    );
}

#[test]
fn test_named_lookup_fails_loudly() {
    let evaluator = AccessEvaluator::builtin();
    let admin = create_active_admin(Role::Finance);

    let err = evaluator
        .can_access_named(&admin, "FINANCE", "PAY")
        .unwrap_err();
    assert_eq!(err.code(), "invalid-enum-value");
    assert_eq!(evaluator.can_access_named(&admin, "FINANCE", "EXPORT"), Ok(true));
}
