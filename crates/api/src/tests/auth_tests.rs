// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::capabilities::{Capability, compute_capabilities};
use crate::error::AuthError;
use crate::tests::helpers::{TEST_PASSWORD, create_test_operator, store_with_admin};
use courtlog_store::MemoryStore;

#[test]
fn test_login_opens_a_session() {
    let (mut store, _, _) = store_with_admin();

    let (token, actor, operator) =
        AuthenticationService::login(&mut store, "admin", TEST_PASSWORD).unwrap();

    assert!(token.starts_with("session_"));
    assert_eq!(actor.role, Role::Admin);
    assert_eq!(operator.login_name, "admin");

    let (validated, _) = AuthenticationService::validate_session(&store, &token).unwrap();
    assert_eq!(validated, actor);
}

#[test]
fn test_wrong_password_and_unknown_login_fail_the_same_way() {
    let (mut store, _, _) = store_with_admin();

    let wrong_password = AuthenticationService::login(&mut store, "admin", "not-the-pw1")
        .unwrap_err();
    let unknown_login = AuthenticationService::login(&mut store, "ghost", TEST_PASSWORD)
        .unwrap_err();

    assert_eq!(wrong_password, unknown_login);
}

#[test]
fn test_logout_invalidates_the_session() {
    let (mut store, _, _) = store_with_admin();
    let (token, _, _) = AuthenticationService::login(&mut store, "admin", TEST_PASSWORD).unwrap();

    AuthenticationService::logout(&mut store, &token);

    assert!(AuthenticationService::validate_session(&store, &token).is_err());
}

#[test]
fn test_unknown_role_name_is_rejected() {
    let err = Role::parse("Referee").unwrap_err();
    assert!(matches!(err, AuthError::AuthenticationFailed { .. }));
}

#[test]
fn test_club_management_is_admin_only() {
    let mut store = MemoryStore::new();
    let (admin, _) = create_test_operator(&mut store, "admin", Role::Admin);
    let (manager, _) = create_test_operator(&mut store, "manager", Role::ClubManager);
    let (coach, _) = create_test_operator(&mut store, "coach", Role::Coach);

    assert!(AuthorizationService::authorize_manage_clubs(&admin).is_ok());
    assert!(AuthorizationService::authorize_manage_clubs(&manager).is_err());
    assert!(AuthorizationService::authorize_manage_clubs(&coach).is_err());
}

#[test]
fn test_action_recording_excludes_club_managers() {
    let mut store = MemoryStore::new();
    let (admin, _) = create_test_operator(&mut store, "admin", Role::Admin);
    let (manager, _) = create_test_operator(&mut store, "manager", Role::ClubManager);
    let (coach, _) = create_test_operator(&mut store, "coach", Role::Coach);

    assert!(AuthorizationService::authorize_record_actions(&admin).is_ok());
    assert!(AuthorizationService::authorize_record_actions(&coach).is_ok());
    let err = AuthorizationService::authorize_record_actions(&manager).unwrap_err();
    assert!(matches!(err, AuthError::Unauthorized { .. }));
}

#[test]
fn test_every_role_may_manage_matches() {
    for role in [Role::Admin, Role::ClubManager, Role::Coach] {
        let actor = AuthenticatedActor { id: 1, role };
        assert!(AuthorizationService::authorize_manage_matches(&actor).is_ok());
    }
}

#[test]
fn test_capabilities_mirror_the_authorization_rules() {
    let coach = AuthenticatedActor {
        id: 1,
        role: Role::Coach,
    };
    let caps = compute_capabilities(&coach);

    assert_eq!(caps.manage_clubs, Capability::Denied);
    assert_eq!(caps.manage_teams, Capability::Denied);
    assert_eq!(caps.manage_matches, Capability::Allowed);
    assert_eq!(caps.record_actions, Capability::Allowed);
    assert_eq!(caps.view_audit, Capability::Denied);

    let admin = AuthenticatedActor {
        id: 2,
        role: Role::Admin,
    };
    let caps = compute_capabilities(&admin);
    assert_eq!(caps.register_operators, Capability::Allowed);
    assert_eq!(caps.view_audit, Capability::Allowed);
}
