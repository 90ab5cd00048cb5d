use std::sync::Arc;

use recruit_engine::{Auth, MemoryStorage, SessionStore, Storage, AUTH_KEY};

fn auth() -> (Arc<MemoryStorage>, Auth) {
    recruit_logging::initialize_for_tests();
    let storage = Arc::new(MemoryStorage::new());
    (storage.clone(), Auth::new(SessionStore::new(storage)))
}

#[test]
fn valid_credentials_set_the_flag() {
    let (storage, auth) = auth();
    assert!(auth.login("admin", "password"));
    assert!(auth.check());
    assert_eq!(storage.get_item(AUTH_KEY).as_deref(), Some("true"));
}

#[test]
fn other_credentials_leave_the_flag_unset() {
    let (storage, auth) = auth();
    for (user, pass) in [("admin", "Password"), ("root", "password"), ("", "")] {
        assert!(!auth.login(user, pass));
    }
    assert!(!auth.check());
    assert!(storage.get_item(AUTH_KEY).is_none());
}

#[test]
fn logout_removes_the_flag() {
    let (storage, auth) = auth();
    auth.login("admin", "password");
    auth.logout();
    assert!(!auth.check());
    assert!(storage.get_item(AUTH_KEY).is_none());
}
