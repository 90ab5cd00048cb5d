use recruit_core::{VALID_PASSWORD, VALID_USERNAME};
use recruit_logging::{recruit_info, recruit_warn};

use crate::store::{SessionStore, AUTH_KEY};

/// Demo credential check backed by the `isLoggedIn` session flag.
#[derive(Clone)]
pub struct Auth {
    store: SessionStore,
}

impl Auth {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn login(&self, username: &str, password: &str) -> bool {
        if username == VALID_USERNAME && password == VALID_PASSWORD {
            self.store.set_flag(AUTH_KEY);
            recruit_info!("User {username:?} logged in");
            true
        } else {
            recruit_warn!("Rejected login for {username:?}");
            false
        }
    }

    pub fn check(&self) -> bool {
        self.store.get_flag(AUTH_KEY)
    }

    pub fn logout(&self) {
        self.store.clear(AUTH_KEY);
        recruit_info!("Logged out");
    }
}
