//! Thread-name registry.
//!
//! Bidirectional map between live thread identities and operator-chosen
//! display names. Naming is strictly first-come: a taken name is never
//! reassigned and a named thread is never renamed; renaming requires an
//! explicit forget/name pair.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
    thread::{self, ThreadId},
};

use crate::diag;

#[derive(Default)]
struct ThreadDb {
    by_id: HashMap<ThreadId, String>,
    by_name: HashMap<String, ThreadId>,
}

static DB: LazyLock<Mutex<ThreadDb>> = LazyLock::new(Default::default);

/// Associates the calling thread with `name`. Fails if the name is taken or
/// the calling thread already has one; prior state is left unchanged.
pub fn name_current_thread(name: &str) -> bool {
    let id = thread::current().id();
    {
        let mut db = DB.lock().unwrap();
        if !db.by_name.contains_key(name) && !db.by_id.contains_key(&id) {
            db.by_id.insert(id, name.to_string());
            db.by_name.insert(name.to_string(), id);
            drop(db);
            diag::debug(format_args!(
                "[tintlog] thread {} saved as '{name}'",
                display_id(id)
            ));
            return true;
        }
    }
    diag::warn(format_args!(
        "[tintlog] failed to name thread {}; '{name}' or the thread is already registered",
        display_id(id)
    ));
    false
}

/// Removes the entry for `id`. Fails if no such thread is registered.
pub fn forget_thread(id: ThreadId) -> bool {
    let removed = {
        let mut db = DB.lock().unwrap();
        match db.by_id.remove(&id) {
            Some(name) => {
                db.by_name.remove(&name);
                Some(name)
            }
            None => None,
        }
    };
    match removed {
        Some(name) => {
            diag::debug(format_args!(
                "[tintlog] thread '{name}' ({}) removed",
                display_id(id)
            ));
            true
        }
        None => {
            diag::warn(format_args!(
                "[tintlog] failed to remove thread {}; thread doesn't exist",
                display_id(id)
            ));
            false
        }
    }
}

/// Removes the entry for `name`. Fails if no thread carries that name.
pub fn forget_thread_name(name: &str) -> bool {
    let removed = {
        let mut db = DB.lock().unwrap();
        match db.by_name.remove(name) {
            Some(id) => {
                db.by_id.remove(&id);
                Some(id)
            }
            None => None,
        }
    };
    match removed {
        Some(id) => {
            diag::debug(format_args!(
                "[tintlog] thread '{name}' ({}) removed",
                display_id(id)
            ));
            true
        }
        None => {
            diag::warn(format_args!(
                "[tintlog] failed to remove thread '{name}'; thread doesn't exist"
            ));
            false
        }
    }
}

/// Clears every entry unconditionally.
pub fn reset_thread_names() {
    {
        let mut db = DB.lock().unwrap();
        db.by_id.clear();
        db.by_name.clear();
    }
    diag::debug(format_args!("[tintlog] thread name registry reset"));
}

/// Display name registered for `id`, if any.
pub fn thread_name(id: ThreadId) -> Option<String> {
    DB.lock().unwrap().by_id.get(&id).cloned()
}

/// Identity registered under `name`, if any.
pub fn thread_id(name: &str) -> Option<ThreadId> {
    DB.lock().unwrap().by_name.get(name).copied()
}

/// `ThreadId` only exposes its numeric value through `Debug`
/// (`ThreadId(n)`); keep just the number.
pub(crate) fn display_id(id: ThreadId) -> String {
    format!("{id:?}")
        .trim_start_matches("ThreadId(")
        .trim_end_matches(')')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_round_trip() {
        let _guard = testutil::serial();
        let id = thread::current().id();
        assert!(name_current_thread("round-trip-worker"));
        assert_eq!(thread_name(id).as_deref(), Some("round-trip-worker"));
        assert_eq!(thread_id("round-trip-worker"), Some(id));

        assert!(forget_thread_name("round-trip-worker"));
        assert_eq!(thread_name(id), None);
        assert_eq!(thread_id("round-trip-worker"), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let _guard = testutil::serial();
        assert!(name_current_thread("dup-name"));
        let taken = thread::spawn(|| name_current_thread("dup-name"))
            .join()
            .unwrap();
        assert!(!taken);
        // first registration survives
        assert_eq!(thread_id("dup-name"), Some(thread::current().id()));
        assert!(forget_thread_name("dup-name"));
    }

    #[test]
    fn test_no_renaming_via_reregistration() {
        let _guard = testutil::serial();
        let id = thread::current().id();
        assert!(name_current_thread("first-name"));
        assert!(!name_current_thread("second-name"));
        assert_eq!(thread_name(id).as_deref(), Some("first-name"));
        assert_eq!(thread_id("second-name"), None);

        // explicit forget/name pair is the rename workflow
        assert!(forget_thread(id));
        assert!(name_current_thread("second-name"));
        assert_eq!(thread_name(id).as_deref(), Some("second-name"));
        assert!(forget_thread(id));
    }

    #[test]
    fn test_remove_absent_fails_repeatedly() {
        let _guard = testutil::serial();
        assert!(!forget_thread_name("never-registered"));
        assert!(!forget_thread_name("never-registered"));
        let foreign = thread::spawn(|| thread::current().id()).join().unwrap();
        assert!(!forget_thread(foreign));
    }

    #[test]
    fn test_reset_clears_everything() {
        let _guard = testutil::serial();
        assert!(name_current_thread("reset-victim"));
        reset_thread_names();
        assert_eq!(thread_id("reset-victim"), None);
        assert_eq!(thread_name(thread::current().id()), None);
    }

    #[test]
    fn test_display_id_is_numeric() {
        let id = display_id(thread::current().id());
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }
}
