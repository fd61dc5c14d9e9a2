//! Keyed callback registry shared by the notifier and navigation events
//!
//! Listeners for a key run in subscription order. A pass iterates over a
//! snapshot of the list taken before the first call, so callbacks may
//! subscribe or unsubscribe freely while it runs. A listener unsubscribed
//! mid-pass is skipped for the rest of that pass.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use log::{error, warn};

type Callback<E> = Arc<dyn Fn(&E) -> anyhow::Result<()> + Send + Sync>;

struct Listener<E> {
    id: u64,
    active: Arc<AtomicBool>,
    callback: Callback<E>,
}

struct Inner<K, E> {
    next_id: u64,
    listeners: HashMap<K, Vec<Arc<Listener<E>>>>,
}

/// Callbacks grouped by key
pub struct ListenerRegistry<K, E> {
    inner: Arc<Mutex<Inner<K, E>>>,
}

impl<K, E> Clone for ListenerRegistry<K, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, E> Default for ListenerRegistry<K, E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                listeners: HashMap::new(),
            })),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl<K, E> ListenerRegistry<K, E>
where
    K: Eq + Hash + Clone + fmt::Display + Send + Sync + 'static,
    E: 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `key`. The returned handle removes exactly
    /// this registration; dropping it leaves the callback in place.
    pub fn subscribe<F>(&self, key: K, callback: F) -> Subscription
    where
        F: Fn(&E) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .listeners
                .entry(key.clone())
                .or_default()
                .push(Arc::new(Listener {
                    id,
                    active: active.clone(),
                    callback: Arc::new(callback),
                }));
            id
        };

        let registry: Weak<Mutex<Inner<K, E>>> = Arc::downgrade(&self.inner);
        Subscription {
            active,
            detach: Box::new(move || {
                if let Some(inner) = registry.upgrade() {
                    let mut inner = lock(&inner);
                    if let Some(list) = inner.listeners.get_mut(&key) {
                        list.retain(|l| l.id != id);
                        if list.is_empty() {
                            inner.listeners.remove(&key);
                        }
                    }
                }
            }),
        }
    }

    /// Invoke every active listener for `key` with `event`.
    ///
    /// Errors and panics are logged and do not stop the pass. Returns the
    /// number of listeners that completed successfully.
    pub fn emit(&self, key: &K, event: &E) -> usize {
        let snapshot: Vec<Arc<Listener<E>>> = lock(&self.inner)
            .listeners
            .get(key)
            .cloned()
            .unwrap_or_default();

        let mut delivered = 0;
        for listener in snapshot {
            if !listener.active.load(Ordering::SeqCst) {
                continue;
            }
            match catch_unwind(AssertUnwindSafe(|| (listener.callback)(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => warn!("Listener for {} failed: {:#}", key, e),
                Err(_) => error!("Listener for {} panicked", key),
            }
        }
        delivered
    }

    /// Number of registered listeners for `key`
    pub fn listener_count(&self, key: &K) -> usize {
        lock(&self.inner).listeners.get(key).map_or(0, Vec::len)
    }

    /// Remove every listener for every key
    pub fn clear(&self) {
        let mut inner = lock(&self.inner);
        for list in inner.listeners.values() {
            for listener in list {
                listener.active.store(false, Ordering::SeqCst);
            }
        }
        inner.listeners.clear();
    }
}

/// Handle for one registration
pub struct Subscription {
    active: Arc<AtomicBool>,
    detach: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    /// Remove the registration. Returns false if it was already removed.
    pub fn unsubscribe(&self) -> bool {
        if self.active.swap(false, Ordering::SeqCst) {
            (self.detach)();
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    type Registry = ListenerRegistry<String, u32>;

    fn key() -> String {
        "reddit".to_string()
    }

    fn recorder(
        log: &Arc<Mutex<Vec<&'static str>>>,
        name: &'static str,
    ) -> impl Fn(&u32) -> anyhow::Result<()> + Send + Sync + 'static {
        let log = log.clone();
        move |_| {
            log.lock().unwrap().push(name);
            Ok(())
        }
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let _a = registry.subscribe(key(), recorder(&log, "a"));
        let _b = registry.subscribe(key(), recorder(&log, "b"));
        let _c = registry.subscribe(key(), recorder(&log, "c"));

        assert_eq!(registry.emit(&key(), &1), 3);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_emit_only_reaches_matching_key() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let _a = registry.subscribe("github".to_string(), recorder(&log, "github"));

        assert_eq!(registry.emit(&key(), &1), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribe_removes_exactly_one_registration() {
        let registry = Registry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let callback = {
            let count = count.clone();
            move |_: &u32| -> anyhow::Result<()> {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        };
        let first = registry.subscribe(key(), callback.clone());
        let _second = registry.subscribe(key(), callback);

        assert!(first.unsubscribe());
        assert!(!first.unsubscribe());
        assert_eq!(registry.listener_count(&key()), 1);

        registry.emit(&key(), &1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_during_pass_skips_later_listener() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let _a = {
            let victim = victim.clone();
            let log = log.clone();
            registry.subscribe(key(), move |_| {
                log.lock().unwrap().push("a");
                if let Some(sub) = victim.lock().unwrap().as_ref() {
                    sub.unsubscribe();
                }
                Ok(())
            })
        };
        let b = registry.subscribe(key(), recorder(&log, "b"));
        let _c = registry.subscribe(key(), recorder(&log, "c"));
        *victim.lock().unwrap() = Some(b);

        registry.emit(&key(), &1);
        assert_eq!(*log.lock().unwrap(), vec!["a", "c"]);

        registry.emit(&key(), &2);
        assert_eq!(*log.lock().unwrap(), vec!["a", "c", "a", "c"]);
    }

    #[test]
    fn test_self_unsubscribe_does_not_skip_others() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let own: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let _first = registry.subscribe(key(), recorder(&log, "first"));
        let once = {
            let own = own.clone();
            let log = log.clone();
            registry.subscribe(key(), move |_| {
                log.lock().unwrap().push("once");
                if let Some(sub) = own.lock().unwrap().as_ref() {
                    sub.unsubscribe();
                }
                Ok(())
            })
        };
        let _last = registry.subscribe(key(), recorder(&log, "last"));
        *own.lock().unwrap() = Some(once);

        registry.emit(&key(), &1);
        registry.emit(&key(), &2);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first", "once", "last", "first", "last"]
        );
    }

    #[test]
    fn test_subscribe_during_pass_waits_for_next_pass() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let added: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let _a = {
            let handle = registry.clone();
            let log = log.clone();
            let added = added.clone();
            registry.subscribe(key(), move |_| {
                if added.lock().unwrap().is_empty() {
                    let sub = handle.subscribe(key(), recorder(&log, "late"));
                    added.lock().unwrap().push(sub);
                }
                Ok(())
            })
        };

        registry.emit(&key(), &1);
        assert!(log.lock().unwrap().is_empty());
        registry.emit(&key(), &2);
        assert_eq!(*log.lock().unwrap(), vec!["late"]);
    }

    #[test]
    fn test_failing_and_panicking_listeners_are_isolated() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let _err = registry.subscribe(key(), |_| Err(anyhow::anyhow!("listener failed")));
        let _panic = registry.subscribe(key(), |_| panic!("listener panicked"));
        let _ok = registry.subscribe(key(), recorder(&log, "ok"));

        assert_eq!(registry.emit(&key(), &1), 1);
        assert_eq!(*log.lock().unwrap(), vec!["ok"]);
    }

    #[test]
    fn test_unsubscribe_from_another_thread() {
        let registry = Registry::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sub = registry.subscribe(key(), recorder(&log, "moved"));
        let _kept = registry.subscribe(key(), recorder(&log, "kept"));

        let removed = std::thread::spawn(move || sub.unsubscribe())
            .join()
            .unwrap();
        assert!(removed);

        registry.emit(&key(), &1);
        assert_eq!(*log.lock().unwrap(), vec!["kept"]);
        assert_eq!(registry.listener_count(&key()), 1);
    }

    #[test]
    fn test_clear_deactivates_handles() {
        let registry = Registry::new();
        let sub = registry.subscribe(key(), |_| Ok(()));

        registry.clear();
        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
        assert_eq!(registry.listener_count(&key()), 0);
    }
}
