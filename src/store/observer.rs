//! Subscriber registry for observable queries

use tracing::warn;
use crate::error::Result;
use super::{PasswordQuery, QuerySnapshot};

/// Callback receiving fresh query results
pub type Listener = Box<dyn FnMut(&QuerySnapshot) + Send>;

/// Handle returned by `subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    query: PasswordQuery,
    listener: Listener,
    last: QuerySnapshot,
}

/// Registered listeners and the last result each one received
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<Subscription>,
}

impl Subscribers {
    /// Register a listener and deliver the initial snapshot to it
    pub fn add(&mut self, query: PasswordQuery, mut listener: Listener, initial: QuerySnapshot) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        listener(&initial);
        self.entries.push(Subscription {
            id,
            query,
            listener,
            last: initial,
        });
        id
    }

    /// Remove a listener
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }

    /// Re-run every subscribed query and notify listeners whose result changed
    pub fn notify<F>(&mut self, mut run: F)
    where
        F: FnMut(&PasswordQuery) -> Result<QuerySnapshot>,
    {
        for subscription in &mut self.entries {
            match run(&subscription.query) {
                Ok(snapshot) if snapshot != subscription.last => {
                    (subscription.listener)(&snapshot);
                    subscription.last = snapshot;
                }
                Ok(_) => {}
                Err(e) => warn!(query = ?subscription.query, error = %e, "failed to refresh subscription"),
            }
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no listener is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::error::VaultError;

    fn recorder() -> (Arc<Mutex<Vec<QuerySnapshot>>>, Listener) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, Box::new(move |snapshot: &QuerySnapshot| sink.lock().unwrap().push(snapshot.clone())))
    }

    #[test]
    fn test_add_delivers_initial() {
        let mut subscribers = Subscribers::default();
        let (seen, listener) = recorder();
        subscribers.add(PasswordQuery::FolderNames, listener, QuerySnapshot::Folders(vec!["A".into()]));

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn test_notify_only_on_change() {
        let mut subscribers = Subscribers::default();
        let (seen, listener) = recorder();
        subscribers.add(PasswordQuery::FolderNames, listener, QuerySnapshot::Folders(vec![]));

        subscribers.notify(|_| Ok(QuerySnapshot::Folders(vec![])));
        assert_eq!(seen.lock().unwrap().len(), 1);

        subscribers.notify(|_| Ok(QuerySnapshot::Folders(vec!["Work".into()])));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].folders(), &["Work".to_string()]);
    }

    #[test]
    fn test_notify_error_keeps_subscription() {
        let mut subscribers = Subscribers::default();
        let (seen, listener) = recorder();
        subscribers.add(PasswordQuery::All, listener, QuerySnapshot::Passwords(vec![]));

        subscribers.notify(|_| Err(VaultError::DatabaseError("gone".into())));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut subscribers = Subscribers::default();
        let (seen, listener) = recorder();
        let id = subscribers.add(PasswordQuery::All, listener, QuerySnapshot::Passwords(vec![]));

        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        assert!(subscribers.is_empty());

        subscribers.notify(|_| Ok(QuerySnapshot::Passwords(vec![])));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
