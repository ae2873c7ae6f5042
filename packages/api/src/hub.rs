//! The single owner of "who is signed in right now".
//!
//! The hub holds one mutable session cell and a list of listeners. The only
//! way the cell changes is [`SessionHub::set_session`], called by the auth
//! client when the provider reports a sign-in or sign-out. Observers get a
//! [`Subscription`] guard; dropping it removes the listener, so a view that
//! unmounts can never be poked afterwards.
//!
//! Everything here runs on the single UI thread, so the state lives in an
//! `Rc<RefCell<_>>` rather than behind a lock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::session::Session;

type Listener = Rc<dyn Fn(Option<&Session>)>;

#[derive(Default)]
struct HubState {
    current: Option<Session>,
    listeners: Vec<(u64, Listener)>,
    next_token: u64,
}

/// Fan-out point for session changes.
#[derive(Clone, Default)]
pub struct SessionHub {
    state: Rc<RefCell<HubState>>,
}

/// Listener registration guard; dropping it unsubscribes.
pub struct Subscription {
    state: Weak<RefCell<HubState>>,
    token: u64,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().current.clone()
    }

    /// Register a session-change listener.
    ///
    /// The listener is invoked once immediately with the current value, then
    /// again on every change until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let token = {
            let mut state = self.state.borrow_mut();
            let token = state.next_token;
            state.next_token += 1;
            state.listeners.push((token, listener.clone()));
            token
        };

        // Deliver the current value outside the borrow; the listener may
        // read the hub again.
        let current = self.current();
        listener(current.as_ref());

        Subscription {
            state: Rc::downgrade(&self.state),
            token,
        }
    }

    /// Replace the current session and notify listeners in registration
    /// order. This is the only mutation entry point.
    pub fn set_session(&self, session: Option<Session>) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.current = session;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        let current = self.current();
        for listener in &listeners {
            listener(current.as_ref());
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|(t, _)| *t != self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(email: &str) -> Session {
        Session {
            email: email.to_string(),
            id_token: "token".to_string(),
            local_id: "uid".to_string(),
        }
    }

    #[test]
    fn test_subscriber_sees_current_value_immediately() {
        let hub = SessionHub::new();
        hub.set_session(Some(session("a@example.com")));

        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let capture = seen.clone();
        let _sub = hub.subscribe(move |s| {
            capture.borrow_mut().push(s.map(|s| s.email.clone()));
        });

        assert_eq!(&*seen.borrow(), &[Some("a@example.com".to_string())]);
    }

    #[test]
    fn test_listeners_observe_every_transition() {
        let hub = SessionHub::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let capture = seen.clone();
        let _sub = hub.subscribe(move |s| {
            capture.borrow_mut().push(s.map(|s| s.email.clone()));
        });

        hub.set_session(Some(session("a@example.com")));
        hub.set_session(None);
        hub.set_session(Some(session("b@example.com")));

        assert_eq!(
            &*seen.borrow(),
            &[
                None,
                Some("a@example.com".to_string()),
                None,
                Some("b@example.com".to_string()),
            ]
        );
        assert_eq!(hub.current().map(|s| s.email), Some("b@example.com".to_string()));
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let hub = SessionHub::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let capture = seen.clone();
        let sub = hub.subscribe(move |s| {
            capture.borrow_mut().push(s.map(|s| s.email.clone()));
        });
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);

        hub.set_session(Some(session("a@example.com")));
        // Only the immediate delivery from subscribe time
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_multiple_listeners_notified_in_order() {
        let hub = SessionHub::new();
        let order: Rc<RefCell<Vec<u8>>> = Rc::default();

        let first = order.clone();
        let _a = hub.subscribe(move |_| first.borrow_mut().push(1));
        let second = order.clone();
        let _b = hub.subscribe(move |_| second.borrow_mut().push(2));

        order.borrow_mut().clear();
        hub.set_session(None);
        assert_eq!(&*order.borrow(), &[1, 2]);
    }
}
