// ============================================================================
// REACTIVITY - Lista de suscriptores para notificaciones de cambio
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Lista de callbacks identificados, con notificación síncrona.
/// Los callbacks pueden volver a entrar en la estructura que los posee:
/// `notify` copia la lista antes de invocar, así un suscriptor puede
/// suscribirse o darse de baja durante la propia notificación.
pub struct SubscriberList<T> {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Subscriber<T>)>>,
}

impl<T> SubscriberList<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Alta de un suscriptor; devuelve el id para darse de baja
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Subscriber<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_all_subscribers() {
        let list = SubscriberList::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = seen.clone();
            list.subscribe(move |value: &u32| seen.borrow_mut().push((tag, *value)));
        }
        list.notify(&7);

        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let list = SubscriberList::new();
        let count = Rc::new(Cell::new(0u32));

        let id = {
            let count = count.clone();
            list.subscribe(move |_: &()| count.set(count.get() + 1))
        };
        list.notify(&());
        list.unsubscribe(id);
        list.notify(&());

        assert_eq!(count.get(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn subscriber_can_unsubscribe_during_notify() {
        let list = Rc::new(SubscriberList::new());
        let count = Rc::new(Cell::new(0u32));

        let id = Rc::new(Cell::new(0u64));
        let registered = {
            let list = list.clone();
            let list_inner = list.clone();
            let count = count.clone();
            let id = id.clone();
            list.subscribe(move |_: &()| {
                count.set(count.get() + 1);
                list_inner.unsubscribe(id.get());
            })
        };
        id.set(registered);

        list.notify(&());
        list.notify(&());

        assert_eq!(count.get(), 1);
    }
}
