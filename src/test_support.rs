use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

/// Callback that keeps every value it is emitted with.
pub fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (Callback::from(move |value| sink.borrow_mut().push(value)), seen)
}
