use log::debug;
use yew::Callback;

/// Pointer transitions delivered to hover-aware components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

/// Two-state hover machine. Each tile and avatar owns one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hover {
    #[default]
    Idle,
    Hovered,
}

impl Hover {
    pub fn on(self, pointer: Pointer) -> Self {
        match pointer {
            Pointer::Enter => Hover::Hovered,
            Pointer::Leave => Hover::Idle,
        }
    }

    pub fn is_hovered(self) -> bool {
        self == Hover::Hovered
    }
}

/// Listeners for `onmouseenter`/`onmouseleave`. Each one pushes the next
/// hover state into `set`.
pub struct HoverListeners<E> {
    pub onmouseenter: Callback<E>,
    pub onmouseleave: Callback<E>,
}

pub fn hover_listeners<E: 'static>(
    label: &'static str,
    current: Hover,
    set: Callback<Hover>,
) -> HoverListeners<E> {
    let transition = |pointer: Pointer| {
        let set = set.clone();
        Callback::from(move |_: E| {
            let next = current.on(pointer);
            debug!("{:?} hover: {:?}", label, next);
            set.emit(next);
        })
    };

    HoverListeners {
        onmouseenter: transition(Pointer::Enter),
        onmouseleave: transition(Pointer::Leave),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::recorder;

    #[test]
    fn starts_idle() {
        assert_eq!(Hover::default(), Hover::Idle);
        assert!(!Hover::default().is_hovered());
    }

    #[test]
    fn enter_then_leave_round_trips() {
        let entered = Hover::default().on(Pointer::Enter);
        assert!(entered.is_hovered());
        assert_eq!(entered.on(Pointer::Leave), Hover::Idle);
    }

    #[test]
    fn repeated_events_are_idempotent() {
        let hover = Hover::Idle.on(Pointer::Enter).on(Pointer::Enter);
        assert_eq!(hover, Hover::Hovered);
        assert_eq!(Hover::Idle.on(Pointer::Leave), Hover::Idle);
    }

    #[test]
    fn mouseenter_listener_sets_hovered() {
        let (set, seen) = recorder();
        let listeners = hover_listeners::<()>("tile", Hover::default(), set);
        listeners.onmouseenter.emit(());
        assert_eq!(*seen.borrow(), vec![Hover::Hovered]);
    }

    #[test]
    fn mouseleave_listener_sets_idle() {
        let (set, seen) = recorder();
        let listeners = hover_listeners::<()>("tile", Hover::Hovered, set);
        listeners.onmouseleave.emit(());
        assert_eq!(*seen.borrow(), vec![Hover::Idle]);
    }

    #[test]
    fn listeners_only_touch_their_own_instance() {
        let (set_a, seen_a) = recorder();
        let (set_b, seen_b) = recorder();
        let a = hover_listeners::<()>("a", Hover::default(), set_a);
        let _b = hover_listeners::<()>("b", Hover::default(), set_b);

        a.onmouseenter.emit(());

        assert_eq!(*seen_a.borrow(), vec![Hover::Hovered]);
        assert!(seen_b.borrow().is_empty());
    }
}
