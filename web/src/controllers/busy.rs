use leptos::prelude::*;

/// Something that can show and hide a busy state, e.g. a loading overlay.
pub trait BusyIndicator {
    fn set_busy(&self, busy: bool);
}

impl BusyIndicator for RwSignal<bool> {
    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// Shows the indicator for as long as the guard lives.
pub(crate) struct BusyGuard<'a, B: BusyIndicator + ?Sized> {
    indicator: &'a B,
}

impl<'a, B: BusyIndicator + ?Sized> BusyGuard<'a, B> {
    pub(crate) fn show(indicator: &'a B) -> Self {
        indicator.set_busy(true);
        Self { indicator }
    }
}

impl<B: BusyIndicator + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.indicator.set_busy(false);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::BusyIndicator;

    /// Records every busy transition.
    #[derive(Default)]
    pub struct RecordingIndicator {
        pub transitions: RefCell<Vec<bool>>,
    }

    impl RecordingIndicator {
        pub fn is_busy(&self) -> bool {
            self.transitions.borrow().last().copied().unwrap_or(false)
        }
    }

    impl BusyIndicator for RecordingIndicator {
        fn set_busy(&self, busy: bool) {
            self.transitions.borrow_mut().push(busy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingIndicator;
    use super::*;

    #[test]
    fn test_guard_hides_on_drop() {
        let indicator = RecordingIndicator::default();
        {
            let _guard = BusyGuard::show(&indicator);
            assert!(indicator.is_busy());
        }
        assert_eq!(*indicator.transitions.borrow(), vec![true, false]);
    }
}
