/// Anything with an `overflow` style that can be read and written, usually
/// the document body.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

pub const LOCKED_OVERFLOW: &str = "hidden";

/// Suspends page scrolling for as long as it is alive. The overflow value
/// seen at acquisition is restored on drop, whatever it was.
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
    previous: String,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow(LOCKED_OVERFLOW);
        Self { target, previous }
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_restores_prior_value() {
        let body = FakeBody::default();
        body.set_overflow("scroll");
        {
            let lock = ScrollLock::acquire(body.clone());
            assert_eq!(lock.previous(), "scroll");
            assert_eq!(body.overflow(), LOCKED_OVERFLOW);
        }
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn test_restores_empty_value() {
        let body = FakeBody::default();
        drop(ScrollLock::acquire(body.clone()));
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_nested_locks_unwind() {
        let body = FakeBody::default();
        body.set_overflow("auto");
        let outer = ScrollLock::acquire(body.clone());
        let inner = ScrollLock::acquire(body.clone());
        assert_eq!(inner.previous(), LOCKED_OVERFLOW);
        drop(inner);
        assert_eq!(body.overflow(), LOCKED_OVERFLOW);
        drop(outer);
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn test_repeated_cycles_do_not_stick() {
        let body = FakeBody::default();
        for _ in 0..5 {
            let _lock = ScrollLock::acquire(body.clone());
        }
        assert_eq!(body.overflow(), "");
    }
}
