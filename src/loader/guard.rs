//! Scoped loading indicator.

use crate::render::RenderTarget;
use std::ops::{Deref, DerefMut};

/// Shows a target's loading indicator for as long as the guard lives.
///
/// Dropping the guard hides the indicator, so every exit path of a load,
/// including an early return or a dropped future, restores it.
pub struct LoadingGuard<'a, T: RenderTarget + ?Sized> {
    target: &'a mut T,
}

impl<'a, T: RenderTarget + ?Sized> LoadingGuard<'a, T> {
    /// Show the indicator on `target`.
    pub fn show(target: &'a mut T) -> Self {
        target.set_loading(true);
        Self { target }
    }
}

impl<T: RenderTarget + ?Sized> Deref for LoadingGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: RenderTarget + ?Sized> DerefMut for LoadingGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: RenderTarget + ?Sized> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.target.set_loading(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlDeck;

    #[test]
    fn test_guard_hides_on_drop() {
        let mut target = HtmlDeck::new();
        {
            let guard = LoadingGuard::show(&mut target);
            assert!(guard.deck().loading);
        }
        assert!(!target.deck().loading);
    }

    #[test]
    fn test_guard_hides_on_unwind() {
        let mut target = HtmlDeck::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = LoadingGuard::show(&mut target);
            panic!("render blew up");
        }));
        assert!(result.is_err());
        assert!(!target.deck().loading);
    }
}
