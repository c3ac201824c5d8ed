//! Global interrupt masking
//!
//! A scoped guard over the `critical-section` crate's acquire/release
//! pair. The board selects the implementation (on the AVR: save SREG,
//! `cli`, restore SREG), so the guard restores the interrupt flag to
//! whatever it was on entry and nesting never re-enables interrupts early.

use core::marker::PhantomData;

use critical_section::RestoreState;

/// Scoped interrupt-masked region
///
/// Interrupts are masked by [`CriticalSection::enter`] and the saved
/// state is restored when the guard is dropped, on every exit path.
/// Guards must be dropped in reverse order of entry, which holding them
/// as scoped locals guarantees.
pub struct CriticalSection {
    restore: RestoreState,
    // Must be released on the context that acquired it
    _not_send: PhantomData<*mut ()>,
}

impl CriticalSection {
    /// Mask interrupts until the returned guard is dropped
    #[allow(unsafe_code)]
    pub fn enter() -> Self {
        // SAFETY: the state is released exactly once, by Drop
        let restore = unsafe { critical_section::acquire() };
        Self {
            restore,
            _not_send: PhantomData,
        }
    }
}

impl Drop for CriticalSection {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: `restore` came from the matching acquire in `enter`
        unsafe { critical_section::release(self.restore) }
    }
}
