//! Re-entrancy guard for session sends.

use std::sync::atomic::{AtomicBool, Ordering};

use tilebrief_common::SessionId;

use crate::AiError;

/// Holds a session's `busy` flag for the duration of one model call.
///
/// A send started while another is in flight on the same session gets
/// [`AiError::Busy`]; its history would otherwise interleave.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool, session: &SessionId) -> Result<Self, AiError> {
        match flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed) {
            Ok(_) => Ok(Self { flag }),
            Err(_) => {
                tracing::warn!(%session, "send rejected: session already has a call in flight");
                Err(AiError::Busy)
            }
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
