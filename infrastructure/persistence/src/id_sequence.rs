use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Clock-derived ids that only ever increase.
///
/// Each id is the current Unix time in milliseconds, bumped past the last
/// issued id when the clock has not moved or went backwards.
#[derive(Debug)]
pub struct IdSequence {
    last: AtomicI64,
}

impl IdSequence {
    pub fn starting_after(last: i64) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    pub fn next(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&self, now_millis: i64) -> i64 {
        let advance = |last: i64| now_millis.max(last.saturating_add(1));
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }
}
