//! One-shot pacing delays.
//!
//! Games hold a [`Scheduler`] instead of arming real timers. The front end
//! feeds it elapsed milliseconds and applies whatever action comes due, which
//! keeps the games deterministic under test.

/// An action waiting for its delay to run out.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Deferred<A>
{
    action: A,
    remaining_ms: u32,
}

impl<A> Deferred<A>
{
    fn new(action: A, delay_ms: u32) -> Self
    {
        Self {
            action,
            remaining_ms: delay_ms,
        }
    }
}

/// Holds at most one pending action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler<A>
{
    pending: Option<Deferred<A>>,
}

impl<A> Default for Scheduler<A>
{
    fn default() -> Self
    {
        Self { pending: None }
    }
}

impl<A: std::fmt::Debug> Scheduler<A>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Arms `action` to fire after `delay_ms`. Refused while another action is pending.
    pub fn schedule(&mut self, action: A, delay_ms: u32) -> bool
    {
        if let Some(existing) = &self.pending {
            tracing::warn!(?existing, ?action, "deferred action already pending, dropping new one");
            return false;
        }
        tracing::trace!(?action, delay_ms, "deferred action scheduled");
        self.pending = Some(Deferred::new(action, delay_ms));
        true
    }

    /// Advances time; returns the pending action once its delay has elapsed.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<A>
    {
        let deferred = self.pending.as_mut()?;
        deferred.remaining_ms = deferred.remaining_ms.saturating_sub(elapsed_ms);
        if deferred.remaining_ms > 0 {
            return None;
        }
        self.pending.take().map(|deferred| deferred.action)
    }

    pub fn is_pending(&self) -> bool
    {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn fires_once_after_delay()
    {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.schedule("hide", 900));
        assert_eq!(scheduler.tick(500), None);
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.tick(399), None);
        assert_eq!(scheduler.tick(1), Some("hide"));
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.tick(1000), None);
    }

    #[test]
    fn overshoot_still_fires()
    {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1, 850);
        assert_eq!(scheduler.tick(5000), Some(1));
    }

    #[test]
    fn only_one_action_in_flight()
    {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.schedule('a', 100));
        assert!(!scheduler.schedule('b', 10));
        assert_eq!(scheduler.tick(100), Some('a'));
        assert!(scheduler.schedule('b', 10));
    }
}
