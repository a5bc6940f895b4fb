//! Unit tests for kt-schedule.

use kt_core::{EventId, SimClock, Tick};

use crate::{TimerAction, TimerHost, TimerQueue};

fn queue() -> TimerQueue {
    TimerQueue::new(SimClock::new(1))
}

fn drain(q: &mut TimerQueue, until: Tick) -> Vec<(Tick, TimerAction)> {
    let mut out = Vec::new();
    while let Some(f) = q.pop_due(until) {
        out.push((f.at, f.action));
    }
    q.advance_to(until);
    out
}

const END_1: TimerAction = TimerAction::EndEvent { event: EventId(1) };

// ── One-shot timers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod one_shot {
    use super::*;

    #[test]
    fn fires_once_at_delay() {
        let mut q = queue();
        q.run_after(100.0, END_1);
        assert!(drain(&mut q, Tick(99)).is_empty());
        assert_eq!(drain(&mut q, Tick(100)), vec![(Tick(100), END_1)]);
        assert!(drain(&mut q, Tick(1_000)).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn fractional_delays_round_up() {
        let mut q = TimerQueue::new(SimClock::new(60));
        q.run_after(61.0, END_1);
        assert_eq!(q.next_due(), Some(Tick(2)));
    }

    #[test]
    fn zero_delay_fires_next_tick() {
        let mut q = queue();
        q.run_after(0.0, END_1);
        assert_eq!(q.next_due(), Some(Tick(1)));
    }

    #[test]
    fn cancelled_never_fires() {
        let mut q = queue();
        let t = q.run_after(10.0, END_1);
        assert!(q.is_armed(t));
        assert!(q.cancel(t));
        assert!(!q.cancel(t));
        assert!(drain(&mut q, Tick(100)).is_empty());
        assert_eq!(q.next_due(), None);
    }

    #[test]
    fn huge_delay_parks_at_end_of_time() {
        let mut q = queue();
        q.advance_to(Tick(100));
        let t = q.run_after(1.0e20, END_1);
        assert_eq!(q.next_due(), Some(Tick(u64::MAX)));
        assert!(drain(&mut q, Tick(1_000_000)).is_empty());
        assert!(q.is_armed(t));
    }

    #[test]
    fn cancel_after_fire_reports_false() {
        let mut q = queue();
        let t = q.run_after(1.0, END_1);
        drain(&mut q, Tick(5));
        assert!(!q.cancel(t));
    }
}

// ── Repeating timers ──────────────────────────────────────────────────────────

#[cfg(test)]
mod repeating {
    use super::*;

    #[test]
    fn fires_every_period() {
        let mut q = queue();
        q.run_repeating(10.0, 10.0, TimerAction::StartEvent);
        let fired: Vec<Tick> = drain(&mut q, Tick(35)).into_iter().map(|(t, _)| t).collect();
        assert_eq!(fired, vec![Tick(10), Tick(20), Tick(30)]);
        assert_eq!(q.next_due(), Some(Tick(40)));
    }

    #[test]
    fn huge_period_fires_once_then_parks() {
        let mut q = queue();
        q.run_repeating(10.0, 1.0e20, TimerAction::StartEvent);
        assert_eq!(drain(&mut q, Tick(1_000)), vec![(Tick(10), TimerAction::StartEvent)]);
        assert_eq!(q.next_due(), Some(Tick(u64::MAX)));
    }

    #[test]
    fn repeating_timer_at_end_of_time_is_retired() {
        let mut q = queue();
        q.advance_to(Tick(u64::MAX - 5));
        q.run_repeating(10.0, 10.0, TimerAction::StartEvent);
        assert_eq!(drain(&mut q, Tick(u64::MAX)).len(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_stops_future_firings() {
        let mut q = queue();
        let t = q.run_repeating(10.0, 10.0, TimerAction::StartEvent);
        drain(&mut q, Tick(10));
        assert!(q.cancel(t));
        assert!(drain(&mut q, Tick(100)).is_empty());
    }
}

// ── Ordering and clock ────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn same_tick_fires_in_arming_order() {
        let mut q = queue();
        q.run_repeating(10.0, 10.0, TimerAction::StartEvent);
        q.run_after(10.0, END_1);
        let actions: Vec<TimerAction> = drain(&mut q, Tick(10)).into_iter().map(|(_, a)| a).collect();
        assert_eq!(actions, vec![TimerAction::StartEvent, END_1]);
    }

    #[test]
    fn clock_follows_fired_timers() {
        let mut q = queue();
        q.run_after(5.0, END_1);
        let fired = q.pop_due(Tick(50)).unwrap();
        assert_eq!(fired.at, Tick(5));
        assert_eq!(q.now(), Tick(5));
        q.advance_to(Tick(50));
        assert_eq!(q.now(), Tick(50));
    }

    #[test]
    fn timers_armed_during_dispatch_are_relative_to_fire_time() {
        let mut q = queue();
        q.run_after(10.0, TimerAction::StartEvent);
        let fired = q.pop_due(Tick(100)).unwrap();
        assert_eq!(fired.at, Tick(10));
        q.run_after(30.0, END_1);
        assert_eq!(q.pop_due(Tick(100)).map(|f| f.at), Some(Tick(40)));
    }

    #[test]
    fn len_counts_live_timers() {
        let mut q = queue();
        let a = q.run_after(1.0, END_1);
        q.run_repeating(1.0, 1.0, TimerAction::StartEvent);
        assert_eq!(q.len(), 2);
        q.cancel(a);
        assert_eq!(q.len(), 1);
    }
}
