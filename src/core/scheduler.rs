//! Virtual-clock timer registry.
//!
//! Every periodic or one-shot activity of a session is a timer keyed by
//! [`TimerId`]. Time only moves when the owner calls [`Scheduler::pop_due`]
//! and [`Scheduler::advance_to`], so runs are deterministic and tests never
//! sleep.

use std::collections::HashMap;
use std::time::Duration;

/// Identity of a timer. At most one timer exists per id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// The 2s wave tick
    CombatLoop,
    /// Per-dungeon 1s countdown, by dungeon id
    Dungeon(String),
    /// 1s raid countdown
    RaidCountdown,
    /// 1s raid damage while participating
    RaidDamage,
    /// 1s cooldown tick of one skill, by skill id
    SkillCooldown(String),
    /// One-shot end of a skill's buff, by skill id
    BuffExpiry(String),
    /// One-shot clear of the notification slot
    Notification,
}

#[derive(Debug, Clone)]
struct TimerEntry {
    next_fire: Duration,
    period: Option<Duration>,
    seq: u64,
}

/// Timers ordered by due time, ties broken by creation order.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    timers: HashMap<TimerId, TimerEntry>,
    next_seq: u64,
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    fn insert(&mut self, id: TimerId, delay: Duration, period: Option<Duration>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(
            id,
            TimerEntry {
                next_fire: self.now.saturating_add(delay),
                period,
                seq,
            },
        );
    }

    /// Registers a repeating timer that first fires one period from now.
    /// Replaces any timer with the same id.
    pub fn schedule_repeating(&mut self, id: TimerId, period: Duration) {
        let period = period.max(MIN_PERIOD);
        self.insert(id, period, Some(period));
    }

    /// Registers a timer that fires once after `delay`. Replaces any timer
    /// with the same id.
    pub fn schedule_once(&mut self, id: TimerId, delay: Duration) {
        self.insert(id, delay, None);
    }

    /// Removes a timer. Returns whether it existed.
    pub fn cancel(&mut self, id: &TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_scheduled(&self, id: &TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Removes every timer. Returns how many were live.
    pub fn clear(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its fire time. Repeating timers are re-armed one period later and keep
    /// their place among ties. A timer whose next fire would pass the end of
    /// the clock is dropped.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let id = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.next_fire <= until)
            .min_by_key(|(_, entry)| (entry.next_fire, entry.seq))
            .map(|(id, _)| id.clone())?;

        let entry = self.timers.get_mut(&id)?;
        self.now = self.now.max(entry.next_fire);
        match entry.period.and_then(|period| entry.next_fire.checked_add(period)) {
            Some(next_fire) => entry.next_fire = next_fire,
            None => {
                self.timers.remove(&id);
            }
        }
        Some(id)
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }
}

/// Formats seconds as `HH:MM:SS`, or `Dd HH:MM:SS` past a day.
pub fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;
    if days > 0 {
        format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn drain(scheduler: &mut Scheduler, until: Duration) -> Vec<(TimerId, Duration)> {
        let mut fired = Vec::new();
        while let Some(id) = scheduler.pop_due(until) {
            fired.push((id, scheduler.now()));
        }
        scheduler.advance_to(until);
        fired
    }

    #[test]
    fn test_repeating_fires_every_period() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerId::CombatLoop, secs(2));
        let fired = drain(&mut scheduler, secs(7));
        let times: Vec<Duration> = fired.iter().map(|(_, t)| *t).collect();
        assert_eq!(times, vec![secs(2), secs(4), secs(6)]);
        assert_eq!(scheduler.now(), secs(7));
        assert!(scheduler.is_scheduled(&TimerId::CombatLoop));
    }

    #[test]
    fn test_ties_follow_creation_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerId::RaidCountdown, secs(1));
        scheduler.schedule_repeating(TimerId::RaidDamage, secs(1));
        scheduler.schedule_repeating(TimerId::CombatLoop, secs(2));
        let fired: Vec<TimerId> = drain(&mut scheduler, secs(2))
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            fired,
            vec![
                TimerId::RaidCountdown,
                TimerId::RaidDamage,
                TimerId::RaidCountdown,
                TimerId::RaidDamage,
                TimerId::CombatLoop,
            ]
        );
    }

    #[test]
    fn test_one_shot_and_cancel() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(TimerId::Notification, secs(3));
        scheduler.schedule_once(TimerId::BuffExpiry("frenzy".to_string()), secs(10));
        assert!(scheduler.cancel(&TimerId::BuffExpiry("frenzy".to_string())));
        assert!(!scheduler.cancel(&TimerId::BuffExpiry("frenzy".to_string())));

        assert_eq!(drain(&mut scheduler, secs(2)), vec![]);
        assert_eq!(
            drain(&mut scheduler, secs(20)),
            vec![(TimerId::Notification, secs(3))]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(TimerId::Notification, secs(3));
        scheduler.advance_to(secs(2));
        scheduler.schedule_once(TimerId::Notification, secs(3));
        assert_eq!(scheduler.len(), 1);
        assert_eq!(drain(&mut scheduler, secs(4)), vec![]);
        assert_eq!(
            drain(&mut scheduler, secs(5)),
            vec![(TimerId::Notification, secs(5))]
        );
    }

    #[test]
    fn test_clear_counts_live_timers() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerId::CombatLoop, secs(2));
        scheduler.schedule_repeating(TimerId::Dungeon("gold".to_string()), secs(1));
        assert_eq!(scheduler.clear(), 2);
        assert_eq!(scheduler.pop_due(secs(100)), None);
    }

    #[test]
    fn test_clock_saturates_at_the_end() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(Duration::MAX - secs(1));
        scheduler.schedule_repeating(TimerId::CombatLoop, secs(1));
        scheduler.schedule_once(TimerId::Notification, secs(10));

        assert_eq!(
            drain(&mut scheduler, Duration::MAX),
            vec![
                (TimerId::CombatLoop, Duration::MAX),
                (TimerId::Notification, Duration::MAX),
            ]
        );
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.now(), Duration::MAX);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerId::CombatLoop, Duration::ZERO);
        assert_eq!(drain(&mut scheduler, Duration::from_millis(3)).len(), 3);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3_661), "01:01:01");
        assert_eq!(format_duration(604_800), "7d 00:00:00");
        assert_eq!(format_duration(90_061), "1d 01:01:01");
    }
}
