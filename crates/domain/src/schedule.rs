// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic league schedule construction.
//!
//! Packs a double round-robin fixture list onto the eligible match days of
//! a calendar window. The full fixture list forms one cycle; as many whole
//! cycles are scheduled as the window can hold, and every cycle repeats
//! the same pairing order on later dates.
//!
//! ## Invariants
//!
//! - Output is a pure function of the plan and the roster. The roster is
//!   sorted by team name before pairing, so caller ordering never changes
//!   the result.
//! - The date cursor is global. Cycle two starts on the day after the last
//!   day cycle one used, never on a date already consumed.
//! - Round numbers restart at 1 for each cycle and increase once per match
//!   day. Cycle numbers start at 1.
//! - Every match kicks off at noon on its match day.
//! - Venues number the courts per day from 1, as
//!   `"{league} - Cancha {n}"`.

use crate::calendar::{self, PlayableDate};
use crate::error::DomainError;
use crate::fixtures::{self, FixturePairing, RosterEntry};
use time::macros::time;
use time::{Date, PrimitiveDateTime, Time, Weekday};

/// Kickoff time stamped on every scheduled match.
const KICKOFF: Time = time!(12:00);

/// Inputs for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePlan {
    window_start: Date,
    window_end: Date,
    venue_prefix: String,
    blackout_dates: Vec<Date>,
    allowed_weekdays: Vec<Weekday>,
    daily_capacity: Option<u32>,
}

impl SchedulePlan {
    /// Creates a plan for the given window and venue prefix.
    ///
    /// The plan starts with no blackout dates, Friday as the only allowed
    /// weekday, and a daily capacity of half the roster rounded up.
    #[must_use]
    pub const fn new(window_start: Date, window_end: Date, venue_prefix: String) -> Self {
        Self {
            window_start,
            window_end,
            venue_prefix,
            blackout_dates: Vec::new(),
            allowed_weekdays: Vec::new(),
            daily_capacity: None,
        }
    }

    /// Replaces the blackout dates.
    #[must_use]
    pub fn with_blackout_dates(mut self, blackout_dates: Vec<Date>) -> Self {
        self.blackout_dates = blackout_dates;
        self
    }

    /// Replaces the allowed weekdays.
    #[must_use]
    pub fn with_allowed_weekdays(mut self, allowed_weekdays: Vec<Weekday>) -> Self {
        self.allowed_weekdays = allowed_weekdays;
        self
    }

    /// Sets an explicit daily match capacity.
    #[must_use]
    pub const fn with_daily_capacity(mut self, daily_capacity: u32) -> Self {
        self.daily_capacity = Some(daily_capacity);
        self
    }
}

/// One match placed on the calendar, before persistence assigns ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMatch {
    home_team_id: i64,
    away_team_id: i64,
    kickoff: PrimitiveDateTime,
    venue: String,
    round: u32,
    cycle: u32,
}

impl ScheduledMatch {
    /// Returns the home team identifier.
    #[must_use]
    pub const fn home_team_id(&self) -> i64 {
        self.home_team_id
    }

    /// Returns the away team identifier.
    #[must_use]
    pub const fn away_team_id(&self) -> i64 {
        self.away_team_id
    }

    /// Returns the kickoff date and time.
    #[must_use]
    pub const fn kickoff(&self) -> PrimitiveDateTime {
        self.kickoff
    }

    /// Returns the venue label.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Returns the round number within the cycle.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the cycle number.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }
}

/// Home and away appearance counts for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTally {
    team_id: i64,
    name: String,
    home: u32,
    away: u32,
}

impl TeamTally {
    /// Returns the team identifier.
    #[must_use]
    pub const fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of home appearances.
    #[must_use]
    pub const fn home(&self) -> u32 {
        self.home
    }

    /// Returns the number of away appearances.
    #[must_use]
    pub const fn away(&self) -> u32 {
        self.away
    }

    /// Returns the total number of appearances.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.home + self.away
    }
}

/// Aggregate description of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    total_fixtures: usize,
    scheduled: usize,
    eligible_dates: usize,
    days_needed_per_cycle: usize,
    total_cycles: u32,
    window_start: Date,
    window_end: Date,
    first_match_day: Date,
    last_match_day: Date,
    team_tallies: Vec<TeamTally>,
}

impl ScheduleSummary {
    /// Returns the fixture count of one full cycle.
    #[must_use]
    pub const fn total_fixtures(&self) -> usize {
        self.total_fixtures
    }

    /// Returns the number of matches actually scheduled.
    #[must_use]
    pub const fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Returns the number of eligible dates in the window.
    #[must_use]
    pub const fn eligible_dates(&self) -> usize {
        self.eligible_dates
    }

    /// Returns the number of match days one cycle requires.
    #[must_use]
    pub const fn days_needed_per_cycle(&self) -> usize {
        self.days_needed_per_cycle
    }

    /// Returns the number of cycles scheduled.
    #[must_use]
    pub const fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    /// Returns the start of the scheduling window.
    #[must_use]
    pub const fn window_start(&self) -> Date {
        self.window_start
    }

    /// Returns the end of the scheduling window.
    #[must_use]
    pub const fn window_end(&self) -> Date {
        self.window_end
    }

    /// Returns the day of the first scheduled match.
    #[must_use]
    pub const fn first_match_day(&self) -> Date {
        self.first_match_day
    }

    /// Returns the day of the last scheduled match.
    #[must_use]
    pub const fn last_match_day(&self) -> Date {
        self.last_match_day
    }

    /// Returns the per-team appearance tallies, ordered by team name.
    #[must_use]
    pub fn team_tallies(&self) -> &[TeamTally] {
        &self.team_tallies
    }
}

/// The matches and summary produced by one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    matches: Vec<ScheduledMatch>,
    summary: ScheduleSummary,
}

impl ScheduleOutcome {
    /// Returns the scheduled matches in calendar order.
    #[must_use]
    pub fn matches(&self) -> &[ScheduledMatch] {
        &self.matches
    }

    /// Returns the run summary.
    #[must_use]
    pub const fn summary(&self) -> &ScheduleSummary {
        &self.summary
    }

    /// Consumes the outcome, yielding the matches and the summary.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ScheduledMatch>, ScheduleSummary) {
        (self.matches, self.summary)
    }
}

/// Builds a complete league schedule.
///
/// The roster is sorted by team name, expanded into double round-robin
/// pairings, and packed onto the eligible match days of the plan window.
/// One cycle needs `ceil(fixtures / capacity)` match days; the window
/// hosts `floor(eligible / days_needed)` whole cycles and partial cycles
/// are never emitted. When no capacity is set, half the roster rounded up
/// is used. When no allowed weekdays are set, Friday is used.
///
/// # Arguments
///
/// * `plan` - Calendar window, venue prefix and packing knobs
/// * `roster` - Teams competing in the league, any order
///
/// # Errors
///
/// Returns an error when the roster holds fewer than two teams, the daily
/// capacity is zero, the window holds no eligible dates, or the eligible
/// dates cannot host a single full cycle.
pub fn build_schedule(
    plan: &SchedulePlan,
    roster: &[RosterEntry],
) -> Result<ScheduleOutcome, DomainError> {
    let mut sorted: Vec<RosterEntry> = roster.to_vec();
    sorted.sort_by(|a, b| a.name().cmp(b.name()).then(a.team_id().cmp(&b.team_id())));

    let pairings: Vec<FixturePairing> = fixtures::round_robin_pairings(&sorted)?;
    let capacity: usize = resolve_daily_capacity(plan.daily_capacity, sorted.len())?;

    let allowed: &[Weekday] = if plan.allowed_weekdays.is_empty() {
        &[Weekday::Friday]
    } else {
        &plan.allowed_weekdays
    };
    let capacity_u32: u32 =
        u32::try_from(capacity).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: String::from("sizing the daily capacity"),
        })?;
    let eligible: Vec<PlayableDate> = calendar::eligible_match_days(
        plan.window_start,
        plan.window_end,
        &plan.blackout_dates,
        allowed,
        capacity_u32,
    )?;
    if eligible.is_empty() {
        return Err(DomainError::NoEligibleDates {
            window_start: plan.window_start,
            window_end: plan.window_end,
        });
    }

    let fixtures_per_cycle: usize = pairings.len();
    let days_needed: usize = fixtures_per_cycle.div_ceil(capacity);
    let total_cycles: u32 =
        u32::try_from(eligible.len() / days_needed).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: String::from("counting schedule cycles"),
            }
        })?;
    if total_cycles < 1 {
        return Err(DomainError::NoMatchesScheduled {
            eligible_dates: eligible.len(),
            days_needed_per_cycle: days_needed,
        });
    }

    let mut matches: Vec<ScheduledMatch> = Vec::new();
    let mut date_index: usize = 0;

    for cycle in 1..=total_cycles {
        let mut match_index: usize = 0;
        let mut round: u32 = 1;
        let mut cycle_date_index: usize = 0;

        while match_index < fixtures_per_cycle
            && cycle_date_index < days_needed
            && date_index < eligible.len()
        {
            let day: PlayableDate = eligible[date_index];
            let slots: usize = usize::try_from(day.available_slots()).map_err(|_| {
                DomainError::DateArithmeticOverflow {
                    operation: String::from("sizing the day's match slots"),
                }
            })?;
            let matches_today: usize = slots.min(fixtures_per_cycle - match_index);

            for court in 0..matches_today {
                let pairing: FixturePairing = pairings[match_index];
                matches.push(ScheduledMatch {
                    home_team_id: pairing.home_team_id(),
                    away_team_id: pairing.away_team_id(),
                    kickoff: PrimitiveDateTime::new(day.date(), KICKOFF),
                    venue: format!("{} - Cancha {}", plan.venue_prefix, court + 1),
                    round,
                    cycle,
                });
                match_index += 1;
            }

            round += 1;
            date_index += 1;
            cycle_date_index += 1;
        }
    }

    let (first_match_day, last_match_day): (Date, Date) =
        match (matches.first(), matches.last()) {
            (Some(first), Some(last)) => (first.kickoff().date(), last.kickoff().date()),
            _ => {
                return Err(DomainError::NoMatchesScheduled {
                    eligible_dates: eligible.len(),
                    days_needed_per_cycle: days_needed,
                });
            }
        };

    let summary: ScheduleSummary = ScheduleSummary {
        total_fixtures: fixtures_per_cycle,
        scheduled: matches.len(),
        eligible_dates: eligible.len(),
        days_needed_per_cycle: days_needed,
        total_cycles,
        window_start: plan.window_start,
        window_end: plan.window_end,
        first_match_day,
        last_match_day,
        team_tallies: tally_appearances(&sorted, &matches),
    };

    Ok(ScheduleOutcome { matches, summary })
}

/// Resolves the daily capacity, defaulting to half the roster rounded up.
fn resolve_daily_capacity(
    requested: Option<u32>,
    roster_len: usize,
) -> Result<usize, DomainError> {
    match requested {
        Some(0) => Err(DomainError::InvalidDailyCapacity { capacity: 0 }),
        Some(capacity) => {
            usize::try_from(capacity).map_err(|_| DomainError::DateArithmeticOverflow {
                operation: String::from("sizing the daily capacity"),
            })
        }
        None => Ok(roster_len.div_ceil(2)),
    }
}

/// Counts home and away appearances per roster team.
fn tally_appearances(roster: &[RosterEntry], matches: &[ScheduledMatch]) -> Vec<TeamTally> {
    let mut tallies: Vec<TeamTally> = roster
        .iter()
        .map(|entry| TeamTally {
            team_id: entry.team_id(),
            name: String::from(entry.name()),
            home: 0,
            away: 0,
        })
        .collect();

    for scheduled in matches {
        if let Some(tally) = tallies
            .iter_mut()
            .find(|tally| tally.team_id == scheduled.home_team_id())
        {
            tally.home += 1;
        }
        if let Some(tally) = tallies
            .iter_mut()
            .find(|tally| tally.team_id == scheduled.away_team_id())
        {
            tally.away += 1;
        }
    }

    tallies
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn roster(entries: &[(i64, &str)]) -> Vec<RosterEntry> {
        entries
            .iter()
            .map(|(team_id, name)| RosterEntry::new(*team_id, String::from(*name)))
            .collect()
    }

    /// Ten clean Fridays: Sep 4 through Nov 6, 2026, no holidays.
    const fn autumn_window() -> (Date, Date) {
        (date!(2026 - 09 - 04), date!(2026 - 11 - 06))
    }

    #[test]
    fn test_build_schedule_four_teams_two_courts() {
        let (start, end) = autumn_window();
        let plan =
            SchedulePlan::new(start, end, String::from("Liga Prueba")).with_daily_capacity(2);
        let teams = roster(&[
            (1, "Jaguares"),
            (2, "Tigres"),
            (3, "Halcones"),
            (4, "Lobos"),
        ]);

        let outcome = build_schedule(&plan, &teams).unwrap();

        assert_eq!(outcome.summary().total_fixtures(), 12);
        assert_eq!(outcome.summary().scheduled(), 12);
        assert_eq!(outcome.summary().days_needed_per_cycle(), 6);
        assert_eq!(outcome.summary().eligible_dates(), 10);
        assert_eq!(outcome.summary().total_cycles(), 1);
        assert_eq!(outcome.summary().window_start(), start);
        assert_eq!(outcome.summary().window_end(), end);
        assert_eq!(outcome.summary().first_match_day(), date!(2026 - 09 - 04));
        assert_eq!(outcome.summary().last_match_day(), date!(2026 - 10 - 09));

        // Sorted roster is Halcones(3), Jaguares(1), Lobos(4), Tigres(2),
        // so the first pairing puts Halcones at home against Jaguares.
        let first = &outcome.matches()[0];
        assert_eq!(first.home_team_id(), 3);
        assert_eq!(first.away_team_id(), 1);
        assert_eq!(first.kickoff(), datetime!(2026 - 09 - 04 12:00));
        assert_eq!(first.venue(), "Liga Prueba - Cancha 1");
        assert_eq!(first.round(), 1);
        assert_eq!(first.cycle(), 1);

        let second = &outcome.matches()[1];
        assert_eq!(second.home_team_id(), 3);
        assert_eq!(second.away_team_id(), 4);
        assert_eq!(second.venue(), "Liga Prueba - Cancha 2");
        assert_eq!(second.round(), 1);

        // Two matches per Friday, rounds advancing with the dates.
        let last = &outcome.matches()[11];
        assert_eq!(last.kickoff(), datetime!(2026 - 10 - 09 12:00));
        assert_eq!(last.round(), 6);
        for pair in outcome.matches().chunks(2) {
            assert_eq!(pair[0].kickoff(), pair[1].kickoff());
            assert_eq!(pair[0].round(), pair[1].round());
        }
    }

    #[test]
    fn test_build_schedule_second_cycle_repeats_pairings() {
        // Four Fridays: Sep 4, 11, 18, 25.
        let plan = SchedulePlan::new(
            date!(2026 - 09 - 04),
            date!(2026 - 09 - 26),
            String::from("Liga Prueba"),
        );
        let teams = roster(&[(1, "Águilas"), (2, "Búhos")]);

        let outcome = build_schedule(&plan, &teams).unwrap();

        // Two teams default to one court per day, so a cycle spans two
        // Fridays and the window holds two cycles.
        assert_eq!(outcome.summary().total_cycles(), 2);
        assert_eq!(outcome.summary().scheduled(), 4);
        assert_eq!(outcome.summary().first_match_day(), date!(2026 - 09 - 04));
        assert_eq!(outcome.summary().last_match_day(), date!(2026 - 09 - 25));

        let matches = outcome.matches();
        assert_eq!(matches[0].kickoff(), datetime!(2026 - 09 - 04 12:00));
        assert_eq!(matches[1].kickoff(), datetime!(2026 - 09 - 11 12:00));
        assert_eq!(matches[2].kickoff(), datetime!(2026 - 09 - 18 12:00));
        assert_eq!(matches[3].kickoff(), datetime!(2026 - 09 - 25 12:00));

        // Same pairing order both cycles, rounds restarting at one.
        assert_eq!(matches[0].home_team_id(), matches[2].home_team_id());
        assert_eq!(matches[0].away_team_id(), matches[2].away_team_id());
        assert_eq!(matches[1].home_team_id(), matches[3].home_team_id());
        assert_eq!(matches[2].cycle(), 2);
        assert_eq!(matches[2].round(), 1);
        assert_eq!(matches[3].round(), 2);
    }

    #[test]
    fn test_build_schedule_window_too_small_for_one_cycle() {
        // Four Fridays cannot host the six match days a twelve-fixture
        // cycle needs at two matches per day.
        let plan = SchedulePlan::new(
            date!(2026 - 09 - 04),
            date!(2026 - 09 - 26),
            String::from("Liga Prueba"),
        )
        .with_daily_capacity(2);
        let teams = roster(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);

        let error = build_schedule(&plan, &teams).unwrap_err();
        assert_eq!(
            error,
            DomainError::NoMatchesScheduled {
                eligible_dates: 4,
                days_needed_per_cycle: 6,
            }
        );
    }

    #[test]
    fn test_build_schedule_fully_blacked_out_window() {
        let plan = SchedulePlan::new(
            date!(2026 - 09 - 04),
            date!(2026 - 09 - 26),
            String::from("Liga Prueba"),
        )
        .with_blackout_dates(vec![
            date!(2026 - 09 - 04),
            date!(2026 - 09 - 11),
            date!(2026 - 09 - 18),
            date!(2026 - 09 - 25),
        ]);
        let teams = roster(&[(1, "A"), (2, "B")]);

        let error = build_schedule(&plan, &teams).unwrap_err();
        assert_eq!(
            error,
            DomainError::NoEligibleDates {
                window_start: date!(2026 - 09 - 04),
                window_end: date!(2026 - 09 - 26),
            }
        );
    }

    #[test]
    fn test_build_schedule_zero_capacity() {
        let (start, end) = autumn_window();
        let plan =
            SchedulePlan::new(start, end, String::from("Liga Prueba")).with_daily_capacity(0);
        let teams = roster(&[(1, "A"), (2, "B")]);

        let error = build_schedule(&plan, &teams).unwrap_err();
        assert_eq!(error, DomainError::InvalidDailyCapacity { capacity: 0 });
    }

    #[test]
    fn test_build_schedule_lone_team() {
        let (start, end) = autumn_window();
        let plan = SchedulePlan::new(start, end, String::from("Liga Prueba"));
        let error = build_schedule(&plan, &roster(&[(1, "Águilas")])).unwrap_err();
        assert_eq!(error, DomainError::InsufficientTeams { count: 1 });
    }

    #[test]
    fn test_build_schedule_default_capacity() {
        // Five teams produce twenty fixtures at three matches per day,
        // so one cycle needs seven of the nine autumn Fridays before
        // November, and the last match day is under-filled.
        let plan = SchedulePlan::new(
            date!(2026 - 09 - 04),
            date!(2026 - 10 - 30),
            String::from("Liga Prueba"),
        );
        let teams = roster(&[(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")]);

        let outcome = build_schedule(&plan, &teams).unwrap();
        assert_eq!(outcome.summary().days_needed_per_cycle(), 7);
        assert_eq!(outcome.summary().total_cycles(), 1);
        assert_eq!(outcome.summary().scheduled(), 20);

        let mut per_day: Vec<usize> = Vec::new();
        let mut current = None;
        for scheduled in outcome.matches() {
            if current == Some(scheduled.kickoff()) {
                if let Some(count) = per_day.last_mut() {
                    *count += 1;
                }
            } else {
                current = Some(scheduled.kickoff());
                per_day.push(1);
            }
        }
        assert_eq!(per_day, vec![3, 3, 3, 3, 3, 3, 2]);
    }

    #[test]
    fn test_build_schedule_skips_holidays() {
        // Nov 20, 2026 is a Friday and Día de la Revolución; the cursor
        // skips it without consuming a match day.
        let plan = SchedulePlan::new(
            date!(2026 - 11 - 06),
            date!(2026 - 12 - 04),
            String::from("Liga Prueba"),
        );
        let teams = roster(&[(1, "Águilas"), (2, "Búhos")]);

        let outcome = build_schedule(&plan, &teams).unwrap();
        let kickoffs: Vec<PrimitiveDateTime> = outcome
            .matches()
            .iter()
            .map(ScheduledMatch::kickoff)
            .collect();
        assert_eq!(
            kickoffs,
            vec![
                datetime!(2026 - 11 - 06 12:00),
                datetime!(2026 - 11 - 13 12:00),
                datetime!(2026 - 11 - 27 12:00),
                datetime!(2026 - 12 - 04 12:00),
            ]
        );
    }

    #[test]
    fn test_build_schedule_roster_order_independence() {
        let (start, end) = autumn_window();
        let plan =
            SchedulePlan::new(start, end, String::from("Liga Prueba")).with_daily_capacity(2);
        let forward = roster(&[(1, "Búhos"), (2, "Tigres"), (3, "Águilas"), (4, "Cóndores")]);
        let backward = roster(&[(4, "Cóndores"), (3, "Águilas"), (2, "Tigres"), (1, "Búhos")]);

        let first = build_schedule(&plan, &forward).unwrap();
        let second = build_schedule(&plan, &backward).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_schedule_balanced_appearances() {
        let (start, end) = autumn_window();
        let plan =
            SchedulePlan::new(start, end, String::from("Liga Prueba")).with_daily_capacity(2);
        let teams = roster(&[
            (1, "Jaguares"),
            (2, "Tigres"),
            (3, "Halcones"),
            (4, "Lobos"),
        ]);

        let outcome = build_schedule(&plan, &teams).unwrap();
        let tallies = outcome.summary().team_tallies();
        let names: Vec<&str> = tallies.iter().map(TeamTally::name).collect();
        assert_eq!(names, vec!["Halcones", "Jaguares", "Lobos", "Tigres"]);
        for tally in tallies {
            assert_eq!(tally.home(), 3);
            assert_eq!(tally.away(), 3);
            assert_eq!(tally.total(), 6);
        }
    }

    #[test]
    fn test_build_schedule_weekday_override() {
        // Saturdays are weekend days, so an explicit Saturday override
        // yields no dates; Thursdays work.
        let plan = SchedulePlan::new(
            date!(2026 - 09 - 01),
            date!(2026 - 09 - 30),
            String::from("Liga Prueba"),
        )
        .with_allowed_weekdays(vec![Weekday::Thursday]);
        let teams = roster(&[(1, "Águilas"), (2, "Búhos")]);

        let outcome = build_schedule(&plan, &teams).unwrap();
        assert_eq!(
            outcome.matches()[0].kickoff(),
            datetime!(2026 - 09 - 03 12:00)
        );
    }
}
