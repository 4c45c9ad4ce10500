// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League table and scorer ranking computation.
//!
//! Reduces completed match results into a points table and ranks goal
//! scorers. Wins are worth two points, draws one, losses none.
//!
//! ## Invariants
//!
//! - Every roster team appears in the table, with a zero row when it has
//!   no completed matches.
//! - Tables order by points descending, then goal difference descending,
//!   then team name ascending.
//! - Scorer rankings drop players without goals and keep at most the top
//!   ten, ordered by goal count descending then player name ascending.

use crate::fixtures::RosterEntry;

/// Points awarded for a win.
const WIN_POINTS: u32 = 2;
/// Points awarded for a draw.
const DRAW_POINTS: u32 = 1;
/// Number of players a scorer ranking keeps.
const SCORER_LIMIT: usize = 10;

/// The final score of one completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedMatch {
    home_team_id: i64,
    away_team_id: i64,
    home_score: u32,
    away_score: u32,
}

impl CompletedMatch {
    /// Creates a new completed match record.
    #[must_use]
    pub const fn new(
        home_team_id: i64,
        away_team_id: i64,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            home_team_id,
            away_team_id,
            home_score,
            away_score,
        }
    }

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

    /// Returns the home team's goal count.
    #[must_use]
    pub const fn home_score(&self) -> u32 {
        self.home_score
    }

    /// Returns the away team's goal count.
    #[must_use]
    pub const fn away_score(&self) -> u32 {
        self.away_score
    }
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    team_id: i64,
    name: String,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
}

impl TeamStanding {
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

    /// Returns the number of completed matches.
    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    /// Returns the number of wins.
    #[must_use]
    pub const fn won(&self) -> u32 {
        self.won
    }

    /// Returns the number of draws.
    #[must_use]
    pub const fn drawn(&self) -> u32 {
        self.drawn
    }

    /// Returns the number of losses.
    #[must_use]
    pub const fn lost(&self) -> u32 {
        self.lost
    }

    /// Returns the goals scored.
    #[must_use]
    pub const fn goals_for(&self) -> u32 {
        self.goals_for
    }

    /// Returns the goals conceded.
    #[must_use]
    pub const fn goals_against(&self) -> u32 {
        self.goals_against
    }

    /// Returns the points total.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns goals scored minus goals conceded.
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// One player's goal count within a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerTally {
    player_id: i64,
    player_name: String,
    team_name: String,
    goals: u32,
}

impl ScorerTally {
    /// Creates a new scorer tally.
    #[must_use]
    pub const fn new(player_id: i64, player_name: String, team_name: String, goals: u32) -> Self {
        Self {
            player_id,
            player_name,
            team_name,
            goals,
        }
    }

    /// Returns the player identifier.
    #[must_use]
    pub const fn player_id(&self) -> i64 {
        self.player_id
    }

    /// Returns the player name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the name of the player's team.
    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Returns the goal count.
    #[must_use]
    pub const fn goals(&self) -> u32 {
        self.goals
    }
}

/// Computes the league table for a roster and its completed matches.
///
/// Results that reference a team outside the roster are ignored.
#[must_use]
pub fn league_table(roster: &[RosterEntry], results: &[CompletedMatch]) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = roster
        .iter()
        .map(|entry| TeamStanding {
            team_id: entry.team_id(),
            name: String::from(entry.name()),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.team_id.cmp(&b.team_id)));

    for result in results {
        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.team_id == result.home_team_id())
        {
            apply_result(row, result.home_score(), result.away_score());
        }
        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.team_id == result.away_team_id())
        {
            apply_result(row, result.away_score(), result.home_score());
        }
    }

    // Stable sort keeps the name ordering for full ties.
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference().cmp(&a.goal_difference()))
    });
    rows
}

/// Folds one result into a table row from that team's perspective.
fn apply_result(row: &mut TeamStanding, scored: u32, conceded: u32) {
    row.played += 1;
    row.goals_for += scored;
    row.goals_against += conceded;
    if scored > conceded {
        row.won += 1;
        row.points += WIN_POINTS;
    } else if scored == conceded {
        row.drawn += 1;
        row.points += DRAW_POINTS;
    } else {
        row.lost += 1;
    }
}

/// Ranks scorers, dropping goalless players and keeping the top ten.
#[must_use]
pub fn top_scorers(tallies: Vec<ScorerTally>) -> Vec<ScorerTally> {
    let mut ranked: Vec<ScorerTally> = tallies
        .into_iter()
        .filter(|tally| tally.goals > 0)
        .collect();
    ranked.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then(a.player_id.cmp(&b.player_id))
    });
    ranked.truncate(SCORER_LIMIT);
    ranked
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn roster(entries: &[(i64, &str)]) -> Vec<RosterEntry> {
        entries
            .iter()
            .map(|(team_id, name)| RosterEntry::new(*team_id, String::from(*name)))
            .collect()
    }

    #[test]
    fn test_league_table_empty_results() {
        let table = league_table(&roster(&[(1, "Tigres"), (2, "Halcones"), (3, "Lobos")]), &[]);
        let names: Vec<&str> = table.iter().map(TeamStanding::name).collect();
        assert_eq!(names, vec!["Halcones", "Lobos", "Tigres"]);
        for row in &table {
            assert_eq!(row.played(), 0);
            assert_eq!(row.points(), 0);
            assert_eq!(row.goal_difference(), 0);
        }
    }

    #[test]
    fn test_league_table_points_and_goals() {
        let teams = roster(&[(1, "Águilas"), (2, "Búhos"), (3, "Cóndores")]);
        let results = [
            CompletedMatch::new(1, 2, 3, 1),
            CompletedMatch::new(2, 3, 2, 2),
            CompletedMatch::new(3, 1, 1, 0),
        ];

        let table = league_table(&teams, &results);

        // Cóndores: one win, one draw. Águilas: one win, one loss.
        // Búhos: one draw, one loss.
        assert_eq!(table[0].name(), "Cóndores");
        assert_eq!(table[0].points(), 3);
        assert_eq!(table[0].won(), 1);
        assert_eq!(table[0].drawn(), 1);
        assert_eq!(table[0].goals_for(), 3);
        assert_eq!(table[0].goals_against(), 2);

        assert_eq!(table[1].name(), "Águilas");
        assert_eq!(table[1].points(), 2);
        assert_eq!(table[1].goal_difference(), 1);

        assert_eq!(table[2].name(), "Búhos");
        assert_eq!(table[2].points(), 1);
        assert_eq!(table[2].lost(), 1);
        assert_eq!(table[2].goal_difference(), -2);
    }

    #[test]
    fn test_league_table_goal_difference_tiebreak() {
        let teams = roster(&[(1, "Águilas"), (2, "Zorros"), (3, "Búhos"), (4, "Cóndores")]);
        let results = [
            CompletedMatch::new(2, 3, 4, 0),
            CompletedMatch::new(1, 4, 1, 0),
        ];

        let table = league_table(&teams, &results);
        assert_eq!(table[0].name(), "Zorros");
        assert_eq!(table[0].goal_difference(), 4);
        assert_eq!(table[1].name(), "Águilas");
        assert_eq!(table[1].goal_difference(), 1);
    }

    #[test]
    fn test_league_table_full_ties_keep_name_order() {
        let teams = roster(&[(1, "Pumas"), (2, "Halcones")]);
        let results = [
            CompletedMatch::new(1, 9, 2, 0),
            CompletedMatch::new(2, 9, 2, 0),
        ];

        let table = league_table(&teams, &results);
        assert_eq!(table[0].name(), "Halcones");
        assert_eq!(table[1].name(), "Pumas");
        assert_eq!(table[0].points(), table[1].points());
    }

    #[test]
    fn test_league_table_ignores_unknown_teams() {
        let table = league_table(
            &roster(&[(1, "Águilas")]),
            &[CompletedMatch::new(7, 8, 5, 5)],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].played(), 0);
    }

    #[test]
    fn test_top_scorers_drops_goalless_and_caps_at_ten() {
        let mut tallies: Vec<ScorerTally> = (1..=12)
            .map(|player_id| {
                ScorerTally::new(
                    player_id,
                    format!("Jugador {player_id:02}"),
                    String::from("Águilas"),
                    u32::try_from(player_id).unwrap(),
                )
            })
            .collect();
        tallies.push(ScorerTally::new(
            99,
            String::from("Sin Gol"),
            String::from("Búhos"),
            0,
        ));

        let ranked = top_scorers(tallies);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].goals(), 12);
        assert_eq!(ranked[9].goals(), 3);
        assert!(ranked.iter().all(|tally| tally.goals() > 0));
    }

    #[test]
    fn test_top_scorers_ties_rank_by_name() {
        let tallies = vec![
            ScorerTally::new(1, String::from("Zoe"), String::from("Águilas"), 4),
            ScorerTally::new(2, String::from("Ana"), String::from("Búhos"), 4),
            ScorerTally::new(3, String::from("Mia"), String::from("Cóndores"), 6),
        ];

        let ranked = top_scorers(tallies);
        let names: Vec<&str> = ranked.iter().map(ScorerTally::player_name).collect();
        assert_eq!(names, vec!["Mia", "Ana", "Zoe"]);
    }
}
