//! The tournament state machine.
//!
//! [`Tournament`] is the single owner of all tournament state. Every
//! mutation goes through a method here; observers read state back through
//! accessors or [`Tournament::snapshot`] and pick up notifications via
//! [`Tournament::drain_events`]. Nothing here renders, persists, or keeps
//! time — those are the embedder's collaborators.
//!
//! The lifecycle is deliberately forgiving: validation failures return an
//! error and leave state untouched, round navigation clamps instead of
//! blocking, and finished matches can be reopened for correction.

use log::{info, warn};
use std::collections::VecDeque;

use crate::leaderboard::{self, PlayerStat, export};
use crate::schedule::scheduler;
use crate::snapshot::TournamentSnapshot;
use crate::tournament::events::TournamentEvent;
use crate::tournament::models::{
    DEFAULT_COURTS, DEFAULT_PLAYER_SLOTS, MIN_PLAYERS, MIN_PLAYERS_FOR_SECOND_COURT, Match,
    PlayerName, RebuildConsent, Side, Stage, TournamentError,
};

/// An Americano tournament.
#[derive(Debug)]
pub struct Tournament {
    stage: Stage,
    /// Name slots as entered; may hold empty or untrimmed strings. The
    /// boundary validators trim and drop empties wherever names are used.
    players: Vec<PlayerName>,
    num_courts: usize,
    rounds: Vec<Vec<Match>>,
    current_round: usize,
    leaderboard: Vec<PlayerStat>,
    rests_by_round: Vec<Vec<PlayerName>>,
    events: VecDeque<TournamentEvent>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup,
            players: vec![PlayerName::new(); DEFAULT_PLAYER_SLOTS],
            num_courts: DEFAULT_COURTS,
            rounds: Vec::new(),
            current_round: 0,
            leaderboard: Vec::new(),
            rests_by_round: Vec::new(),
            events: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    /// Names that would actually take part: trimmed, empties dropped.
    #[must_use]
    pub fn valid_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.trim().is_empty()).count()
    }

    #[must_use]
    pub fn num_courts(&self) -> usize {
        self.num_courts
    }

    #[must_use]
    pub fn rounds(&self) -> &[Vec<Match>] {
        &self.rounds
    }

    #[must_use]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    #[must_use]
    pub fn current_matches(&self) -> &[Match] {
        match self.rounds.get(self.current_round) {
            Some(round) => round,
            None => &[],
        }
    }

    /// Players resting in the current round.
    #[must_use]
    pub fn resting_players(&self) -> &[PlayerName] {
        match self.rests_by_round.get(self.current_round) {
            Some(resting) => resting,
            None => &[],
        }
    }

    #[must_use]
    pub fn rests_by_round(&self) -> &[Vec<PlayerName>] {
        &self.rests_by_round
    }

    #[must_use]
    pub fn leaderboard(&self) -> &[PlayerStat] {
        &self.leaderboard
    }

    /// Hand the queued events to the observer.
    #[must_use]
    pub fn drain_events(&mut self) -> VecDeque<TournamentEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- setup ----

    /// Append an empty name slot.
    pub fn add_player_slot(&mut self) -> Result<(), TournamentError> {
        self.require_stage(Stage::Setup)?;
        self.players.push(PlayerName::new());
        self.adjust_courts_for_players();
        Ok(())
    }

    /// Remove a name slot. The last four slots can't be removed.
    pub fn remove_player_slot(&mut self, index: usize) -> Result<(), TournamentError> {
        self.require_stage(Stage::Setup)?;
        if self.players.len() <= DEFAULT_PLAYER_SLOTS {
            return Err(TournamentError::MinimumSlotsReached);
        }
        if index >= self.players.len() {
            return Err(TournamentError::SlotNotFound(index));
        }
        self.players.remove(index);
        self.adjust_courts_for_players();
        Ok(())
    }

    /// Set a slot's name as entered (trimming happens at use sites).
    pub fn update_player(&mut self, index: usize, name: &str) -> Result<(), TournamentError> {
        self.require_stage(Stage::Setup)?;
        let slot = self
            .players
            .get_mut(index)
            .ok_or(TournamentError::SlotNotFound(index))?;
        *slot = name.to_string();
        Ok(())
    }

    /// Set the court count (minimum one).
    pub fn set_courts(&mut self, count: usize) -> Result<(), TournamentError> {
        self.require_stage(Stage::Setup)?;
        self.num_courts = count.max(1);
        Ok(())
    }

    /// A second court needs enough players to fill two matches per round.
    fn adjust_courts_for_players(&mut self) {
        if self.valid_player_count() < MIN_PLAYERS_FOR_SECOND_COURT && self.num_courts != 1 {
            self.num_courts = 1;
        }
    }

    // ---- lifecycle ----

    /// Start the tournament: build the schedule and begin at round one.
    pub fn start(&mut self) -> Result<(), TournamentError> {
        self.require_stage(Stage::Setup)?;
        let current = self.valid_player_count();
        if current < MIN_PLAYERS {
            warn!("refusing to start with {current} players");
            return Err(TournamentError::InsufficientPlayers {
                needed: MIN_PLAYERS,
                current,
            });
        }

        let schedule = scheduler::build(&self.players, self.num_courts);
        let rounds = schedule.rounds.len();
        self.rounds = schedule.rounds;
        self.rests_by_round = schedule.rests_by_round;
        self.current_round = 0;
        self.leaderboard.clear();
        self.stage = Stage::Playing;
        info!("tournament started: {current} players, {} court(s), {rounds} rounds", self.num_courts);
        self.events.push_back(TournamentEvent::Started {
            players: current,
            courts: self.num_courts,
            rounds,
        });
        Ok(())
    }

    /// Store one side's raw score string on a match in the current round.
    /// Blank input clears the side. No numeric validation happens here.
    pub fn record_score(
        &mut self,
        match_index: usize,
        side: Side,
        value: &str,
    ) -> Result<(), TournamentError> {
        self.require_stage(Stage::Playing)?;
        let m = self.current_match_mut(match_index)?;
        if m.finished {
            return Err(TournamentError::MatchAlreadyFinished);
        }
        m.set_score(side, value);
        Ok(())
    }

    /// Mark a match finished once both scores are entered, and bring the
    /// leaderboard up to date. Finishing an already-finished match is a
    /// no-op.
    pub fn finish_match(&mut self, match_index: usize) -> Result<(), TournamentError> {
        self.require_stage(Stage::Playing)?;
        let round = self.current_round;
        let m = self.current_match_mut(match_index)?;
        if !m.scores_complete() {
            return Err(TournamentError::ScoresIncomplete);
        }
        if m.finished {
            return Ok(());
        }
        m.finished = true;
        let court = m.court;
        self.recompute_leaderboard();
        info!("round {}: court {court} finished", round + 1);
        self.events
            .push_back(TournamentEvent::MatchFinished { round, court });
        Ok(())
    }

    /// Reopen a finished match for score correction. Reopening an open
    /// match is a no-op.
    pub fn reopen_match(&mut self, match_index: usize) -> Result<(), TournamentError> {
        self.require_stage(Stage::Playing)?;
        let round = self.current_round;
        let m = self.current_match_mut(match_index)?;
        if !m.finished {
            return Ok(());
        }
        m.finished = false;
        let court = m.court;
        self.recompute_leaderboard();
        self.events
            .push_back(TournamentEvent::MatchReopened { round, court });
        Ok(())
    }

    /// Move to the next round; silently stays put on the last one.
    pub fn next_round(&mut self) {
        if self.stage == Stage::Playing && self.current_round + 1 < self.rounds.len() {
            self.current_round += 1;
            self.events.push_back(TournamentEvent::RoundChanged {
                round: self.current_round,
            });
        }
    }

    /// Move to the previous round; silently stays put on the first one.
    pub fn prev_round(&mut self) {
        if self.stage == Stage::Playing && self.current_round > 0 {
            self.current_round -= 1;
            self.events.push_back(TournamentEvent::RoundChanged {
                round: self.current_round,
            });
        }
    }

    /// Round navigation never blocks on unfinished matches; callers that
    /// want to warn first can check this.
    #[must_use]
    pub fn current_round_has_unfinished_matches(&self) -> bool {
        self.current_matches().iter().any(|m| !m.finished)
    }

    /// Add a player mid-tournament and rebuild every round after the
    /// current one for the grown roster.
    ///
    /// Played rounds and the round in progress keep their matches and
    /// scores. The rebuilt suffix restarts the pairing rotation, so
    /// partnerships may repeat across the boundary — the caller must pass
    /// [`RebuildConsent::Acknowledged`] after surfacing that warning.
    pub fn add_player(
        &mut self,
        name: &str,
        consent: RebuildConsent,
    ) -> Result<(), TournamentError> {
        self.require_stage(Stage::Playing)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        if consent != RebuildConsent::Acknowledged {
            return Err(TournamentError::RebuildConsentRequired);
        }

        self.players.push(name.to_string());
        scheduler::rebuild_from(
            &mut self.rounds,
            &mut self.rests_by_round,
            self.current_round,
            &self.players,
            self.num_courts,
        );
        info!("{name} joined mid-tournament");
        self.events.push_back(TournamentEvent::PlayerAdded {
            name: name.to_string(),
        });
        self.events.push_back(TournamentEvent::ScheduleRebuilt {
            from_round: self.current_round + 1,
        });
        Ok(())
    }

    /// End the tournament with a final leaderboard recompute.
    pub fn finish(&mut self) -> Result<(), TournamentError> {
        self.require_stage(Stage::Playing)?;
        self.recompute_leaderboard();
        self.stage = Stage::Finished;
        info!("tournament finished");
        self.events.push_back(TournamentEvent::TournamentFinished);
        Ok(())
    }

    /// Run the same roster again on a fresh schedule.
    pub fn play_again(&mut self) -> Result<(), TournamentError> {
        self.require_stage(Stage::Finished)?;
        let schedule = scheduler::build(&self.players, self.num_courts);
        self.rounds = schedule.rounds;
        self.rests_by_round = schedule.rests_by_round;
        self.current_round = 0;
        self.leaderboard.clear();
        self.stage = Stage::Playing;
        self.events.push_back(TournamentEvent::Restarted);
        Ok(())
    }

    /// Throw everything away and return to a pristine setup.
    pub fn new_tournament(&mut self) {
        self.stage = Stage::Setup;
        self.players = vec![PlayerName::new(); DEFAULT_PLAYER_SLOTS];
        self.num_courts = DEFAULT_COURTS;
        self.rounds.clear();
        self.current_round = 0;
        self.leaderboard.clear();
        self.rests_by_round.clear();
        self.events.push_back(TournamentEvent::Reset);
    }

    /// The standings as shareable text, once there are any.
    #[must_use]
    pub fn export_results(&self) -> Option<String> {
        if self.leaderboard.is_empty() {
            None
        } else {
            Some(export::render(&self.leaderboard))
        }
    }

    // ---- persistence bridge ----

    #[must_use]
    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            stage: self.stage,
            players: self.players.clone(),
            num_courts: self.num_courts,
            rounds: self.rounds.clone(),
            current_round: self.current_round,
            leaderboard: self.leaderboard.clone(),
            rests_by_round: self.rests_by_round.clone(),
        }
    }

    /// Rebuild a tournament from a stored snapshot, clamping the round
    /// index into range in case the stored data was tampered with.
    #[must_use]
    pub fn from_snapshot(snapshot: TournamentSnapshot) -> Self {
        let TournamentSnapshot {
            stage,
            players,
            num_courts,
            rounds,
            current_round,
            leaderboard,
            rests_by_round,
        } = snapshot;
        Self {
            stage,
            players,
            num_courts: num_courts.max(1),
            current_round: current_round.min(rounds.len().saturating_sub(1)),
            rounds,
            leaderboard,
            rests_by_round,
            events: VecDeque::new(),
        }
    }

    // ---- internals ----

    fn require_stage(&self, expected: Stage) -> Result<(), TournamentError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(TournamentError::InvalidStage {
                expected,
                actual: self.stage,
            })
        }
    }

    fn current_match_mut(&mut self, index: usize) -> Result<&mut Match, TournamentError> {
        let round = self.current_round;
        self.rounds
            .get_mut(round)
            .and_then(|matches| matches.get_mut(index))
            .ok_or(TournamentError::MatchNotFound(index))
    }

    fn recompute_leaderboard(&mut self) {
        self.leaderboard = leaderboard::compute(&self.players, &self.rounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_tournament() -> Tournament {
        let mut t = Tournament::new();
        for (slot, name) in ["Ana", "Luis", "Marta", "Pablo"].into_iter().enumerate() {
            t.update_player(slot, name).unwrap();
        }
        t
    }

    fn started_tournament() -> Tournament {
        let mut t = ready_tournament();
        t.start().unwrap();
        t
    }

    #[test]
    fn test_start_requires_four_valid_names() {
        let mut t = Tournament::new();
        t.update_player(0, "Ana").unwrap();
        t.update_player(1, "Luis").unwrap();
        t.update_player(2, "   ").unwrap();
        assert_eq!(
            t.start(),
            Err(TournamentError::InsufficientPlayers {
                needed: 4,
                current: 2
            })
        );
        assert_eq!(t.stage(), Stage::Setup);
        assert!(t.rounds().is_empty());
    }

    #[test]
    fn test_start_builds_schedule_and_enters_playing() {
        let mut t = ready_tournament();
        t.start().unwrap();
        assert_eq!(t.stage(), Stage::Playing);
        assert_eq!(t.rounds().len(), 3);
        assert_eq!(t.current_round(), 0);
        assert_eq!(t.current_matches().len(), 1);
        assert!(t.resting_players().is_empty());

        let events = t.drain_events();
        assert_eq!(
            events.front(),
            Some(&TournamentEvent::Started {
                players: 4,
                courts: 1,
                rounds: 3
            })
        );
    }

    #[test]
    fn test_double_start_is_refused() {
        let mut t = started_tournament();
        assert_eq!(
            t.start(),
            Err(TournamentError::InvalidStage {
                expected: Stage::Setup,
                actual: Stage::Playing
            })
        );
    }

    #[test]
    fn test_record_and_finish_match_updates_leaderboard() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        assert_eq!(t.finish_match(0), Err(TournamentError::ScoresIncomplete));

        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        assert!(t.current_matches()[0].finished);
        assert_eq!(t.leaderboard().len(), 4);
        assert_eq!(t.leaderboard()[0].wins, 1);
    }

    #[test]
    fn test_record_score_on_finished_match_is_refused() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        assert_eq!(
            t.record_score(0, Side::A, "7"),
            Err(TournamentError::MatchAlreadyFinished)
        );
    }

    #[test]
    fn test_finish_and_reopen_are_idempotent() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        let standings = t.leaderboard().to_vec();

        t.finish_match(0).unwrap();
        assert_eq!(t.leaderboard(), standings.as_slice());

        t.reopen_match(0).unwrap();
        let reopened = t.leaderboard().to_vec();
        assert!(reopened.iter().all(|s| s.wins == 0));
        t.reopen_match(0).unwrap();
        assert_eq!(t.leaderboard(), reopened.as_slice());
    }

    #[test]
    fn test_round_navigation_clamps() {
        let mut t = started_tournament();
        t.prev_round();
        assert_eq!(t.current_round(), 0);
        t.next_round();
        t.next_round();
        assert_eq!(t.current_round(), 2);
        t.next_round();
        assert_eq!(t.current_round(), 2);
    }

    #[test]
    fn test_navigation_is_not_blocked_by_unfinished_matches() {
        let mut t = started_tournament();
        assert!(t.current_round_has_unfinished_matches());
        t.next_round();
        assert_eq!(t.current_round(), 1);
    }

    #[test]
    fn test_add_player_requires_consent() {
        let mut t = started_tournament();
        assert_eq!(
            t.add_player("Sofia", RebuildConsent::NotAcknowledged),
            Err(TournamentError::RebuildConsentRequired)
        );
        assert_eq!(t.players().len(), 4);
        assert_eq!(t.rounds().len(), 3);
    }

    #[test]
    fn test_add_player_rebuilds_future_rounds_only() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "2").unwrap();
        t.finish_match(0).unwrap();
        let played = t.current_matches().to_vec();

        t.add_player("Sofia", RebuildConsent::Acknowledged).unwrap();

        // Five players: the schedule grows to five rounds, round one
        // keeps its finished match.
        assert_eq!(t.rounds().len(), 5);
        assert_eq!(t.rests_by_round().len(), 5);
        assert_eq!(t.current_matches(), played.as_slice());
        assert!(
            t.rounds()[1..]
                .iter()
                .flatten()
                .any(|m| m.players().any(|p| p == "Sofia"))
        );
        // Sofia has a zero line on the next recompute.
        t.reopen_match(0).unwrap();
        t.finish_match(0).unwrap();
        assert!(t.leaderboard().iter().any(|s| s.name == "Sofia"));
    }

    #[test]
    fn test_add_player_rejects_blank_names() {
        let mut t = started_tournament();
        assert_eq!(
            t.add_player("   ", RebuildConsent::Acknowledged),
            Err(TournamentError::EmptyPlayerName)
        );
    }

    #[test]
    fn test_finish_freezes_standings_and_stage() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        t.finish().unwrap();
        assert_eq!(t.stage(), Stage::Finished);
        assert_eq!(
            t.finish_match(0),
            Err(TournamentError::InvalidStage {
                expected: Stage::Playing,
                actual: Stage::Finished
            })
        );
        assert!(t.export_results().is_some());
    }

    #[test]
    fn test_play_again_reuses_roster() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        t.finish().unwrap();

        t.play_again().unwrap();
        assert_eq!(t.stage(), Stage::Playing);
        assert_eq!(t.current_round(), 0);
        assert_eq!(t.rounds().len(), 3);
        assert!(t.leaderboard().is_empty());
        assert!(t.rounds().iter().flatten().all(|m| !m.finished));
    }

    #[test]
    fn test_new_tournament_resets_everything() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        t.new_tournament();

        assert_eq!(t.stage(), Stage::Setup);
        assert_eq!(t.players(), vec![String::new(); 4].as_slice());
        assert_eq!(t.num_courts(), 1);
        assert!(t.rounds().is_empty());
        assert!(t.leaderboard().is_empty());
        assert!(t.rests_by_round().is_empty());
        assert_eq!(t.current_round(), 0);
    }

    #[test]
    fn test_slot_editing_rules() {
        let mut t = ready_tournament();
        assert_eq!(
            t.remove_player_slot(0),
            Err(TournamentError::MinimumSlotsReached)
        );
        t.add_player_slot().unwrap();
        t.update_player(4, "Sofia").unwrap();
        assert_eq!(t.players().len(), 5);
        t.remove_player_slot(4).unwrap();
        assert_eq!(t.players().len(), 4);
        assert_eq!(t.update_player(9, "X"), Err(TournamentError::SlotNotFound(9)));

        let mut started = started_tournament();
        assert_eq!(
            started.add_player_slot(),
            Err(TournamentError::InvalidStage {
                expected: Stage::Setup,
                actual: Stage::Playing
            })
        );
    }

    #[test]
    fn test_small_rosters_fall_back_to_one_court() {
        let mut t = ready_tournament();
        t.set_courts(2).unwrap();
        t.add_player_slot().unwrap();
        // Still five valid-or-blank slots with four names: one court.
        assert_eq!(t.num_courts(), 1);
    }

    #[test]
    fn test_two_courts_survive_with_eight_players() {
        let mut t = Tournament::new();
        for i in 0..4 {
            t.update_player(i, &format!("p{i}")).unwrap();
        }
        for i in 4..8 {
            t.add_player_slot().unwrap();
            t.update_player(i, &format!("p{i}")).unwrap();
        }
        t.set_courts(2).unwrap();
        t.add_player_slot().unwrap();
        assert_eq!(t.num_courts(), 2);

        t.start().unwrap();
        assert_eq!(t.rounds().len(), 7);
        assert_eq!(t.current_matches().len(), 2);
        assert!(t.resting_players().is_empty());
    }

    #[test]
    fn test_snapshot_round_trip_preserves_tournament() {
        let mut t = started_tournament();
        t.record_score(0, Side::A, "6").unwrap();
        t.record_score(0, Side::B, "3").unwrap();
        t.finish_match(0).unwrap();
        t.next_round();

        let json = t.snapshot().to_json().unwrap();
        let restored = Tournament::from_snapshot(TournamentSnapshot::from_json(&json));

        assert_eq!(restored.stage(), t.stage());
        assert_eq!(restored.players(), t.players());
        assert_eq!(restored.current_round(), t.current_round());
        assert_eq!(restored.rounds(), t.rounds());
        assert_eq!(restored.leaderboard(), t.leaderboard());
        assert_eq!(restored.rests_by_round(), t.rests_by_round());
    }

    #[test]
    fn test_from_snapshot_clamps_round_index() {
        let mut snapshot = TournamentSnapshot::default();
        snapshot.current_round = 99;
        let t = Tournament::from_snapshot(snapshot);
        assert_eq!(t.current_round(), 0);
    }
}
