//! Step-by-step navigation through a recorded session

use std::path::Path;

use crate::board::{Board, Player};
use crate::error::RecordError;
use crate::game::PlayerMode;
use crate::record::GameRecord;
use crate::rules::{self, Verdict};

/// Cursor over the boards of a [`GameRecord`].
///
/// Navigation crosses game boundaries: `next` on the last board of a game
/// moves to the first board of the following one.
#[derive(Debug, Clone)]
pub struct Replay {
    record: GameRecord,
    game: usize,
    index: usize,
}

impl Replay {
    pub fn new(mut record: GameRecord) -> Result<Self, RecordError> {
        record.games.retain(|game| game.len() > 1);
        if record.games.is_empty() {
            return Err(RecordError::Empty);
        }
        Ok(Self {
            record,
            game: 0,
            index: 0,
        })
    }

    pub fn load(path: &Path) -> Result<Self, RecordError> {
        Self::new(GameRecord::load(path)?)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.record.games[self.game][self.index]
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.record.games[self.game].len()
            || self.game + 1 < self.record.games.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0 || self.game > 0
    }

    /// Advance one board; `None` at the end of the record
    pub fn next(&mut self) -> Option<&Board> {
        if self.index + 1 < self.record.games[self.game].len() {
            self.index += 1;
        } else if self.game + 1 < self.record.games.len() {
            self.game += 1;
            self.index = 0;
        } else {
            return None;
        }
        Some(self.board())
    }

    /// Go back one board; `None` at the start of the record
    pub fn previous(&mut self) -> Option<&Board> {
        if self.index > 0 {
            self.index -= 1;
        } else if self.game > 0 {
            self.game -= 1;
            self.index = self.record.games[self.game].len() - 1;
        } else {
            return None;
        }
        Some(self.board())
    }

    /// Zero-based game number
    #[inline]
    pub fn game_index(&self) -> usize {
        self.game
    }

    /// Zero-based board number within the game
    #[inline]
    pub fn move_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn game_count(&self) -> usize {
        self.record.games.len()
    }

    /// Player to move at the shown board
    pub fn current_player(&self) -> Player {
        if self.index % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn verdict(&self) -> Verdict {
        rules::evaluate(self.board(), self.record.win_threshold)
    }

    /// Points of `player` up to the shown board.
    ///
    /// Earlier games count by the verdict of their final board; the current
    /// game counts once its shown board is decided.
    pub fn score(&self, player: Player) -> u32 {
        let earlier = self.record.games[..self.game]
            .iter()
            .filter_map(|game| game.last())
            .map(|board| rules::evaluate(board, self.record.win_threshold));

        earlier
            .chain(std::iter::once(self.verdict()))
            .map(|verdict| points(verdict, player))
            .sum()
    }

    #[inline]
    pub fn mode(&self, player: Player) -> PlayerMode {
        self.record.modes[player.index()]
    }

    #[inline]
    pub fn name(&self, player: Player) -> &str {
        &self.record.names[player.index()]
    }
}

/// Points a finished verdict awards to `player`: a win scores for the winner,
/// a draw scores for both
fn points(verdict: Verdict, player: Player) -> u32 {
    match verdict {
        Verdict::Win(winner) if winner == player => 1,
        Verdict::Draw => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    /// Game 0: One completes row 0 in seven moves. Game 1: two moves, unfinished.
    fn record() -> GameRecord {
        let script = [
            (Move::place(0, 3), Player::One),
            (Move::place(1, 3), Player::Two),
            (Move::place(0, 4), Player::One),
            (Move::place(1, 4), Player::Two),
            (Move::place(0, 5), Player::One),
            (Move::place(2, 4), Player::Two),
            (Move::place(0, 6), Player::One),
        ];
        let mut board = Board::new(4);
        let mut first = vec![board.clone()];
        for (mv, player) in script {
            first.push(board.apply(mv, player).clone());
        }

        let mut board = Board::new(4);
        let mut second = vec![board.clone()];
        second.push(board.apply(Move::place(3, 3), Player::One).clone());

        GameRecord {
            win_threshold: 4,
            modes: [PlayerMode::Human, PlayerMode::Human],
            names: ["Ann".to_string(), "Ben".to_string()],
            games: vec![first, second],
        }
    }

    #[test]
    fn test_navigation_crosses_games() {
        let mut replay = Replay::new(record()).unwrap();
        assert!(!replay.has_previous());
        assert_eq!(replay.previous(), None);

        for _ in 0..7 {
            assert!(replay.next().is_some());
        }
        assert_eq!((replay.game_index(), replay.move_index()), (0, 7));

        replay.next().unwrap();
        assert_eq!((replay.game_index(), replay.move_index()), (1, 0));
        assert_eq!(replay.board(), &Board::new(4));

        replay.next().unwrap();
        assert!(!replay.has_next());
        assert_eq!(replay.next(), None);

        replay.previous().unwrap();
        replay.previous().unwrap();
        assert_eq!((replay.game_index(), replay.move_index()), (0, 7));
    }

    #[test]
    fn test_verdict_and_running_score() {
        let mut replay = Replay::new(record()).unwrap();
        assert_eq!(replay.verdict(), Verdict::Ongoing);
        assert_eq!(replay.score(Player::One), 0);

        while replay.move_index() < 7 {
            replay.next();
        }
        assert_eq!(replay.verdict(), Verdict::Win(Player::One));
        assert_eq!(replay.score(Player::One), 1);
        assert_eq!(replay.score(Player::Two), 0);

        // The finished game keeps counting in the next one
        replay.next();
        assert_eq!(replay.verdict(), Verdict::Ongoing);
        assert_eq!(replay.score(Player::One), 1);
    }

    #[test]
    fn test_current_player_alternates() {
        let mut replay = Replay::new(record()).unwrap();
        assert_eq!(replay.current_player(), Player::One);
        replay.next();
        assert_eq!(replay.current_player(), Player::Two);
        replay.next();
        assert_eq!(replay.current_player(), Player::One);
    }

    #[test]
    fn test_players_and_empty_record() {
        let replay = Replay::new(record()).unwrap();
        assert_eq!(replay.name(Player::Two), "Ben");
        assert_eq!(replay.mode(Player::One), PlayerMode::Human);
        assert_eq!(replay.game_count(), 2);

        let mut empty = record();
        empty.games = vec![Vec::new(), Vec::new()];
        assert!(matches!(Replay::new(empty), Err(RecordError::Empty)));
    }

    #[test]
    fn test_load_refuses_misshapen_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.json");
        let mut bad = serde_json::to_value(record()).unwrap();
        bad["games"][0][1]["cells"] = serde_json::json!(["Empty", "Empty", "Empty"]);
        std::fs::write(&path, bad.to_string()).unwrap();

        assert!(matches!(Replay::load(&path), Err(RecordError::Json(_))));
    }

    #[test]
    fn test_single_board_games_skipped() {
        let mut short = record();
        short.games.insert(0, vec![Board::new(4)]);
        let replay = Replay::new(short).unwrap();
        assert_eq!(replay.game_count(), 2);
        assert_eq!(replay.score(Player::One), 0);
    }

    #[test]
    fn test_draw_scores_both() {
        assert_eq!(points(Verdict::Draw, Player::One), 1);
        assert_eq!(points(Verdict::Draw, Player::Two), 1);
        assert_eq!(points(Verdict::Win(Player::Two), Player::One), 0);
        assert_eq!(points(Verdict::Ongoing, Player::Two), 0);
    }
}
