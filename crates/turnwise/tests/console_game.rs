//! Whole games played through the console front end.

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

use turnwise::{MatchConfig, PlayError, PlayerChoice, PlayerConfig, play_game, shared_input};
use turnwise_core::{GameError, GameRecord, GameStatus, PlayerId};

/// Console writer whose clones all append to one buffer.
#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Transcript {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn two_humans() -> MatchConfig {
    MatchConfig::new(PlayerConfig::human("Ada"), PlayerConfig::human("Bo"))
}

fn cells(record: &GameRecord<usize>) -> Vec<usize> {
    record.moves().iter().map(|played| played.mv).collect()
}

#[test]
fn test_two_humans_share_one_input() {
    let transcript = Transcript::default();
    let input = shared_input(Cursor::new(b"1\n4\n2\n5\n3\n".to_vec()));

    let record = play_game(&two_humans(), input, || transcript.clone()).unwrap();

    assert_eq!(record.status(), GameStatus::WonBy(PlayerId::One));
    assert_eq!(cells(&record), vec![0, 3, 1, 4, 2]);

    let text = transcript.text();
    assert_eq!(text.matches("Ada (X), choose a cell").count(), 3);
    assert_eq!(text.matches("Bo (O), choose a cell").count(), 2);
    assert!(text.contains("X|X|X"));
    assert!(text.ends_with("Ada (X) wins!\n"));
}

#[test]
fn test_taken_cell_reprompts_same_seat() {
    let transcript = Transcript::default();
    let input = shared_input(Cursor::new(b"1\n1\n4\n2\n5\n3\n".to_vec()));

    let record = play_game(&two_humans(), input, || transcript.clone()).unwrap();

    assert_eq!(cells(&record), vec![0, 3, 1, 4, 2]);
    let text = transcript.text();
    assert!(text.contains("Top-left, cell 1 is taken. Try again."));
    assert_eq!(text.matches("Bo (O), choose a cell").count(), 3);
}

#[test]
fn test_console_text_stays_off_the_record() {
    let transcript = Transcript::default();
    let config = MatchConfig::new(
        PlayerConfig::human("Ada"),
        PlayerConfig::from_choice(PlayerChoice::First),
    );
    let input = shared_input(Cursor::new(b"5\n9\n3\n7\n".to_vec()));

    let record = play_game(&config, input, || transcript.clone()).unwrap();
    assert_eq!(cells(&record), vec![4, 0, 8, 1, 2, 3, 6]);
    assert_eq!(record.status(), GameStatus::WonBy(PlayerId::One));

    let json = serde_json::to_string_pretty(&record).unwrap();
    let parsed: GameRecord<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
    assert!(!json.contains("choose a cell"));
    assert!(transcript.text().contains("Ada (X), choose a cell"));
}

#[test]
fn test_closed_input_ends_game() {
    let input = shared_input(Cursor::new(b"1\n".to_vec()));
    let err = play_game(&two_humans(), input, std::io::sink).unwrap_err();
    assert!(matches!(err, PlayError::Game(GameError::Input(_))));
}
