//! Terminal front end: a human seat reading from a text stream and an
//! observer that prints the board as the game unfolds.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use tracing::{debug, warn};
use turnwise_core::{GameError, GameEvent, GameObserver, GameStatus, HumanPlayer, PlayerId};
use turnwise_tictactoe::{Board, Mark, Position, TicTacToe};

/// What a line of console input means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A board index, possibly off the board; legality is the orchestrator's call.
    Cell(usize),
    /// Something that names no cell at all.
    Unrecognized,
}

/// Interprets a console line.
///
/// Numbers are 1-based to match the printed board, so `1` is the top-left
/// cell and `10` maps to index 9, which the rules reject as out of range.
/// Anything else is looked up as a position label.
pub fn parse_entry(line: &str) -> Entry {
    let line = line.trim();
    if let Ok(number) = line.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => Entry::Cell(index),
            None => Entry::Unrecognized,
        };
    }
    match Position::from_label_or_number(line) {
        Some(position) => Entry::Cell(position.to_index()),
        None => Entry::Unrecognized,
    }
}

/// Line input shared by every console seat in a game.
///
/// Both seats of a human-vs-human game read from the same stream, so the
/// reader lives behind one `RefCell` and is borrowed only for each line.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Wraps `reader` so several seats can take turns reading from it.
pub fn shared_input<R: BufRead>(reader: R) -> SharedInput<R> {
    Rc::new(RefCell::new(reader))
}

/// Builds a human seat that prompts on `output` and reads moves from `input`.
///
/// Unrecognized lines are answered locally and the prompt repeats; a move the
/// rules refuse is reported through the rejection hook. End of input is an
/// [`GameError::Input`] error.
pub fn console_player<R, W>(
    name: impl Into<String>,
    input: SharedInput<R>,
    output: W,
) -> HumanPlayer<TicTacToe>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let name = name.into();
    let output = Rc::new(RefCell::new(output));
    let prompt_out = Rc::clone(&output);
    let prompt_name = name.clone();

    let source = move |board: &Board, seat: PlayerId| -> Result<usize, GameError> {
        let mark = Mark::from(seat);
        let open = Position::valid_moves(board)
            .into_iter()
            .map(|pos| (pos.to_index() + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        loop {
            {
                let mut out = prompt_out.borrow_mut();
                write!(out, "{} ({}), choose a cell [{}]: ", prompt_name, mark, open)
                    .and_then(|_| out.flush())
                    .map_err(|e| GameError::Input(e.to_string()))?;
            }

            let mut line = String::new();
            let read = input
                .borrow_mut()
                .read_line(&mut line)
                .map_err(|e| GameError::Input(e.to_string()))?;
            if read == 0 {
                return Err(GameError::Input("input closed".to_string()));
            }

            match parse_entry(&line) {
                Entry::Cell(index) => {
                    debug!(%seat, index, "Console move entered");
                    return Ok(index);
                }
                Entry::Unrecognized => {
                    writeln!(
                        prompt_out.borrow_mut(),
                        "'{}' is not a cell. Type 1-9 or a name such as \"top-left\".",
                        line.trim()
                    )
                    .map_err(|e| GameError::Input(e.to_string()))?;
                }
            }
        }
    };

    HumanPlayer::new(name, source).with_rejection_hook(move |index: usize, reason: &GameError| {
        let notice = match reason {
            GameError::OccupiedCell { .. } => format!("{} is taken", describe(index)),
            GameError::OutOfRange { .. } => format!("There is no cell {}", index + 1),
            other => other.to_string(),
        };
        if let Err(e) = writeln!(output.borrow_mut(), "{}. Try again.", notice) {
            warn!(error = %e, "Failed to write rejection notice");
        }
    })
}

fn describe(index: usize) -> String {
    match Position::from_index(index) {
        Some(position) => format!("{}, cell {}", position.label(), index + 1),
        None => format!("cell {}", index + 1),
    }
}

/// Prints the board and a line of narration for each game event.
pub struct BoardPrinter<W: Write> {
    out: W,
    names: [String; 2],
}

impl<W: Write> BoardPrinter<W> {
    /// Creates a printer that refers to the seats by `names`.
    pub fn new(out: W, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            out,
            names: [player_one.into(), player_two.into()],
        }
    }

    fn seat(&self, player: PlayerId) -> String {
        format!("{} ({})", self.names[player.index()], Mark::from(player))
    }

    fn render(&mut self, board: &Board, event: &GameEvent<usize>) -> std::io::Result<()> {
        match event {
            GameEvent::Started => writeln!(self.out, "{}\n", board)?,
            GameEvent::MoveRequested(_) | GameEvent::MoveRejected { .. } => {}
            GameEvent::MovePlayed(played) => {
                let seat = self.seat(played.player);
                writeln!(self.out, "{} plays {}\n{}\n", seat, describe(played.mv), board)?;
            }
            GameEvent::Finished(status) => {
                let line = match status {
                    GameStatus::WonBy(player) => format!("{} wins!", self.seat(*player)),
                    GameStatus::Draw => "It's a draw.".to_string(),
                    GameStatus::InProgress => status.to_string(),
                };
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> GameObserver<TicTacToe> for BoardPrinter<W> {
    fn on_event(&mut self, board: &Board, event: &GameEvent<usize>) {
        if let Err(e) = self.render(board, event) {
            warn!(error = %e, "Failed to print game event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use turnwise_core::{GameRules, Player};

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("1"), Entry::Cell(0));
        assert_eq!(parse_entry(" 9 \n"), Entry::Cell(8));
        assert_eq!(parse_entry("10"), Entry::Cell(9));
        assert_eq!(parse_entry("0"), Entry::Unrecognized);
        assert_eq!(parse_entry("bottom right"), Entry::Cell(8));
        assert_eq!(parse_entry("Centre"), Entry::Cell(4));
        assert_eq!(parse_entry("somewhere"), Entry::Unrecognized);
    }

    #[test]
    fn test_console_player_skips_garbage() {
        let out = Shared::default();
        let input = shared_input(Cursor::new(b"banana\n0\ntop-right\n".to_vec()));
        let mut player = console_player("Ada", input, out.clone());
        let rules = TicTacToe::new();
        let board = rules.new_board();

        assert_eq!(player.take_turn(&rules, &board, PlayerId::One), Ok(2));
        let text = out.text();
        assert_eq!(text.matches("Ada (X), choose a cell [1 2 3 4 5 6 7 8 9]: ").count(), 3);
        assert!(text.contains("'banana' is not a cell"));
        assert!(text.contains("'0' is not a cell"));

        assert!(matches!(
            player.take_turn(&rules, &board, PlayerId::One),
            Err(GameError::Input(_))
        ));
    }

    #[test]
    fn test_rejection_notice_printed() {
        let out = Shared::default();
        let mut player = console_player("Ada", shared_input(Cursor::new(Vec::new())), out.clone());
        player.on_rejected(4, &GameError::OccupiedCell { index: 4 });
        player.on_rejected(9, &GameError::OutOfRange { index: 9 });
        assert_eq!(
            out.text(),
            "Center, cell 5 is taken. Try again.\nThere is no cell 10. Try again.\n"
        );
    }

    #[test]
    fn test_prompt_lists_open_cells() {
        let out = Shared::default();
        let input = shared_input(Cursor::new(b"2\n".to_vec()));
        let mut player = console_player("Bo", input, out.clone());
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(player.take_turn(&TicTacToe::new(), &board, PlayerId::One), Ok(1));
        assert_eq!(out.text(), "Bo (X), choose a cell [2 3 4 6 7 8 9]: ");
    }

    #[test]
    fn test_seats_take_turns_on_one_input() {
        let rules = TicTacToe::new();
        let board = rules.new_board();
        let input = shared_input(Cursor::new(b"1\n5\n9\n".to_vec()));
        let mut one = console_player("A", Rc::clone(&input), std::io::sink());
        let mut two = console_player("B", input, std::io::sink());
        assert_eq!(one.take_turn(&rules, &board, PlayerId::One), Ok(0));
        assert_eq!(two.take_turn(&rules, &board, PlayerId::Two), Ok(4));
        assert_eq!(one.take_turn(&rules, &board, PlayerId::One), Ok(8));
    }

    #[test]
    fn test_printer_narrates_game() {
        let out = Shared::default();
        let mut printer = BoardPrinter::new(out.clone(), "Ada", "Bot");
        let board: Board = "X.. ... ...".parse().unwrap();
        printer.on_event(
            &board,
            &GameEvent::MovePlayed(turnwise_core::PlayedMove::new(PlayerId::One, 0)),
        );
        printer.on_event(&board, &GameEvent::Finished(GameStatus::WonBy(PlayerId::Two)));
        let text = out.text();
        assert!(text.starts_with("Ada (X) plays Top-left, cell 1\nX|2|3"));
        assert!(text.ends_with("Bot (O) wins!\n"));
    }
}
