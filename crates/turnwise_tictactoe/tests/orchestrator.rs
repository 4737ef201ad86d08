//! Full games of tic-tac-toe driven through the orchestrator.

use std::cell::RefCell;
use std::rc::Rc;

use turnwise_core::{
    ComputerPlayer, GameError, GameEvent, GameObserver, GameStatus, HumanPlayer, Orchestrator,
    Phase, PlayedMove, Player, PlayerId, Unbeatable,
};
use turnwise_tictactoe::{Board, Mark, Position, TicTacToe};

/// A human that replays fixed cells and counts how often it was asked.
fn scripted(cells: Vec<usize>, asked: Rc<RefCell<usize>>) -> Box<dyn Player<TicTacToe>> {
    let mut queue = cells.into_iter();
    Box::new(HumanPlayer::<TicTacToe>::new("script", move |_, _| {
        *asked.borrow_mut() += 1;
        queue
            .next()
            .ok_or_else(|| GameError::Input("script exhausted".into()))
    }))
}

#[derive(Clone, Default)]
struct Boards(Rc<RefCell<Vec<(Board, GameEvent<usize>)>>>);

impl GameObserver<TicTacToe> for Boards {
    fn on_event(&mut self, board: &Board, event: &GameEvent<usize>) {
        self.0.borrow_mut().push((board.clone(), event.clone()));
    }
}

#[test]
fn test_left_column_wins_and_halts() {
    let asked_one = Rc::new(RefCell::new(0));
    let asked_two = Rc::new(RefCell::new(0));
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        scripted(vec![0, 3, 6, 8], Rc::clone(&asked_one)),
        scripted(vec![1, 2, 5, 7], Rc::clone(&asked_two)),
    );

    let record = game.run().unwrap();
    assert_eq!(record.status(), GameStatus::WonBy(PlayerId::One));
    assert_eq!(
        record.moves(),
        &[
            PlayedMove::new(PlayerId::One, 0),
            PlayedMove::new(PlayerId::Two, 1),
            PlayedMove::new(PlayerId::One, 3),
            PlayedMove::new(PlayerId::Two, 2),
            PlayedMove::new(PlayerId::One, 6),
        ]
    );
    assert_eq!(*asked_one.borrow(), 3);
    assert_eq!(*asked_two.borrow(), 2);

    assert_eq!(game.step(), Err(GameError::GameOver));
    assert_eq!(*asked_one.borrow(), 3);
    assert_eq!(*asked_two.borrow(), 2);
    assert_eq!(game.board().to_string(), "X|O|O\n-+-+-\nX|5|6\n-+-+-\nX|8|9");
}

#[test]
fn test_status_flips_on_third_mark() {
    let unused = Rc::new(RefCell::new(0));
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        scripted(vec![0, 3, 6], Rc::clone(&unused)),
        scripted(vec![1, 2], Rc::clone(&unused)),
    );
    // Setup, then request/apply pairs for the first four moves.
    for _ in 0..9 {
        let phase = *game.step().unwrap();
        assert!(!matches!(phase, Phase::Terminal(_)));
    }
    assert_eq!(
        game.step(),
        Ok(&Phase::Applying {
            player: PlayerId::One,
            mv: 6
        })
    );
    assert_eq!(
        game.step(),
        Ok(&Phase::Terminal(GameStatus::WonBy(PlayerId::One)))
    );
}

#[test]
fn test_illegal_human_moves_are_reprompted() {
    let events = Boards::default();
    let asked = Rc::new(RefCell::new(0));
    // Player two first picks the occupied centre, then a cell off the board.
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        scripted(vec![4, 1, 2], Rc::clone(&asked)),
        scripted(vec![4, 9, 0, 8], Rc::clone(&asked)),
    )
    .with_observer(events.clone());

    game.step().unwrap();
    for _ in 0..2 {
        game.step().unwrap();
    }
    assert_eq!(game.phase(), &Phase::AwaitingMove(PlayerId::Two));
    game.step().unwrap();
    assert_eq!(game.phase(), &Phase::AwaitingMove(PlayerId::Two));
    game.step().unwrap();
    assert_eq!(game.phase(), &Phase::AwaitingMove(PlayerId::Two));
    game.step().unwrap();
    assert_eq!(
        game.phase(),
        &Phase::Applying {
            player: PlayerId::Two,
            mv: 0
        }
    );

    let rejections: Vec<_> = events
        .0
        .borrow()
        .iter()
        .filter_map(|(board, event)| match event {
            GameEvent::MoveRejected { reason, .. } => Some((board.occupied(), reason.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejections,
        vec![
            (1, GameError::OccupiedCell { index: 4 }),
            (1, GameError::OutOfRange { index: 9 }),
        ]
    );
    assert_eq!(game.board().count(Mark::O), 0);
}

/// A human that reads position labels, as typed at a prompt.
fn labelled(labels: &[&'static str]) -> Box<dyn Player<TicTacToe>> {
    let mut queue = labels.to_vec().into_iter();
    Box::new(HumanPlayer::<TicTacToe>::new("labels", move |_, _| {
        let label = queue
            .next()
            .ok_or_else(|| GameError::Input("no more labels".into()))?;
        Position::from_label_or_number(label)
            .map(Position::to_index)
            .ok_or_else(|| GameError::Input(format!("unknown position: {label}")))
    }))
}

#[test]
fn test_labels_drive_a_game() {
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        labelled(&["centre", "Top Right", "bottom-left"]),
        labelled(&["top-left", "1"]),
    );
    let record = game.run().unwrap();
    assert_eq!(record.status(), GameStatus::WonBy(PlayerId::One));
    let cells: Vec<usize> = record.moves().iter().map(|m| m.mv).collect();
    assert_eq!(cells, vec![4, 0, 2, 1, 6]);
}

#[test]
fn test_human_loses_to_unbeatable() {
    let asked = Rc::new(RefCell::new(0));
    // Human as O answers the opening corner with an edge and keeps ignoring threats.
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        Box::new(ComputerPlayer::new("engine", Unbeatable::new())),
        scripted(vec![1, 2, 5, 7], asked),
    );
    let record = game.run().unwrap();
    assert_eq!(record.status(), GameStatus::WonBy(PlayerId::One));
}

#[test]
fn test_observer_sees_board_after_each_move() {
    let events = Boards::default();
    let asked = Rc::new(RefCell::new(0));
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        scripted(vec![0, 3, 6], Rc::clone(&asked)),
        scripted(vec![1, 2], asked),
    )
    .with_observer(events.clone());
    game.run().unwrap();

    let log = events.0.borrow();
    let placed: Vec<usize> = log
        .iter()
        .filter(|(_, e)| matches!(e, GameEvent::MovePlayed(_)))
        .map(|(board, _)| board.occupied())
        .collect();
    assert_eq!(placed, vec![1, 2, 3, 4, 5]);
    assert!(matches!(
        log.last(),
        Some((_, GameEvent::Finished(GameStatus::WonBy(PlayerId::One))))
    ));
}
