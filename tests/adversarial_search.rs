use std::collections::{HashSet, VecDeque};

use gamesearch::{
    Error,
    adversarial::{
        AdversarialGame, MoveSelector, SearchEngine, Strategy, best_move, compare_strategies,
    },
    app::EngineConfig,
    tictactoe::{Board, Player, Position, TicTacToe},
};

/// Every position reachable from the empty board where someone still has to move.
fn open_positions() -> Vec<TicTacToe> {
    let mut seen = HashSet::from([TicTacToe::new()]);
    let mut queue = VecDeque::from([TicTacToe::new()]);
    let mut open = Vec::new();
    while let Some(board) = queue.pop_front() {
        if board.is_terminal() {
            continue;
        }
        open.push(board);
        for pos in board.empty_positions() {
            let next = board.make_move(pos).expect("empty cell is playable");
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    open
}

#[test]
fn blocking_move_is_found_by_both_strategies() {
    let mut board =
        TicTacToe::from_rows([[" ", "X", "O"], ["X", "O", " "], [" ", " ", " "]]).unwrap();
    assert_eq!(board.to_move, Player::X);

    let comparison = compare_strategies(&mut board, Player::X, Player::O, None).unwrap();
    assert!(comparison.agree());
    assert_eq!(comparison.minimax.mv, Position::new(2, 0));
    assert_eq!(comparison.minimax.mv.label(3), 7);
    assert_eq!(comparison.minimax.score, 0);
    assert!(
        comparison.alpha_beta.nodes_visited < comparison.minimax.nodes_visited,
        "alpha-beta {} vs minimax {}",
        comparison.alpha_beta.nodes_visited,
        comparison.minimax.nodes_visited
    );
}

#[test]
fn empty_board_opening_is_random_and_unsearched() {
    let mut seen = HashSet::new();
    for seed in 0..200 {
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let config = EngineConfig::new(strategy).with_seed(seed);
            let decision = MoveSelector::new(config)
                .select(&mut TicTacToe::new(), Player::X, Player::O)
                .unwrap();
            assert!(decision.random_opening);
            assert_eq!(decision.nodes_visited, 0);
            seen.insert(decision.mv);
        }
    }
    assert_eq!(seen.len(), 9, "every cell should come up as an opening");
}

#[test]
fn full_drawn_board_scores_zero_without_recursing() {
    let mut board = TicTacToe::from_string("XOX XOO OXX").unwrap();
    assert!(board.is_draw());

    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        let mut engine = SearchEngine::new(strategy, None);
        assert_eq!(engine.evaluate(&mut board, Player::X, Player::O, true), 0);
        assert_eq!(engine.nodes_visited(), 1);
    }

    let mut selector = MoveSelector::new(EngineConfig::default());
    assert!(matches!(
        selector.select(&mut board, Player::X, Player::O),
        Err(Error::NoValidMoves)
    ));
}

#[test]
fn pruning_never_changes_the_decision() {
    let positions = open_positions();
    assert_eq!(positions.len(), 4_520);

    for board in positions.into_iter().filter(|b| !b.is_untouched()) {
        let mut scratch = board;
        let player = board.to_move;
        let minimax = best_move(&mut scratch, player, player.opponent(), Strategy::Minimax, None).unwrap();
        let pruned =
            best_move(&mut scratch, player, player.opponent(), Strategy::AlphaBeta, None).unwrap();

        assert_eq!(scratch, board, "search must restore the board");
        assert_eq!(minimax.mv, pruned.mv, "move differs on\n{board}");
        assert_eq!(minimax.score, pruned.score, "score differs on\n{board}");
        assert!(pruned.nodes_visited <= minimax.nodes_visited);
    }
}

#[test]
fn scores_are_symmetric_between_players() {
    // X to move with a win available; from O's side the same line is a loss
    let mut board = TicTacToe::from_string("XX. OO. ...").unwrap();
    let mut engine = SearchEngine::new(Strategy::Minimax, None);
    let for_x = engine.evaluate(&mut board, Player::X, Player::O, true);
    let for_o = engine.evaluate(&mut board, Player::O, Player::X, false);
    assert_eq!(for_x, 9);
    assert_eq!(for_o, -9);
}

#[test]
fn four_by_four_search_requires_and_respects_a_depth_limit() {
    let mut board = Board::<4>::from_string("XXX. OOO. .... ....").unwrap();
    assert!(matches!(
        best_move(&mut board, Player::X, Player::O, Strategy::AlphaBeta, None),
        Err(Error::InvalidConfiguration { .. })
    ));

    let decision =
        best_move(&mut board, Player::X, Player::O, Strategy::AlphaBeta, Some(2)).unwrap();
    assert_eq!(decision.mv, Position::new(0, 3));
    assert_eq!(decision.score, 17);
}
