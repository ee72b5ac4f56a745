use gamesearch::{
    adversarial::{SearchEngine, Strategy, count_nodes},
    tictactoe::{Player, TicTacToe},
};

/// Sizes of the full game tree below a position, counted by plain expansion.
#[derive(Debug, Default)]
struct TreeSize {
    nodes: u64,
    games: u64,
    x_wins: u64,
    o_wins: u64,
}

impl TreeSize {
    fn below(board: &TicTacToe) -> Self {
        let mut size = Self::default();
        size.walk(board);
        size.nodes -= 1;
        size
    }

    fn walk(&mut self, board: &TicTacToe) {
        self.nodes += 1;
        if board.is_terminal() {
            self.games += 1;
            match board.winner() {
                Some(Player::X) => self.x_wins += 1,
                Some(Player::O) => self.o_wins += 1,
                None => {}
            }
            return;
        }
        for pos in board.empty_positions() {
            self.walk(&board.make_move(pos).expect("empty cell is playable"));
        }
    }
}

#[test]
fn minimax_visits_the_whole_game_tree() {
    let tree = TreeSize::below(&TicTacToe::new());
    assert_eq!(tree.games, 255_168);
    assert_eq!(tree.x_wins, 131_184);
    assert_eq!(tree.o_wins, 77_904);
    assert_eq!(tree.nodes, 549_945);

    // The empty root is not itself searched, so every other node is visited once
    let nodes = count_nodes(&mut TicTacToe::new(), Player::X, Player::O, Strategy::Minimax).unwrap();
    assert_eq!(nodes, tree.nodes);

    let pruned = count_nodes(&mut TicTacToe::new(), Player::X, Player::O, Strategy::AlphaBeta).unwrap();
    assert!(pruned < nodes / 4, "alpha-beta visited {pruned}");
}

#[test]
fn unpruned_search_matches_expansion_from_midgame_positions() {
    for text in [".XO XO. ...", "X.. .O. ...", "XO. ... ...", "XOX .O. ..."] {
        let board = TicTacToe::from_string(text).unwrap();
        let player = board.to_move;

        let mut scratch = board;
        let mut engine = SearchEngine::new(Strategy::Minimax, None);
        engine.evaluate(&mut scratch, player, player.opponent(), true);

        // evaluate counts the position it starts from
        assert_eq!(engine.nodes_visited(), TreeSize::below(&board).nodes + 1, "{text}");
        assert_eq!(scratch, board);
    }
}
