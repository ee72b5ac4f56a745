use std::{
    collections::{HashMap, VecDeque},
    sync::OnceLock,
};

use gamesearch::{
    Error, SearchState,
    puzzle::{
        self, Algorithm, Direction, EightPuzzle, FifteenPuzzle, PuzzleSession, hamming,
        is_solvable, manhattan,
    },
};
use rand::{
    SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};

/// Distance to the solved 8-puzzle for every reachable state.
fn distances() -> &'static HashMap<EightPuzzle, u32> {
    static DISTANCES: OnceLock<HashMap<EightPuzzle, u32>> = OnceLock::new();
    DISTANCES.get_or_init(|| {
        let goal = EightPuzzle::solved();
        let mut dist = HashMap::from([(goal, 0)]);
        let mut queue = VecDeque::from([goal]);
        while let Some(state) = queue.pop_front() {
            let d = dist[&state];
            for (_, next) in state.neighbors() {
                dist.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    d + 1
                });
            }
        }
        dist
    })
}

fn scramble<const N: usize>(steps: usize, rng: &mut StdRng) -> puzzle::Grid<N> {
    let mut grid = puzzle::Grid::<N>::solved();
    for _ in 0..steps {
        let &dir = grid.legal_moves().choose(rng).unwrap();
        grid = grid.apply(dir).unwrap();
    }
    grid
}

#[test]
fn one_move_from_center_solves_down_then_right() {
    let start = EightPuzzle::new([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
    let goal = EightPuzzle::new([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    assert!(is_solvable(&start, &goal));

    for algorithm in Algorithm::ALL {
        let solution = puzzle::solve(&start, &goal, algorithm).unwrap();
        assert_eq!(
            solution.moves,
            vec![Direction::Down, Direction::Right],
            "{}",
            algorithm.label()
        );
    }
}

#[test]
fn all_algorithms_find_equal_length_paths() {
    let mut rng = StdRng::seed_from_u64(42);
    let goal = EightPuzzle::solved();

    for _ in 0..8 {
        let start = scramble::<3>(25, &mut rng);
        let optimal = distances()[&start] as usize;
        for (algorithm, solution) in puzzle::solve_all(&start, &goal).unwrap() {
            assert_eq!(solution.len(), optimal, "{} from\n{start}", algorithm.label());
            assert_eq!(start.apply_all(&solution.moves).unwrap(), goal);
        }
    }
}

#[test]
fn reachable_half_is_exactly_the_matching_parity_half() {
    let goal = EightPuzzle::solved();
    assert_eq!(distances().len(), 181_440, "9!/2 reachable states");
    assert!(distances().keys().all(|state| is_solvable(state, &goal)));

    let mut rng = StdRng::seed_from_u64(7);
    let mut tiles: Vec<u8> = (0..9).collect();
    for _ in 0..500 {
        tiles.shuffle(&mut rng);
        let grid = EightPuzzle::new([
            [tiles[0], tiles[1], tiles[2]],
            [tiles[3], tiles[4], tiles[5]],
            [tiles[6], tiles[7], tiles[8]],
        ])
        .unwrap();
        assert_eq!(
            is_solvable(&grid, &goal),
            distances().contains_key(&grid),
            "parity disagrees with reachability for\n{grid}"
        );
    }
}

#[test]
fn heuristics_never_overestimate() {
    let goal = EightPuzzle::solved();
    for (state, &distance) in distances() {
        let m = manhattan(state, &goal);
        let h = hamming(state, &goal);
        assert!(m <= distance, "manhattan {m} > {distance} for\n{state}");
        assert!(h <= m, "hamming {h} > manhattan {m} for\n{state}");
    }
}

#[test]
fn neighbors_are_deterministic_and_reversible() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let state = scramble::<3>(15, &mut rng);
        let first = state.neighbors();
        assert_eq!(first, state.neighbors());
        for (dir, next) in first {
            assert!(next.neighbors().contains(&(dir.opposite(), state)));
        }
    }
}

#[test]
fn unsolvable_pairs_fail_fast() {
    let start = EightPuzzle::new([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
    let result = puzzle::solve(&start, &EightPuzzle::solved(), Algorithm::Bfs);
    assert!(matches!(result, Err(Error::Unsolvable { .. })));

    let swapped: FifteenPuzzle = "1 2 3 4 / 5 6 7 8 / 9 10 11 12 / 13 15 14 0".parse().unwrap();
    let result = puzzle::solve(&swapped, &FifteenPuzzle::solved(), Algorithm::AstarManhattan);
    assert!(matches!(result, Err(Error::Unsolvable { .. })));
}

#[test]
fn fifteen_puzzle_scrambles_are_solved_optimally() {
    let mut rng = StdRng::seed_from_u64(15);
    let goal = FifteenPuzzle::solved();
    for _ in 0..5 {
        let start = scramble::<4>(12, &mut rng);
        let bfs = puzzle::solve(&start, &goal, Algorithm::Bfs).unwrap();
        let astar = puzzle::solve(&start, &goal, Algorithm::AstarManhattan).unwrap();
        assert_eq!(bfs.len(), astar.len());
        assert!(astar.expanded <= bfs.expanded);
        assert_eq!(start.apply_all(&astar.moves).unwrap(), goal);
    }
}

#[test]
fn session_replays_a_computed_solution() {
    let start: EightPuzzle = "8 6 7 / 2 5 4 / 3 0 1".parse().unwrap();
    let goal = EightPuzzle::solved();
    let solution = puzzle::solve(&start, &goal, Algorithm::AstarManhattan).unwrap();
    // Hardest 8-puzzle instances need 31 moves
    assert_eq!(solution.len(), 31);

    let mut session = PuzzleSession::new(start, goal);
    assert!(session.replay(&solution.moves).unwrap());
    assert_eq!(session.moves(), 31);
}
