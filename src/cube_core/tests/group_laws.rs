use cube_core::{Algorithm, CubeState, Direction, Face, Move, moves};
use itertools::Itertools;
use log::info;

fn random_state(rng: &mut fastrand::Rng, move_count: usize) -> CubeState {
    (0..move_count).fold(CubeState::identity(), |state, _| {
        state.apply_move(rng.choice(Move::ALL).unwrap())
    })
}

fn random_states(seed: u64, count: usize) -> Vec<CubeState> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| random_state(&mut rng, 25)).collect_vec()
}

fn apply(state: &CubeState, moves: &str) -> CubeState {
    state.apply_algorithm(&moves.parse::<Algorithm>().unwrap())
}

#[test_log::test]
fn test_identity_law() {
    let identity = CubeState::identity();
    for state in random_states(1, 20) {
        assert_eq!(state.compose(&identity), state);
        assert_eq!(identity.compose(&state), state);
    }
}

#[test_log::test]
fn test_order_four() {
    for face in Face::ALL {
        let quarter = Move::new(face, Direction::Normal).state();
        let power = quarter.compose(quarter).compose(quarter).compose(quarter);
        assert!(power.is_solved(), "{face} to the fourth is not solved");
        assert_eq!(quarter.order(), Some(4));
    }
}

#[test_log::test]
fn test_derived_moves() {
    for face in Face::ALL {
        let normal = Move::new(face, Direction::Normal).state();
        let double = Move::new(face, Direction::Double).state();
        let prime = Move::new(face, Direction::Prime).state();
        assert_eq!(*double, normal.compose(normal));
        assert_eq!(*prime, normal.inverse());
        assert_eq!(double.order(), Some(2));
    }
}

#[test_log::test]
fn test_inverse_law() {
    for start in random_states(2, 10) {
        for move_ in Move::ALL {
            let there_and_back = start.apply_move(move_).apply_move(move_.inverse());
            assert_eq!(there_and_back, start, "{move_} then its inverse moved the cube");
        }
        assert!(start.compose(&start.inverse()).is_solved());
        assert!(start.inverse().compose(&start).is_solved());
    }
}

#[test_log::test]
fn test_closure() {
    let states = random_states(3, 12);
    for (a, b) in states.iter().tuple_combinations() {
        let c = a.compose(b);
        assert!(c.is_valid());
        assert!(c.corner_orientation().iter().all(|&twist| twist < 3));
        assert!(c.edge_orientation().iter().all(|&flip| flip < 2));
    }
}

#[test_log::test]
fn test_associativity() {
    let states = random_states(4, 8);
    for (a, b, c) in states.iter().tuple_combinations() {
        assert_eq!(a.compose(b).compose(c), a.compose(&b.compose(c)));
    }
}

#[test_log::test]
fn test_not_commutative() {
    let r = Move::new(Face::R, Direction::Normal).state();
    let u = Move::new(Face::U, Direction::Normal).state();
    assert_ne!(r.compose(u), u.compose(r));

    // Opposite faces commute
    let d2 = Move::new(Face::D, Direction::Double).state();
    assert_eq!(u.compose(d2), d2.compose(u));
}

#[test_log::test]
fn test_composition_does_not_mutate() {
    let a = apply(&CubeState::identity(), "R U");
    let b = apply(&CubeState::identity(), "F' L2");
    let (a_before, b_before) = (a, b);
    let _ = a.compose(&b);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test_log::test]
fn test_fold_is_left_to_right() {
    let algorithm: Algorithm = "R U".parse().unwrap();
    let r = Move::new(Face::R, Direction::Normal).state();
    let u = Move::new(Face::U, Direction::Normal).state();
    assert_eq!(algorithm.state(), r.compose(u));
    assert_ne!(algorithm.state(), u.compose(r));
}

#[test_log::test]
fn test_many_compositions() {
    let solved = CubeState::identity();
    let r_u = apply(&solved, "R U");
    assert_eq!(r_u.order(), Some(105));

    let also_solved = (0..105).fold(solved, |state, _| state.compose(&r_u));
    assert_eq!(also_solved, solved);

    info!("R U has order 105");
}

#[test_log::test]
fn test_expanded_moves() {
    let solved = CubeState::identity();
    let also_solved = (0..10).fold(solved, |state, _| {
        apply(&state, "R R' D2 D2 U U U2 F B' F' B")
    });
    assert!(also_solved.is_solved());
}

#[test_log::test]
fn test_known_orders() {
    assert_eq!(apply(&CubeState::identity(), "R U R' U'").order(), Some(6));
    assert_eq!(CubeState::identity().order(), Some(1));
    assert_eq!(
        CubeState::new_unchecked([0; 8], [0; 8], [0; 12], [0; 12]).order(),
        None
    );
}

#[test_log::test]
fn test_table_is_shared() {
    assert!(std::ptr::eq(moves(), moves()));
    let rebuilt = cube_core::build_move_table();
    for (move_, state) in moves().iter() {
        assert_eq!(rebuilt.get(move_), state);
        assert!(state.is_valid());
    }
}
