use cube_core::{
    Algorithm, Color, CubeState, DEMO_SCRAMBLE, Face, Layout, MalformedAlgorithm, apply,
    facelet::FACELET_COUNT, tokenize,
};
use itertools::Itertools;

const SOLVED: &str = "bbbbbbbbbooowwwrrryyyooowwwrrryyyooowwwrrryyyggggggggg";

fn facelets(moves: &str) -> String {
    let state = apply(&CubeState::identity(), moves).unwrap();
    Layout::project(&state).facelet_string()
}

#[test_log::test]
fn test_demo_scramble() {
    assert_eq!(
        facelets(DEMO_SCRAMBLE),
        "ogwbbogggyyrwywoyrbwbooobwwbrbrygggbyrogobwryrwyrgwryo"
    );
}

#[test_log::test]
fn test_single_turns() {
    assert_eq!(
        facelets("R"),
        "bbwbbwbbwooowwgrrrbyyooowwgrrrbyyooowwgrrrbyyggyggyggy"
    );
    assert_eq!(
        facelets("U"),
        "bbbbbbooooogwwwbrryyyoogwwwbrryyyoogwwwbrryyyrrrgggggg"
    );
    assert_eq!(
        facelets("F"),
        "bbbbbbbbbooowwwrrryyyooowwwrrryyyyyyooowwwrrrggggggggg"
    );
    assert_ne!(facelets("R U"), facelets("U R"));
}

#[test_log::test]
fn test_t_permutation() {
    // Swaps the UL and UR edges and the URF and UBR corners
    let state = apply(
        &CubeState::identity(),
        "R U R' U' R' F R2 U' R' U' R U R' F'",
    )
    .unwrap();
    assert_eq!(state.edge_permutation(), [0, 3, 2, 1, 4, 5, 6, 7, 8, 9, 10, 11]);
    assert_eq!(state.corner_permutation(), [0, 2, 1, 3, 4, 5, 6, 7]);
    assert_eq!(state.corner_orientation(), [0; 8]);
    assert_eq!(state.edge_orientation(), [0; 12]);
    assert_eq!(
        Layout::project(&state).facelet_string(),
        "bbbbbbbbrooowwwgrryyyoorwwworryyyooowwwbrryyyggrgggggg"
    );
}

#[test_log::test]
fn test_centers_never_move() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..50 {
        let moves = (0..rng.usize(0..30))
            .map(|_| rng.choice(cube_core::Move::ALL).unwrap())
            .collect_vec();
        let layout = Layout::project(&Algorithm::new(moves).state());
        let colors = layout.colors_by_slot();
        for face in Face::ALL {
            assert_eq!(colors[face.center_slot()], face.color());
        }
    }
}

#[test_log::test]
fn test_every_color_nine_times() {
    let layout = Layout::project(&apply(&CubeState::identity(), DEMO_SCRAMBLE).unwrap());
    assert_eq!(layout.facelets().len(), FACELET_COUNT);
    let counts = layout.facelets().iter().counts_by(|facelet| facelet.color);
    for color in Color::ALL {
        assert_eq!(counts[&color], 9);
    }
}

#[test_log::test]
fn test_scramble_and_undo() {
    let scramble: Algorithm = DEMO_SCRAMBLE.parse().unwrap();
    let state = scramble.state().apply_algorithm(&scramble.inverse());
    assert!(state.is_solved());
    assert_eq!(Layout::project(&state).facelet_string(), SOLVED);
}

#[test_log::test]
fn test_malformed_input_is_rejected() {
    assert_eq!(
        tokenize("X").unwrap_err(),
        MalformedAlgorithm {
            offset: 0,
            found: 'X'
        }
    );
    assert!(apply(&CubeState::identity(), "R U M").is_err());
    assert!(apply(&CubeState::identity(), "R2'").is_err());
}
