//! Algebraic properties of the move engine

mod common;

use common::{pieces, CORNERS, EDGES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rubik::notation::parse_sequence;
use rubik::{moves, validate, Face, Facelets, LabelScheme, Scramble};

/// A handful of reproducible non-trivial starting states
fn starting_states() -> Vec<Facelets> {
    let mut states = vec![Facelets::solved()];
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        states.push(Scramble::random(&mut rng, 20).into_cube());
    }
    states
}

#[test]
fn test_four_quarter_turns_are_identity() {
    for start in starting_states() {
        for face in Face::iter() {
            let mut cube = start.clone();
            for _ in 0..4 {
                moves::turn(&mut cube, face);
            }
            assert_eq!(cube, start, "{face}4 changed the cube");
        }
    }
}

#[test]
fn test_prime_is_three_clockwise_turns() {
    for start in starting_states() {
        for face in Face::iter() {
            let mut primed = start.clone();
            moves::turn_prime(&mut primed, face);

            let mut thrice = start.clone();
            for _ in 0..3 {
                moves::turn(&mut thrice, face);
            }
            assert_eq!(primed, thrice, "{face}' differs from {face}3");
        }
    }
}

#[test]
fn test_prime_undoes_clockwise() {
    for start in starting_states() {
        for face in Face::iter() {
            let mut cube = start.clone();
            moves::turn(&mut cube, face);
            moves::turn_prime(&mut cube, face);
            assert_eq!(cube, start);
        }
    }
}

#[test]
fn test_single_move_keeps_counts_and_unsolves() {
    for face in Face::iter() {
        for prime in [false, true] {
            let mut cube = Facelets::solved();
            if prime {
                moves::turn_prime(&mut cube, face);
            } else {
                moves::turn(&mut cube, face);
            }
            assert!(validate::validate(&cube));
            assert!(!cube.is_solved());
        }
    }
}

#[test]
fn test_sequences_that_compose_to_identity() {
    let cases = [
        ("R U R' U'", 6),
        ("R U", 105),
        ("F2 B2", 2),
        ("U D'", 4),
    ];
    for (sequence, order) in cases {
        let moves = parse_sequence(sequence).unwrap();
        let mut cube = Facelets::solved();
        for i in 1..=order {
            cube.apply_sequence(&moves);
            if i < order {
                assert!(!cube.is_solved(), "({sequence})^{i} should not be solved");
            }
        }
        assert!(cube.is_solved(), "({sequence})^{order} should be solved");
    }
}

#[test]
fn test_pieces_stay_intact() {
    let solved = LabelScheme::Fixed.encode(&Facelets::solved()).unwrap();
    let solved_corners = pieces(solved.as_str(), &CORNERS);
    let solved_edges = pieces(solved.as_str(), &EDGES);

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let scramble = Scramble::random(&mut rng, 30);
        let facelets = LabelScheme::Fixed.encode(scramble.cube()).unwrap();

        assert_eq!(
            pieces(facelets.as_str(), &CORNERS),
            solved_corners,
            "corner split apart by {}",
            scramble.sequence()
        );
        assert_eq!(
            pieces(facelets.as_str(), &EDGES),
            solved_edges,
            "edge split apart by {}",
            scramble.sequence()
        );
    }
}

#[test]
fn test_centers_never_move() {
    for start in starting_states() {
        for face in Face::iter() {
            let mut cube = start.clone();
            moves::turn(&mut cube, face);
            for f in Face::iter() {
                assert_eq!(cube.center(f), start.center(f));
            }
        }
    }
}

#[test]
fn test_label_schemes_agree_on_reachable_states() {
    for start in starting_states() {
        assert_eq!(
            LabelScheme::Center.encode(&start).unwrap(),
            LabelScheme::Fixed.encode(&start).unwrap()
        );
    }
}

#[test]
fn test_validator_rejects_ten_white_eight_yellow() {
    let mut cube = Facelets::solved();
    cube.face_mut(Face::Down)[2][2] = rubik::Color::White;
    assert!(!validate::validate(&cube));
    assert!(validate::check(&cube).is_err());
}

#[test]
fn test_fixed_encoding_of_solved_cube() {
    assert_eq!(
        LabelScheme::Fixed
            .encode(&Facelets::solved())
            .unwrap()
            .as_str(),
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
    );
}
