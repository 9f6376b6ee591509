//! Quarter-turn move engine.
//!
//! A clockwise quarter turn of a face does two things: the face's own grid
//! rotates 90 degrees clockwise, and the four three-sticker bands bordering
//! it on the neighbouring faces shift one step around the face. The band
//! tables below list, for each face, the four bands in the order they cycle:
//! band `k` receives the stickers of band `k + 1`, and the last band receives
//! the old contents of band 0. Position `i` in one band always feeds position
//! `i` in the next, which is what keeps the three stickers of each corner and
//! edge piece together.
//!
//! Counter-clockwise turns are three clockwise turns. Nothing here validates
//! the cube; turning an invalid cube yields another invalid cube.

use crate::{Color, Face, Facelets};

/// A sticker position: face, row, column
pub type Position = (Face, usize, usize);

/// Three stickers along one edge of a face
pub type Band = [Position; 3];

const fn row(face: Face, r: usize) -> Band {
    [(face, r, 0), (face, r, 1), (face, r, 2)]
}

const fn row_rev(face: Face, r: usize) -> Band {
    [(face, r, 2), (face, r, 1), (face, r, 0)]
}

const fn col(face: Face, c: usize) -> Band {
    [(face, 0, c), (face, 1, c), (face, 2, c)]
}

const fn col_rev(face: Face, c: usize) -> Band {
    [(face, 2, c), (face, 1, c), (face, 0, c)]
}

const UP_BANDS: [Band; 4] = [
    row(Face::Front, 0),
    row(Face::Right, 0),
    row(Face::Back, 0),
    row(Face::Left, 0),
];

const DOWN_BANDS: [Band; 4] = [
    row(Face::Front, 2),
    row(Face::Left, 2),
    row(Face::Back, 2),
    row(Face::Right, 2),
];

const RIGHT_BANDS: [Band; 4] = [
    col(Face::Up, 2),
    col(Face::Front, 2),
    col(Face::Down, 2),
    col_rev(Face::Back, 0),
];

const LEFT_BANDS: [Band; 4] = [
    col(Face::Up, 0),
    col_rev(Face::Back, 2),
    col(Face::Down, 0),
    col(Face::Front, 0),
];

const FRONT_BANDS: [Band; 4] = [
    row(Face::Up, 2),
    col_rev(Face::Left, 2),
    row_rev(Face::Down, 0),
    col(Face::Right, 0),
];

const BACK_BANDS: [Band; 4] = [
    row(Face::Up, 0),
    col(Face::Right, 2),
    row_rev(Face::Down, 2),
    col_rev(Face::Left, 0),
];

/// Band cycle moved by a clockwise turn of `face`
pub fn bands(face: Face) -> &'static [Band; 4] {
    match face {
        Face::Up => &UP_BANDS,
        Face::Down => &DOWN_BANDS,
        Face::Left => &LEFT_BANDS,
        Face::Right => &RIGHT_BANDS,
        Face::Front => &FRONT_BANDS,
        Face::Back => &BACK_BANDS,
    }
}

fn read_band(cube: &Facelets, band: &Band) -> [Color; 3] {
    band.map(|(face, r, c)| cube.sticker(face, r, c))
}

fn write_band(cube: &mut Facelets, band: &Band, colors: [Color; 3]) {
    for (&(face, r, c), color) in band.iter().zip(colors) {
        cube.set_sticker(face, r, c, color);
    }
}

/// Rotate a face's own grid 90 degrees clockwise
///
/// Transpose, then reverse each row: the top-left sticker ends up top-right.
pub fn rotate_face_clockwise(cube: &mut Facelets, face: Face) {
    let old = *cube.face(face);
    let grid = cube.face_mut(face);
    for (r, grid_row) in grid.iter_mut().enumerate() {
        for (c, sticker) in grid_row.iter_mut().enumerate() {
            *sticker = old[2 - c][r];
        }
    }
}

/// Clockwise quarter turn of `face`
pub fn turn(cube: &mut Facelets, face: Face) {
    rotate_face_clockwise(cube, face);

    let cycle = bands(face);
    let saved = read_band(cube, &cycle[0]);
    for k in 0..3 {
        let incoming = read_band(cube, &cycle[k + 1]);
        write_band(cube, &cycle[k], incoming);
    }
    write_band(cube, &cycle[3], saved);
}

/// Counter-clockwise quarter turn of `face`: three clockwise turns
pub fn turn_prime(cube: &mut Facelets, face: Face) {
    for _ in 0..3 {
        turn(cube, face);
    }
}

/// U
pub fn up(cube: &mut Facelets) {
    turn(cube, Face::Up);
}

/// U'
pub fn up_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Up);
}

/// D
pub fn down(cube: &mut Facelets) {
    turn(cube, Face::Down);
}

/// D'
pub fn down_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Down);
}

/// L
pub fn left(cube: &mut Facelets) {
    turn(cube, Face::Left);
}

/// L'
pub fn left_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Left);
}

/// R
pub fn right(cube: &mut Facelets) {
    turn(cube, Face::Right);
}

/// R'
pub fn right_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Right);
}

/// F
pub fn front(cube: &mut Facelets) {
    turn(cube, Face::Front);
}

/// F'
pub fn front_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Front);
}

/// B
pub fn back(cube: &mut Facelets) {
    turn(cube, Face::Back);
}

/// B'
pub fn back_prime(cube: &mut Facelets) {
    turn_prime(cube, Face::Back);
}
