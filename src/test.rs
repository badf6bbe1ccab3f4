use crate::prelude::*;

pub fn cube_with_moves(moves: &str) -> Cube {
    let mut cube = Cube::solved();
    cube.execute_sequence(moves);
    cube
}
