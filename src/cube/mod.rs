use crate::prelude::*;

use rand::Rng;

pub mod sequence;

/// Default number of random moves drawn by [`Cube::scramble_cube`].
pub const DEFAULT_SCRAMBLE_MOVES: usize = 200;

/// The full cube state: six faces plus the recorded move log.
///
/// Faces keep a fixed spatial relationship (Up, Left, Front, Right, Back,
/// Down). Every move operator mutates the stickers in place and appends its
/// token to the move log unless recording is suppressed. `Clone` is a deep
/// value copy; clones share no storage.
#[derive(Debug, Clone)]
pub struct Cube {
    up: Face,
    left: Face,
    front: Face,
    right: Face,
    back: Face,
    down: Face,

    moves: Vec<Move>,
    scramble_sequence: String,
    recording: bool,
}

impl Cube {
    /// A solved cube in the canonical coloring.
    pub fn solved() -> Cube {
        Cube {
            up: Face::uniform('W'.into()),
            left: Face::uniform('G'.into()),
            front: Face::uniform('R'.into()),
            right: Face::uniform('B'.into()),
            back: Face::uniform('O'.into()),
            down: Face::uniform('Y'.into()),

            moves: Vec::new(),
            scramble_sequence: String::new(),
            recording: true,
        }
    }

    /// Back to the solved coloring, clearing the move log and scramble.
    pub fn reset(&mut self) {
        *self = Cube::solved();
    }

    pub fn up(&self) -> &Face {
        &self.up
    }

    pub fn left(&self) -> &Face {
        &self.left
    }

    pub fn front(&self) -> &Face {
        &self.front
    }

    pub fn right(&self) -> &Face {
        &self.right
    }

    pub fn back(&self) -> &Face {
        &self.back
    }

    pub fn down(&self) -> &Face {
        &self.down
    }

    pub fn is_solved(&self) -> bool {
        self.up.is_solved()
            && self.left.is_solved()
            && self.front.is_solved()
            && self.right.is_solved()
            && self.back.is_solved()
            && self.down.is_solved()
    }

    /// Load the 54-sticker state string: Up, Left, Front, Right, Back, Down,
    /// row-major, whitespace separated. Extra tokens are ignored. On error
    /// the cube is left unchanged.
    pub fn set_cube(&mut self, state: &str) -> anyhow::Result<()> {
        let mut tokens = state.split_whitespace();
        let mut stickers = [Sticker::default(); 54];
        for (index, slot) in stickers.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or_else(|| anyhow::anyhow!("Cube state needs 54 stickers, got {}", index))?;
            *slot = token.parse()?;
        }

        self.up = face_from(&stickers[0..9]);
        self.left = face_from(&stickers[9..18]);
        self.front = face_from(&stickers[18..27]);
        self.right = face_from(&stickers[27..36]);
        self.back = face_from(&stickers[36..45]);
        self.down = face_from(&stickers[45..54]);
        Ok(())
    }

    /// The raw move log.
    pub fn recorded_moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn moves_string(&self) -> String {
        Move::format_sequence(&self.moves)
    }

    /// The move log with redundant turns collapsed.
    pub fn optimized_moves(&self) -> String {
        Move::format_sequence(&sequence::optimize_moves(&self.moves))
    }

    /// The optimized sequence generated by the last scramble.
    pub fn scramble_sequence(&self) -> &str {
        &self.scramble_sequence
    }

    fn record(&mut self, m: Move) {
        if self.recording {
            self.moves.push(m);
        }
    }

    /// Run `f` with move recording suppressed, restoring the previous
    /// recording state afterwards.
    pub fn with_recording_paused<T>(&mut self, f: impl FnOnce(&mut Cube) -> T) -> T {
        let saved = std::mem::replace(&mut self.recording, false);
        let result = f(self);
        self.recording = saved;
        result
    }

    /// Apply one move.
    pub fn execute_move(&mut self, m: Move) {
        match m {
            Move::U => self.u(),
            Move::Ui => self.ui(),
            Move::D => self.d(),
            Move::Di => self.di(),
            Move::L => self.l(),
            Move::Li => self.li(),
            Move::R => self.r(),
            Move::Ri => self.ri(),
            Move::F => self.f(),
            Move::Fi => self.fi(),
            Move::B => self.b(),
            Move::Bi => self.bi(),
            Move::Us => self.us(),
            Move::Ds => self.ds(),
            Move::Ls => self.ls(),
            Move::Rs => self.rs(),
            Move::Fs => self.fs(),
            Move::Bs => self.bs(),
            Move::Cu => self.cu(),
            Move::Cd => self.cd(),
            Move::Cl => self.cl(),
            Move::Cr => self.cr(),
        }
    }

    pub fn execute_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.execute_move(m);
        }
    }

    /// Execute a whitespace-separated move sequence. Tokens are
    /// case-insensitive; unrecognized tokens are silently ignored.
    pub fn execute_sequence(&mut self, sequence: &str) {
        self.execute_moves(&Move::parse_lenient(sequence));
    }

    /// Scramble with `count` uniformly random turns from the 18-move
    /// alphabet. The optimized form of the generated sequence is stored as
    /// the scramble sequence and then applied, without touching the move
    /// log.
    pub fn scramble_cube(&mut self, count: usize) {
        let alphabet: Vec<Move> = Move::turns().collect();
        let mut rng = rand::thread_rng();
        let drawn: Vec<Move> = (0..count)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        let optimized = sequence::optimize_moves(&drawn);
        log::debug!(
            "scramble: {} random moves, {} after optimization",
            count,
            optimized.len()
        );
        self.scramble_sequence = Move::format_sequence(&optimized);
        self.with_recording_paused(|cube| cube.execute_moves(&optimized));
    }

    /// Reorient the cube so the face holding `color` at its center becomes
    /// Up. At most two reorientation moves.
    pub fn set_up_face(&mut self, color: Sticker) {
        if self.front.color() == color {
            self.cu();
        } else if self.left.color() == color {
            self.cr();
            self.cu();
        } else if self.right.color() == color {
            self.cl();
            self.cu();
        } else if self.back.color() == color {
            self.cd();
        } else if self.down.color() == color {
            self.cd();
            self.cd();
        }
    }

    /// Reorient the cube so the face holding `color` at its center becomes
    /// Front.
    pub fn set_front_face(&mut self, color: Sticker) {
        if self.up.color() == color {
            self.cd();
        } else if self.left.color() == color {
            self.cr();
        } else if self.right.color() == color {
            self.cl();
        } else if self.back.color() == color {
            self.cl();
            self.cl();
        } else if self.down.color() == color {
            self.cu();
        }
    }

    pub fn f(&mut self) {
        self.front.rotate_clockwise();
        for i in 0..3 {
            let temp = self.up[(2, 2 - i)];
            self.up[(2, 2 - i)] = self.left[(i, 2)];
            self.left[(i, 2)] = self.down[(0, i)];
            self.down[(0, i)] = self.right[(2 - i, 0)];
            self.right[(2 - i, 0)] = temp;
        }
        self.record(Move::F);
    }

    pub fn fi(&mut self) {
        self.front.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.up[(2, 2 - i)];
            self.up[(2, 2 - i)] = self.right[(2 - i, 0)];
            self.right[(2 - i, 0)] = self.down[(0, i)];
            self.down[(0, i)] = self.left[(i, 2)];
            self.left[(i, 2)] = temp;
        }
        self.record(Move::Fi);
    }

    pub fn u(&mut self) {
        self.up.rotate_clockwise();
        for i in 0..3 {
            let temp = self.front[(0, i)];
            self.front[(0, i)] = self.right[(0, i)];
            self.right[(0, i)] = self.back[(0, i)];
            self.back[(0, i)] = self.left[(0, i)];
            self.left[(0, i)] = temp;
        }
        self.record(Move::U);
    }

    pub fn ui(&mut self) {
        self.up.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.front[(0, i)];
            self.front[(0, i)] = self.left[(0, i)];
            self.left[(0, i)] = self.back[(0, i)];
            self.back[(0, i)] = self.right[(0, i)];
            self.right[(0, i)] = temp;
        }
        self.record(Move::Ui);
    }

    pub fn b(&mut self) {
        self.back.rotate_clockwise();
        for i in 0..3 {
            let temp = self.up[(0, i)];
            self.up[(0, i)] = self.right[(i, 2)];
            self.right[(i, 2)] = self.down[(2, 2 - i)];
            self.down[(2, 2 - i)] = self.left[(2 - i, 0)];
            self.left[(2 - i, 0)] = temp;
        }
        self.record(Move::B);
    }

    pub fn bi(&mut self) {
        self.back.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.up[(0, i)];
            self.up[(0, i)] = self.left[(2 - i, 0)];
            self.left[(2 - i, 0)] = self.down[(2, 2 - i)];
            self.down[(2, 2 - i)] = self.right[(i, 2)];
            self.right[(i, 2)] = temp;
        }
        self.record(Move::Bi);
    }

    pub fn l(&mut self) {
        self.left.rotate_clockwise();
        for i in 0..3 {
            let temp = self.up[(i, 0)];
            self.up[(i, 0)] = self.back[(2 - i, 2)];
            self.back[(2 - i, 2)] = self.down[(i, 0)];
            self.down[(i, 0)] = self.front[(i, 0)];
            self.front[(i, 0)] = temp;
        }
        self.record(Move::L);
    }

    pub fn li(&mut self) {
        self.left.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.up[(i, 0)];
            self.up[(i, 0)] = self.front[(i, 0)];
            self.front[(i, 0)] = self.down[(i, 0)];
            self.down[(i, 0)] = self.back[(2 - i, 2)];
            self.back[(2 - i, 2)] = temp;
        }
        self.record(Move::Li);
    }

    pub fn r(&mut self) {
        self.right.rotate_clockwise();
        for i in 0..3 {
            let temp = self.up[(i, 2)];
            self.up[(i, 2)] = self.front[(i, 2)];
            self.front[(i, 2)] = self.down[(i, 2)];
            self.down[(i, 2)] = self.back[(2 - i, 0)];
            self.back[(2 - i, 0)] = temp;
        }
        self.record(Move::R);
    }

    pub fn ri(&mut self) {
        self.right.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.up[(2 - i, 2)];
            self.up[(2 - i, 2)] = self.back[(i, 0)];
            self.back[(i, 0)] = self.down[(2 - i, 2)];
            self.down[(2 - i, 2)] = self.front[(2 - i, 2)];
            self.front[(2 - i, 2)] = temp;
        }
        self.record(Move::Ri);
    }

    pub fn d(&mut self) {
        self.down.rotate_clockwise();
        for i in 0..3 {
            let temp = self.front[(2, i)];
            self.front[(2, i)] = self.left[(2, i)];
            self.left[(2, i)] = self.back[(2, i)];
            self.back[(2, i)] = self.right[(2, i)];
            self.right[(2, i)] = temp;
        }
        self.record(Move::D);
    }

    pub fn di(&mut self) {
        self.down.rotate_counter_clockwise();
        for i in 0..3 {
            let temp = self.front[(2, i)];
            self.front[(2, i)] = self.right[(2, i)];
            self.right[(2, i)] = self.back[(2, i)];
            self.back[(2, i)] = self.left[(2, i)];
            self.left[(2, i)] = temp;
        }
        self.record(Move::Di);
    }

    pub fn us(&mut self) {
        for col in 0..3 {
            let temp = self.front[(1, col)];
            self.front[(1, col)] = self.right[(1, col)];
            self.right[(1, col)] = self.back[(1, col)];
            self.back[(1, col)] = self.left[(1, col)];
            self.left[(1, col)] = temp;
        }
        self.record(Move::Us);
    }

    pub fn ds(&mut self) {
        for col in 0..3 {
            let temp = self.front[(1, col)];
            self.front[(1, col)] = self.left[(1, col)];
            self.left[(1, col)] = self.back[(1, col)];
            self.back[(1, col)] = self.right[(1, col)];
            self.right[(1, col)] = temp;
        }
        self.record(Move::Ds);
    }

    pub fn ls(&mut self) {
        for row in 0..3 {
            let temp = self.up[(row, 1)];
            self.up[(row, 1)] = self.back[(2 - row, 1)];
            self.back[(2 - row, 1)] = self.down[(row, 1)];
            self.down[(row, 1)] = self.front[(row, 1)];
            self.front[(row, 1)] = temp;
        }
        self.record(Move::Ls);
    }

    pub fn rs(&mut self) {
        for row in 0..3 {
            let temp = self.up[(row, 1)];
            self.up[(row, 1)] = self.front[(row, 1)];
            self.front[(row, 1)] = self.down[(row, 1)];
            self.down[(row, 1)] = self.back[(2 - row, 1)];
            self.back[(2 - row, 1)] = temp;
        }
        self.record(Move::Rs);
    }

    pub fn fs(&mut self) {
        for i in 0..3 {
            let temp = self.up[(1, i)];
            self.up[(1, i)] = self.left[(2 - i, 1)];
            self.left[(2 - i, 1)] = self.down[(1, 2 - i)];
            self.down[(1, 2 - i)] = self.right[(i, 1)];
            self.right[(i, 1)] = temp;
        }
        self.record(Move::Fs);
    }

    pub fn bs(&mut self) {
        for i in 0..3 {
            let temp = self.up[(1, i)];
            self.up[(1, i)] = self.right[(i, 1)];
            self.right[(i, 1)] = self.down[(1, 2 - i)];
            self.down[(1, 2 - i)] = self.left[(2 - i, 1)];
            self.left[(2 - i, 1)] = temp;
        }
        self.record(Move::Bs);
    }

    pub fn cu(&mut self) {
        self.left.rotate_counter_clockwise();
        self.right.rotate_clockwise();
        let up = self.up;
        self.up = self.front;
        self.front = self.down;
        self.down = self.back.half_turned();
        self.back = up.half_turned();
        self.record(Move::Cu);
    }

    pub fn cd(&mut self) {
        self.left.rotate_clockwise();
        self.right.rotate_counter_clockwise();
        let down = self.down;
        self.down = self.front;
        self.front = self.up;
        self.up = self.back.half_turned();
        self.back = down.half_turned();
        self.record(Move::Cd);
    }

    pub fn cl(&mut self) {
        self.down.rotate_counter_clockwise();
        self.up.rotate_clockwise();
        let front = self.front;
        self.front = self.right;
        self.right = self.back;
        self.back = self.left;
        self.left = front;
        self.record(Move::Cl);
    }

    pub fn cr(&mut self) {
        self.down.rotate_clockwise();
        self.up.rotate_counter_clockwise();
        let front = self.front;
        self.front = self.left;
        self.left = self.back;
        self.back = self.right;
        self.right = front;
        self.record(Move::Cr);
    }
}

impl Default for Cube {
    fn default() -> Cube {
        Cube::solved()
    }
}

/// Two cubes are equal when their stickers are; the move log is bookkeeping.
impl PartialEq for Cube {
    fn eq(&self, other: &Cube) -> bool {
        self.up == other.up
            && self.left == other.left
            && self.front == other.front
            && self.right == other.right
            && self.back == other.back
            && self.down == other.down
    }
}

impl Eq for Cube {}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let faces = [
            &self.up,
            &self.left,
            &self.front,
            &self.right,
            &self.back,
            &self.down,
        ];
        let mut first = true;
        for face in faces {
            for row in 0..3 {
                for col in 0..3 {
                    if !first {
                        write!(f, " ")?;
                    }
                    first = false;
                    write!(f, "{}", face[(row, col)])?;
                }
            }
        }
        Ok(())
    }
}

fn face_from(stickers: &[Sticker]) -> Face {
    let mut face = Face::default();
    for row in 0..3 {
        for col in 0..3 {
            face[(row, col)] = stickers[row * 3 + col];
        }
    }
    face
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERED: &str = "1 2 3 4 5 6 7 8 9 \
                            10 11 12 13 14 15 16 17 18 \
                            19 20 21 22 23 24 25 26 27 \
                            28 29 30 31 32 33 34 35 36 \
                            37 38 39 40 41 42 43 44 45 \
                            46 47 48 49 50 51 52 53 54";

    fn numbered_cube() -> Cube {
        let mut cube = Cube::solved();
        cube.set_cube(NUMBERED).unwrap();
        cube
    }

    #[test]
    fn solved_cube_is_solved() {
        assert!(Cube::solved().is_solved());
    }

    #[test]
    fn any_single_turn_unsolves() {
        for m in Move::turns() {
            let mut cube = Cube::solved();
            cube.execute_move(m);
            assert!(!cube.is_solved(), "{} left the cube solved", m);
        }
    }

    #[test]
    fn reorientations_keep_the_cube_solved() {
        for m in [Move::Cu, Move::Cd, Move::Cl, Move::Cr] {
            let mut cube = Cube::solved();
            cube.execute_move(m);
            assert!(cube.is_solved(), "{} unsolved the cube", m);
        }
    }

    #[test]
    fn every_move_has_order_four() {
        for m in Move::all() {
            let mut cube = numbered_cube();
            for _ in 0..4 {
                cube.execute_move(m);
            }
            assert_eq!(cube, numbered_cube(), "{} is not order 4", m);
        }
    }

    #[test]
    fn every_move_cancels_with_its_inverse() {
        for m in Move::all() {
            let mut cube = numbered_cube();
            cube.execute_move(m);
            cube.execute_move(m.inverse());
            assert_eq!(cube, numbered_cube(), "{} inverse mismatch", m);
        }
    }

    #[test]
    fn state_string_round_trips() {
        let cube = numbered_cube();
        assert_eq!(cube.to_string(), NUMBERED.split_whitespace().collect::<Vec<_>>().join(" "));

        let mut reparsed = Cube::solved();
        reparsed.set_cube(&cube.to_string()).unwrap();
        assert_eq!(reparsed, cube);
    }

    #[test]
    fn set_cube_rejects_short_state() {
        let mut cube = Cube::solved();
        assert!(cube.set_cube("W W W").is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn fixed_permutation_example() {
        let mut cube = numbered_cube();
        cube.execute_sequence("F F D D R R L L U D");
        assert_eq!(
            cube.to_string(),
            "7 51 54 47 5 2 9 49 52 19 26 21 31 14 13 25 20 27 \
             28 17 16 42 23 40 34 11 10 45 38 43 33 32 15 39 44 37 \
             36 35 12 22 41 24 30 29 18 48 4 1 8 50 53 46 6 3"
        );
    }

    #[test]
    fn vertical_axis_turns_compose_to_a_reorientation() {
        let mut composed = numbered_cube();
        composed.execute_sequence("u us di");

        let mut rotated = numbered_cube();
        rotated.cl();
        assert_eq!(composed, rotated);
    }

    #[test]
    fn horizontal_axis_turns_compose_to_a_reorientation() {
        let mut composed = numbered_cube();
        composed.execute_sequence("li rs r");

        let mut rotated = numbered_cube();
        rotated.cu();
        assert_eq!(composed, rotated);
    }

    #[test]
    fn slice_turns_move_the_expected_bands() {
        let mut cube = Cube::solved();
        cube.us();
        for col in 0..3 {
            assert_eq!(cube.front()[(1, col)], 'B'.into());
            assert_eq!(cube.right()[(1, col)], 'O'.into());
            assert_eq!(cube.back()[(1, col)], 'G'.into());
            assert_eq!(cube.left()[(1, col)], 'R'.into());
        }

        let mut cube = Cube::solved();
        cube.ls();
        for row in 0..3 {
            assert_eq!(cube.up()[(row, 1)], 'O'.into());
            assert_eq!(cube.back()[(row, 1)], 'Y'.into());
            assert_eq!(cube.down()[(row, 1)], 'R'.into());
            assert_eq!(cube.front()[(row, 1)], 'W'.into());
        }

        let mut cube = Cube::solved();
        cube.fs();
        for i in 0..3 {
            assert_eq!(cube.up()[(1, i)], 'G'.into());
            assert_eq!(cube.right()[(i, 1)], 'W'.into());
            assert_eq!(cube.down()[(1, i)], 'B'.into());
            assert_eq!(cube.left()[(i, 1)], 'Y'.into());
        }
    }

    #[test]
    fn clone_is_independent() {
        let mut cube = Cube::solved();
        cube.execute_sequence("r u ri ui");
        let snapshot = cube.clone();
        assert_eq!(snapshot.to_string(), cube.to_string());

        cube.f();
        assert_ne!(snapshot, cube);
        assert_eq!(snapshot, {
            let mut replay = Cube::solved();
            replay.execute_sequence("r u ri ui");
            replay
        });
    }

    #[test]
    fn moves_are_recorded_in_canonical_case() {
        let mut cube = Cube::solved();
        cube.execute_sequence("f fi us CR");
        assert_eq!(cube.moves_string(), "F Fi Us Cr");
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let mut cube = Cube::solved();
        cube.execute_sequence("f bogus ** fi");
        assert!(cube.is_solved());
        assert_eq!(cube.moves_string(), "F Fi");
    }

    #[test]
    fn recording_pause_restores_state() {
        let mut cube = Cube::solved();
        cube.with_recording_paused(|c| c.execute_sequence("r u ri"));
        assert!(cube.recorded_moves().is_empty());

        cube.u();
        assert_eq!(cube.moves_string(), "U");
    }

    #[test]
    fn scramble_replays_from_its_recorded_sequence() {
        let mut cube = Cube::solved();
        cube.scramble_cube(50);
        assert!(cube.recorded_moves().is_empty());

        let mut replay = Cube::solved();
        replay.execute_sequence(cube.scramble_sequence());
        assert_eq!(replay, cube);
    }

    #[test]
    fn set_up_face_brings_each_color_up() {
        let solved = Cube::solved();
        for face in [
            solved.up(),
            solved.left(),
            solved.front(),
            solved.right(),
            solved.back(),
            solved.down(),
        ] {
            let color = face.color();
            let mut cube = Cube::solved();
            cube.set_up_face(color);
            assert_eq!(cube.up().color(), color);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn set_front_face_brings_each_color_front() {
        let solved = Cube::solved();
        for face in [
            solved.up(),
            solved.left(),
            solved.front(),
            solved.right(),
            solved.back(),
            solved.down(),
        ] {
            let color = face.color();
            let mut cube = Cube::solved();
            cube.set_front_face(color);
            assert_eq!(cube.front().color(), color);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn reset_restores_a_fresh_cube() {
        let mut cube = Cube::solved();
        cube.scramble_cube(30);
        cube.execute_sequence("r u");
        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.recorded_moves().is_empty());
        assert_eq!(cube.scramble_sequence(), "");
    }
}
