use crate::cube::sequence;
use crate::prelude::*;

use super::tables::{CORNER_FIXES, MIDDLE_EDGE_FIXES, TOP_EDGE_MOVES};

/// Retry cap for the corrective loops, matching the 4-fold rotational
/// symmetry of a face. A legally scrambled cube converges well within it.
const CUBE_SIDES: usize = 4;

const QUICK_SOLVE_DEPTH: usize = 3;

/// Layer-by-layer solver: top cross, top corners, middle layer, then the
/// flipped last layer (cross, corner orientation, corner position, edge
/// position), each step driven by positional lookups. A bounded brute-force
/// pass handles near-solved cubes up front.
///
/// Borrows the cube for the duration of the solve and mutates it in place;
/// clone first if the pre-solve state matters. A failed solve leaves the
/// cube partially solved.
pub struct SimpleSolver<'a> {
    cube: &'a mut Cube,
}

/// Last-layer cross shapes, classified from the four up-face edge cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CrossState {
    Solved,
    Dot,
    TopLeftHook,
    TopRightHook,
    RightBottomHook,
    LeftBottomHook,
    HorizontalLine,
    VerticalLine,
}

/// Last-layer corner progress, classified by how many up-face corner cells
/// already match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerState {
    NoneCorrect,
    OneCorrect,
    TwoOrThreeCorrect,
    AllCorrect,
}

impl<'a> SimpleSolver<'a> {
    pub fn new(cube: &'a mut Cube) -> SimpleSolver<'a> {
        SimpleSolver { cube }
    }

    /// Bounded brute force: try every turn sequence up to depth 3 on clones
    /// and apply the first one that solves the cube. No-op otherwise.
    pub fn solve_quick_solve(&mut self) {
        if let Some(moves) = quick_solve_search(self.cube, QUICK_SOLVE_DEPTH) {
            let optimized = sequence::optimize_moves(&moves);
            log::debug!("quick solve found a {}-move solution", optimized.len());
            self.cube.execute_moves(&optimized);
        }
    }

    /// Place the four top-layer edges around the up center.
    pub fn solve_up_cross(&mut self) {
        for color in self.side_colors() {
            self.position_up_edge(color);
        }
    }

    /// Place the four top-layer corners, rotating the cube a quarter turn
    /// between placements so each corner passes through up-left-front.
    pub fn solve_up_corners(&mut self) {
        for count in 0..CUBE_SIDES {
            let up = self.cube.up().color();
            let left = self.cube.left().color();
            let front = self.cube.front().color();
            self.position_up_left_front_corner(up, left, front);
            if count < CUBE_SIDES - 1 {
                self.cube.execute_sequence("cr");
            }
        }
    }

    /// Place the four middle-layer edges via the front-right slot.
    pub fn solve_middle_layer(&mut self) {
        for count in 0..CUBE_SIDES {
            let side = self.cube.right().color();
            self.position_middle_front_right_edge(side);
            if count < CUBE_SIDES - 1 {
                self.cube.execute_sequence("cr");
            }
        }
    }

    /// Build the last-layer cross on the (flipped) up face.
    pub fn solve_cross(&mut self) -> anyhow::Result<()> {
        for _ in 0..CUBE_SIDES {
            let state = cross_state(self.cube.up())
                .ok_or_else(|| anyhow::anyhow!("cube can't be solved"))?;

            let fix = match state {
                CrossState::Solved => return Ok(()),
                CrossState::Dot => "f u r ui ri fi",
                CrossState::TopLeftHook => "f u r ui ri fi",
                CrossState::TopRightHook => "cl f u r ui ri fi",
                CrossState::RightBottomHook => "cr cr f u r ui ri fi",
                CrossState::LeftBottomHook => "cr f u r ui ri fi",
                CrossState::HorizontalLine => "f r u ri ui fi",
                CrossState::VerticalLine => "cr f r u ri ui fi",
            };
            self.cube.execute_sequence(fix);
        }

        anyhow::bail!("cube can't be solved")
    }

    /// Orient the last-layer corners so the whole up face matches.
    pub fn solve_corner(&mut self) -> anyhow::Result<()> {
        for _ in 0..=CUBE_SIDES {
            match corner_state(self.cube.up()) {
                CornerState::AllCorrect => return Ok(()),

                CornerState::NoneCorrect => {
                    for _ in 0..CUBE_SIDES {
                        if self.cube.left().is_correct(0, 2) {
                            break;
                        }
                        self.cube.execute_sequence("cr");
                    }
                }

                CornerState::OneCorrect => {
                    for _ in 0..CUBE_SIDES {
                        if self.cube.up().is_correct(2, 0) {
                            break;
                        }
                        self.cube.execute_sequence("cr");
                    }
                }

                CornerState::TwoOrThreeCorrect => {
                    let up = self.cube.up().color();
                    for _ in 0..CUBE_SIDES {
                        if self.cube.front()[(0, 0)] == up {
                            break;
                        }
                        self.cube.execute_sequence("cr");
                    }
                }
            }

            self.cube.execute_sequence("r u ri u r u u ri");
        }

        anyhow::bail!("cube can't be solved")
    }

    /// Permute the last-layer corners into their slots: spin the up face
    /// until at least two adjacent corner pairs align, then swap with a
    /// fixed algorithm.
    pub fn solve_position_corner(&mut self) -> anyhow::Result<()> {
        for _ in 0..=CUBE_SIDES {
            for _ in 0..=CUBE_SIDES {
                let pairs = self.corner_pairs();
                if pairs.iter().filter(|&&ok| ok).count() == CUBE_SIDES {
                    return Ok(());
                }
                if pairs.iter().filter(|&&ok| ok).count() >= 2 {
                    break;
                }
                self.cube.execute_sequence("u");
            }

            for _ in 0..=CUBE_SIDES + 1 {
                let [back_left, back_right, front_left, front_right] = self.corner_pairs();
                if (back_left && back_right)
                    || (back_left && front_right)
                    || (back_right && front_left)
                {
                    break;
                }
                self.cube.execute_sequence("cr");
            }

            self.cube.execute_sequence("ri f ri b b r fi ri b b r r ui");
        }

        anyhow::bail!("cube can't be solved")
    }

    /// Cycle the last-layer edges into place with one of two fixed 3-cycle
    /// algorithms.
    pub fn solve_position_edges(&mut self) -> anyhow::Result<()> {
        for _ in 0..=CUBE_SIDES {
            let correct = [
                self.cube.back(),
                self.cube.left(),
                self.cube.front(),
                self.cube.right(),
            ]
            .iter()
            .filter(|side| side.is_correct(0, 1))
            .count();

            if correct == CUBE_SIDES {
                return Ok(());
            }

            let mut clockwise = true;
            if correct == 1 {
                for _ in 0..CUBE_SIDES {
                    if self.cube.back().is_correct(0, 1) {
                        break;
                    }
                    self.cube.execute_sequence("cr");
                }
                if self.cube.left()[(0, 1)] == self.cube.front().color() {
                    clockwise = false;
                }
            }

            self.cube.execute_sequence(if clockwise {
                "f f u l ri f f li r u f f"
            } else {
                "f f ui l ri f f li r ui f f"
            });
        }

        anyhow::bail!("cube can't be solved")
    }

    fn side_colors(&self) -> [Sticker; 4] {
        [
            self.cube.left().color(),
            self.cube.front().color(),
            self.cube.right().color(),
            self.cube.back().color(),
        ]
    }

    /// Which side the given center color belongs to, as an index into the
    /// top-edge fix table.
    fn target_face(&self, color: Sticker) -> TargetFace {
        if color == self.cube.back().color() {
            TargetFace::Back
        } else if color == self.cube.left().color() {
            TargetFace::Left
        } else if color == self.cube.right().color() {
            TargetFace::Right
        } else {
            TargetFace::Front
        }
    }

    fn position_up_edge(&mut self, color: Sticker) {
        let up_color = self.cube.up().color();
        let position = match search_edge(self.cube, up_color, color) {
            Some(position) => position,
            None => return,
        };

        let target = self.target_face(color);
        let fix = TOP_EDGE_MOVES[position as usize][target as usize];
        self.cube.execute_sequence(fix);
    }

    fn position_up_left_front_corner(&mut self, color1: Sticker, color2: Sticker, color3: Sticker) {
        let found = match search_corner(self.cube, color1, color2, color3) {
            Some(found) => found,
            None => return,
        };

        if let Some(fix) = CORNER_FIXES.get(&(found.slot, found.spin)) {
            self.cube.execute_sequence(fix);
        }
    }

    fn position_middle_front_right_edge(&mut self, side: Sticker) {
        let front_color = self.cube.front().color();
        let position = match search_edge(self.cube, front_color, side) {
            Some(position) => position,
            None => return,
        };

        if let Some(fix) = MIDDLE_EDGE_FIXES.get(&position) {
            self.cube.execute_sequence(fix);
        }
    }

    fn solution_since(&self, mark: usize) -> String {
        let applied = &self.cube.recorded_moves()[mark..];
        Move::format_sequence(&sequence::optimize_moves(applied))
    }

    /// The four adjacent last-layer corner pairs, in order back-left,
    /// back-right, front-left, front-right. A pair is correct when both of
    /// its side stickers match their faces.
    fn corner_pairs(&self) -> [bool; 4] {
        [
            self.cube.back().is_correct(0, 2) && self.cube.left().is_correct(0, 0),
            self.cube.back().is_correct(0, 0) && self.cube.right().is_correct(0, 2),
            self.cube.front().is_correct(0, 0) && self.cube.left().is_correct(0, 2),
            self.cube.front().is_correct(0, 2) && self.cube.right().is_correct(0, 0),
        ]
    }
}

impl Solver for SimpleSolver<'_> {
    fn solve(&mut self) -> anyhow::Result<String> {
        let mark = self.cube.recorded_moves().len();

        self.solve_quick_solve();
        if self.cube.is_solved() {
            return Ok(self.solution_since(mark));
        }

        log::debug!("solving layer by layer");
        self.solve_up_cross();
        self.solve_up_corners();
        self.solve_middle_layer();

        // First layer done: flip it underneath and solve the new top.
        let down_color = self.cube.down().color();
        self.cube.set_up_face(down_color);

        self.solve_cross()?;
        self.solve_corner()?;
        self.solve_position_corner()?;
        self.solve_position_edges()?;

        Ok(self.solution_since(mark))
    }
}

fn quick_solve_search(cube: &Cube, remaining: usize) -> Option<Vec<Move>> {
    if cube.is_solved() {
        return Some(Vec::new());
    }
    if remaining == 0 {
        return None;
    }

    Move::turns().find_map(|m| {
        let mut clone = cube.clone();
        clone.execute_move(m);
        quick_solve_search(&clone, remaining - 1).map(|mut path| {
            path.insert(0, m);
            path
        })
    })
}

fn cross_state(face: &Face) -> Option<CrossState> {
    let pattern = (
        face.is_correct(0, 1),
        face.is_correct(1, 0),
        face.is_correct(1, 2),
        face.is_correct(2, 1),
    );

    // (top, left, right, bottom); the missing patterns cannot occur on a
    // legal cube.
    Some(match pattern {
        (true, true, true, true) => CrossState::Solved,
        (false, false, false, false) => CrossState::Dot,
        (true, true, false, false) => CrossState::TopLeftHook,
        (true, false, true, false) => CrossState::TopRightHook,
        (false, false, true, true) => CrossState::RightBottomHook,
        (false, true, false, true) => CrossState::LeftBottomHook,
        (false, true, true, false) => CrossState::HorizontalLine,
        (true, false, false, true) => CrossState::VerticalLine,
        _ => return None,
    })
}

fn corner_state(face: &Face) -> CornerState {
    let count = [(0, 0), (0, 2), (2, 0), (2, 2)]
        .iter()
        .filter(|&&(row, col)| face.is_correct(row, col))
        .count();

    match count {
        1 => CornerState::OneCorrect,
        2 | 3 => CornerState::TwoOrThreeCorrect,
        4 => CornerState::AllCorrect,
        _ => CornerState::NoneCorrect,
    }
}
