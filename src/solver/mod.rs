use crate::prelude::*;

mod tables;

mod simple;
pub use simple::*;

pub trait Solver {
    /// Solve the borrowed cube in place, returning the optimized move
    /// sequence that was applied.
    fn solve(&mut self) -> anyhow::Result<String>;
}

/// Where an edge cubie was found, and with which of its two stickers on the
/// first face of the searched pair. `Flipped` variants mean the pair
/// matched in reverse orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum EdgePosition {
    UpBack,
    UpBackFlipped,
    UpLeft,
    UpLeftFlipped,
    UpFront,
    UpFrontFlipped,
    UpRight,
    UpRightFlipped,
    LeftFront,
    LeftFrontFlipped,
    FrontRight,
    FrontRightFlipped,
    RightBack,
    RightBackFlipped,
    BackLeft,
    BackLeftFlipped,
    DownFront,
    DownFrontFlipped,
    DownLeft,
    DownLeftFlipped,
    DownBack,
    DownBackFlipped,
    DownRight,
    DownRightFlipped,
}

/// The side a color belongs to, used to index the edge fix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFace {
    Back,
    Left,
    Right,
    Front,
}

/// One of the eight physical corner cubie locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerSlot {
    UpLeftFront,
    UpLeftBack,
    UpRightFront,
    UpRightBack,
    DownLeftFront,
    DownLeftBack,
    DownRightFront,
    DownRightBack,
}

/// How the three searched colors sit on a corner slot's stickers, in the
/// slot's fixed reading order. `Abc` is the first searched color on the
/// first sticker, the second on the second, the third on the third; the
/// other variants are the remaining permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerSpin {
    Abc,
    Acb,
    Bac,
    Bca,
    Cab,
    Cba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerMatch {
    pub slot: CornerSlot,
    pub spin: CornerSpin,
}

/// Scan the 24 edge slots (12 physical locations, both orientations) for
/// the edge showing `face_color` and `color`. Pure read, no backtracking.
pub fn search_edge(cube: &Cube, face_color: Sticker, color: Sticker) -> Option<EdgePosition> {
    use EdgePosition::*;

    let slots = [
        (cube.up()[(0, 1)], cube.back()[(0, 1)], UpBack, UpBackFlipped),
        (cube.up()[(1, 0)], cube.left()[(0, 1)], UpLeft, UpLeftFlipped),
        (cube.up()[(1, 2)], cube.right()[(0, 1)], UpRight, UpRightFlipped),
        (cube.up()[(2, 1)], cube.front()[(0, 1)], UpFront, UpFrontFlipped),
        (
            cube.left()[(1, 2)],
            cube.front()[(1, 0)],
            LeftFront,
            LeftFrontFlipped,
        ),
        (
            cube.front()[(1, 2)],
            cube.right()[(1, 0)],
            FrontRight,
            FrontRightFlipped,
        ),
        (
            cube.right()[(1, 2)],
            cube.back()[(1, 0)],
            RightBack,
            RightBackFlipped,
        ),
        (
            cube.back()[(1, 2)],
            cube.left()[(1, 0)],
            BackLeft,
            BackLeftFlipped,
        ),
        (
            cube.down()[(0, 1)],
            cube.front()[(2, 1)],
            DownFront,
            DownFrontFlipped,
        ),
        (
            cube.down()[(1, 0)],
            cube.left()[(2, 1)],
            DownLeft,
            DownLeftFlipped,
        ),
        (
            cube.down()[(1, 2)],
            cube.right()[(2, 1)],
            DownRight,
            DownRightFlipped,
        ),
        (
            cube.down()[(2, 1)],
            cube.back()[(2, 1)],
            DownBack,
            DownBackFlipped,
        ),
    ];

    slots.into_iter().find_map(|(outer, inner, found, flipped)| {
        if outer == face_color && inner == color {
            Some(found)
        } else if outer == color && inner == face_color {
            Some(flipped)
        } else {
            None
        }
    })
}

/// Scan the 8 corner slots for the cubie carrying the three given colors,
/// in any of the 6 permutations.
pub fn search_corner(
    cube: &Cube,
    color1: Sticker,
    color2: Sticker,
    color3: Sticker,
) -> Option<CornerMatch> {
    use CornerSlot::*;

    let slots = [
        (
            UpLeftFront,
            cube.up()[(2, 0)],
            cube.left()[(0, 2)],
            cube.front()[(0, 0)],
        ),
        (
            UpLeftBack,
            cube.up()[(0, 0)],
            cube.left()[(0, 0)],
            cube.back()[(0, 2)],
        ),
        (
            UpRightFront,
            cube.up()[(2, 2)],
            cube.right()[(0, 0)],
            cube.front()[(0, 2)],
        ),
        (
            UpRightBack,
            cube.up()[(0, 2)],
            cube.right()[(0, 2)],
            cube.back()[(0, 0)],
        ),
        (
            DownLeftFront,
            cube.down()[(0, 0)],
            cube.left()[(2, 2)],
            cube.front()[(2, 0)],
        ),
        (
            DownLeftBack,
            cube.down()[(2, 0)],
            cube.left()[(2, 0)],
            cube.back()[(2, 2)],
        ),
        (
            DownRightFront,
            cube.down()[(0, 2)],
            cube.right()[(2, 0)],
            cube.front()[(2, 2)],
        ),
        (
            DownRightBack,
            cube.down()[(2, 2)],
            cube.right()[(2, 2)],
            cube.back()[(2, 0)],
        ),
    ];

    slots.into_iter().find_map(|(slot, a, b, c)| {
        corner_spin((color1, color2, color3), (a, b, c)).map(|spin| CornerMatch { slot, spin })
    })
}

fn corner_spin(
    (c1, c2, c3): (Sticker, Sticker, Sticker),
    (a, b, c): (Sticker, Sticker, Sticker),
) -> Option<CornerSpin> {
    use CornerSpin::*;

    if a == c1 && b == c2 && c == c3 {
        Some(Abc)
    } else if a == c1 && b == c3 && c == c2 {
        Some(Acb)
    } else if a == c2 && b == c1 && c == c3 {
        Some(Bac)
    } else if a == c2 && b == c3 && c == c1 {
        Some(Bca)
    } else if a == c3 && b == c1 && c == c2 {
        Some(Cab)
    } else if a == c3 && b == c2 && c == c1 {
        Some(Cba)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_solved_edges_in_place() {
        let cube = Cube::solved();
        let up = cube.up().color();

        assert_eq!(
            search_edge(&cube, up, cube.back().color()),
            Some(EdgePosition::UpBack)
        );
        assert_eq!(
            search_edge(&cube, up, cube.left().color()),
            Some(EdgePosition::UpLeft)
        );
        assert_eq!(
            search_edge(&cube, up, cube.front().color()),
            Some(EdgePosition::UpFront)
        );
        assert_eq!(
            search_edge(&cube, cube.front().color(), cube.right().color()),
            Some(EdgePosition::FrontRight)
        );
    }

    #[test]
    fn missing_edge_returns_none() {
        let cube = Cube::solved();
        let up = cube.up().color();
        assert_eq!(search_edge(&cube, up, up), None);
    }

    #[test]
    fn a_turn_flips_the_searched_edge() {
        let cube = cube_with_moves("f");
        let front = Cube::solved().front().color();
        let down = Cube::solved().down().color();

        // F carries the front-down edge to front-left, flipping the pair.
        assert_eq!(
            search_edge(&cube, front, down),
            Some(EdgePosition::LeftFrontFlipped)
        );
    }

    #[test]
    fn finds_the_solved_front_left_corner() {
        let cube = Cube::solved();
        let found = search_corner(
            &cube,
            cube.up().color(),
            cube.left().color(),
            cube.front().color(),
        )
        .unwrap();
        assert_eq!(found.slot, CornerSlot::UpLeftFront);
        assert_eq!(found.spin, CornerSpin::Abc);
    }

    #[test]
    fn color_order_changes_the_spin() {
        let cube = Cube::solved();
        let found = search_corner(
            &cube,
            cube.left().color(),
            cube.up().color(),
            cube.front().color(),
        )
        .unwrap();
        assert_eq!(found.slot, CornerSlot::UpLeftFront);
        assert_eq!(found.spin, CornerSpin::Bac);
    }

    #[test]
    fn missing_corner_returns_none() {
        let cube = Cube::solved();
        let up = cube.up().color();
        assert_eq!(search_corner(&cube, up, up, up), None);
    }

    #[test]
    fn every_solved_corner_is_found_in_its_slot() {
        let cube = Cube::solved();
        let expectations = [
            (
                CornerSlot::UpLeftFront,
                cube.up().color(),
                cube.left().color(),
                cube.front().color(),
            ),
            (
                CornerSlot::UpLeftBack,
                cube.up().color(),
                cube.left().color(),
                cube.back().color(),
            ),
            (
                CornerSlot::UpRightFront,
                cube.up().color(),
                cube.right().color(),
                cube.front().color(),
            ),
            (
                CornerSlot::UpRightBack,
                cube.up().color(),
                cube.right().color(),
                cube.back().color(),
            ),
            (
                CornerSlot::DownLeftFront,
                cube.down().color(),
                cube.left().color(),
                cube.front().color(),
            ),
            (
                CornerSlot::DownLeftBack,
                cube.down().color(),
                cube.left().color(),
                cube.back().color(),
            ),
            (
                CornerSlot::DownRightFront,
                cube.down().color(),
                cube.right().color(),
                cube.front().color(),
            ),
            (
                CornerSlot::DownRightBack,
                cube.down().color(),
                cube.right().color(),
                cube.back().color(),
            ),
        ];

        for (slot, c1, c2, c3) in expectations {
            let found = search_corner(&cube, c1, c2, c3).unwrap();
            assert_eq!(found.slot, slot);
            assert_eq!(found.spin, CornerSpin::Abc);
        }
    }
}
