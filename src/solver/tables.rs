//! Static solve tables: fixed move sequences indexed by positional codes.

use super::{CornerSlot, CornerSpin, EdgePosition};

use std::collections::HashMap;

/// Fix sequences for the top-layer cross, indexed by where the edge was
/// found and by the side its second color belongs to
/// (columns: Back, Left, Right, Front). Empty entries mean the edge is
/// already placed.
///
/// Row order matches the [`EdgePosition`] discriminants.
pub(crate) static TOP_EDGE_MOVES: [[&str; 4]; 24] = [
    // UpBack
    ["", "b b d l l", "b b di r r", "b b d d f f"],
    // UpBackFlipped
    [
        "b b di ri b r",
        "b b d d f li fi",
        "b b d d fi r f",
        "b b d li f l",
    ],
    // UpLeft
    ["l l di b b", "", "l l d d r r", "l l d f f"],
    // UpLeftFlipped
    ["li bi", "l l d f li fi", "l l d fi r f", "l f"],
    // UpFront
    ["f f d d b b", "f f di l l", "f f d r r", ""],
    // UpFrontFlipped
    ["f f di l bi li", "fi li", "f r", "f f d r fi ri"],
    // UpRight
    ["r r d b b", "r r d d l l", "", "r r di f f"],
    // UpRightFlipped
    ["r b", "r r di f li fi", "r r di fi r f", "ri fi"],
    // LeftFront
    ["l l bi l l", "fi d d f d l l", "li f l fi d r r", "f"],
    // LeftFrontFlipped
    ["l d li d d b b", "li", "u f f ui r", "fi ri d r fi"],
    // FrontRight
    ["ri d d r di b b", "ri di r di l l", "r", "f ri d r fi"],
    // FrontRightFlipped
    ["fi r r f r r b", "f di l l fi", "ri di fi r f", "fi"],
    // RightBack
    ["b", "bi d d b di l l", "bi di b r r", "bi d d b f f"],
    // RightBackFlipped
    ["bi r di ri b", "r d d ri l l", "ri", "b ri bi r di f f"],
    // BackLeft
    ["li d d l d b b", "l", "li d d l r r", "li d l f f"],
    // BackLeftFlipped
    ["bi", "b d bi l l", "b di bi r r", "b d d bi f f"],
    // DownFront
    ["d d b b", "di l l", "d r r", "f f"],
    // DownFrontFlipped
    ["r d ri b", "f li fi", "fi r f", "ri d r fi"],
    // DownLeft
    ["di b b", "l l", "d d r r", "d f f"],
    // DownLeftFlipped
    ["l bi li", "d d fi di f li", "f d fi r", "li f l"],
    // DownBack
    ["b b", "d l l", "di r r", "d d f f"],
    // DownBackFlipped
    ["r di ri b", "di b d bi l", "d bi di b ri", "ri di r fi"],
    // DownRight
    ["d b b", "d d l l", "r r", "di f f"],
    // DownRightFlipped
    ["ri b r", "fi di f li", "f di fi r", "di ri d r fi"],
];

lazy_static::lazy_static! {
    /// Sequences bringing the up-left-front corner cubie home from any
    /// other slot and spin. The solved placement has no entry.
    pub(crate) static ref CORNER_FIXES: HashMap<(CornerSlot, CornerSpin), &'static str> = {
        use CornerSlot::*;
        use CornerSpin::*;

        HashMap::from([
            ((UpLeftFront, Bca), "l di li d l di li"),
            ((UpLeftFront, Cab), "fi d f di fi d f"),
            ((UpLeftBack, Acb), "b d bi d l di li"),
            ((UpLeftBack, Bac), "b di bi d d l di li"),
            ((UpLeftBack, Cba), "b fi d bi f"),
            ((UpRightFront, Acb), "ri d d r fi d f"),
            ((UpRightFront, Bac), "ri l di r li"),
            ((UpRightFront, Cba), "f d d f f d f"),
            ((UpRightBack, Abc), "bi fi d d f b"),
            ((UpRightBack, Bca), "bi di l di li b"),
            ((UpRightBack, Cab), "r d d ri di fi d f"),
            ((DownLeftFront, Acb), "di fi d d f di fi d f"),
            ((DownLeftFront, Bac), "di fi d f"),
            ((DownLeftFront, Cba), "d l di li"),
            ((DownLeftBack, Abc), "fi d d f di fi d f"),
            ((DownLeftBack, Bca), "fi d f"),
            ((DownLeftBack, Cab), "d d l di li"),
            ((DownRightFront, Abc), "l d d li d l di li"),
            ((DownRightFront, Bca), "d d fi d f"),
            ((DownRightFront, Cab), "l di li"),
            ((DownRightBack, Acb), "l d li d l di li"),
            ((DownRightBack, Bac), "fi d d f"),
            ((DownRightBack, Cba), "l d d li"),
        ])
    };

    /// Sequences bringing the front-right middle edge home. The solved
    /// placement has no entry; top-layer positions cannot occur once the
    /// first layer is done.
    pub(crate) static ref MIDDLE_EDGE_FIXES: HashMap<EdgePosition, &'static str> = {
        use EdgePosition::*;

        HashMap::from([
            (LeftFront, "l di li di fi d f d ri d r d f di fi"),
            (LeftFrontFlipped, "l di li di fi d f f di fi di ri d r"),
            (FrontRightFlipped, "ri d r d f di fi d ri d r d f di fi"),
            (RightBack, "bi d b d r di ri di f di fi di ri d r"),
            (RightBackFlipped, "bi d b d r di ri ri d r d f di fi"),
            (BackLeft, "b di bi di li d l d d ri d r d f di fi"),
            (BackLeftFlipped, "b di bi di li d l d f di fi di ri d r"),
            (DownFront, "d d f di fi di ri d r"),
            (DownFrontFlipped, "di ri d r d f di fi"),
            (DownLeft, "di f di fi di ri d r"),
            (DownLeftFlipped, "ri d r d f di fi"),
            (DownBack, "f di fi di ri d r"),
            (DownBackFlipped, "d ri d r d f di fi"),
            (DownRight, "d f di fi di ri d r"),
            (DownRightFlipped, "d d ri d r d f di fi"),
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn every_top_edge_sequence_parses() {
        for row in TOP_EDGE_MOVES.iter() {
            for sequence in row {
                Move::parse_sequence(sequence).unwrap();
            }
        }
    }

    #[test]
    fn top_edge_rows_cover_every_position() {
        assert_eq!(TOP_EDGE_MOVES.len(), enum_iterator::all::<EdgePosition>().count());
    }

    #[test]
    fn solved_positions_have_empty_top_edge_entries() {
        assert_eq!(TOP_EDGE_MOVES[EdgePosition::UpBack as usize][0], "");
        assert_eq!(TOP_EDGE_MOVES[EdgePosition::UpLeft as usize][1], "");
        assert_eq!(TOP_EDGE_MOVES[EdgePosition::UpRight as usize][2], "");
        assert_eq!(TOP_EDGE_MOVES[EdgePosition::UpFront as usize][3], "");
    }

    #[test]
    fn corner_fixes_cover_all_unsolved_placements() {
        assert_eq!(CORNER_FIXES.len(), 23);
        assert!(!CORNER_FIXES.contains_key(&(CornerSlot::UpLeftFront, CornerSpin::Abc)));
        for sequence in CORNER_FIXES.values() {
            Move::parse_sequence(sequence).unwrap();
        }
    }

    #[test]
    fn middle_edge_fixes_cover_middle_and_bottom_slots() {
        assert_eq!(MIDDLE_EDGE_FIXES.len(), 15);
        assert!(!MIDDLE_EDGE_FIXES.contains_key(&EdgePosition::FrontRight));
        for sequence in MIDDLE_EDGE_FIXES.values() {
            Move::parse_sequence(sequence).unwrap();
        }
    }
}
