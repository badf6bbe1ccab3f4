//! Move-sequence rewriting: cancellation of redundant turns and sequence
//! reversal.
//!
//! The optimizer walks the sequence accumulating a signed turn count per
//! opposite-move pair. Moves on an independent, commuting layer are
//! deferred, reduced recursively, and spliced back in front of the group's
//! net result. A single pass is repeated until the sequence stops
//! shrinking.

use crate::prelude::*;

use smallvec::SmallVec;

/// Collapse redundant and cancelling turns in a move-sequence string.
/// Unrecognized tokens are dropped.
pub fn optimize_sequence(sequence: &str) -> String {
    Move::format_sequence(&optimize_moves(&Move::parse_lenient(sequence)))
}

/// Typed form of [`optimize_sequence`].
pub fn optimize_moves(moves: &[Move]) -> Vec<Move> {
    let mut current = moves.to_vec();
    loop {
        let reduced = reduce_once(&current);
        if reduced.len() >= current.len() {
            return reduced;
        }
        current = reduced;
    }
}

/// Map a sequence to the sequence that undoes it: each move inverted, in
/// reverse order, then optimized. Unrecognized tokens are dropped.
pub fn reverse_sequence(sequence: &str) -> String {
    let mut inverted: Vec<Move> = Move::parse_lenient(sequence)
        .iter()
        .map(|m| m.inverse())
        .collect();
    inverted.reverse();
    Move::format_sequence(&optimize_moves(&inverted))
}

/// An opposite-move pair and the moves that commute with it because they
/// turn an independent layer on the same axis.
struct TurnGroup {
    add: Move,
    subtract: Move,
    commuting: &'static [Move],
}

fn turn_group(m: Move) -> TurnGroup {
    use Move::*;
    let (add, subtract, commuting): (Move, Move, &'static [Move]) = match m {
        L | Li => (L, Li, &[R, Ri, Ls, Rs]),
        R | Ri => (R, Ri, &[L, Li, Ls, Rs]),
        F | Fi => (F, Fi, &[B, Bi, Fs, Bs]),
        B | Bi => (B, Bi, &[F, Fi, Fs, Bs]),
        U | Ui => (U, Ui, &[D, Di, Us, Ds]),
        D | Di => (D, Di, &[U, Ui, Us, Ds]),
        Us | Ds => (Us, Ds, &[U, Ui, D, Di]),
        Ls | Rs => (Ls, Rs, &[L, Li, R, Ri]),
        Fs | Bs => (Fs, Bs, &[F, Fi, B, Bi]),
        Cu | Cd => (Cu, Cd, &[]),
        Cl | Cr => (Cl, Cr, &[]),
    };
    TurnGroup {
        add,
        subtract,
        commuting,
    }
}

fn reduce_once(moves: &[Move]) -> Vec<Move> {
    let mut out = Vec::with_capacity(moves.len());
    let mut index = 0;

    while index < moves.len() {
        let group = turn_group(moves[index]);
        let mut count: i32 = 0;
        let mut deferred: SmallVec<[Move; 8]> = SmallVec::new();

        while index < moves.len() {
            let m = moves[index];
            if m == group.add {
                count += 1;
            } else if m == group.subtract {
                count -= 1;
            } else if group.commuting.contains(&m) {
                deferred.push(m);
            } else {
                break;
            }
            index += 1;
        }

        out.extend(reduce_once(&deferred));

        // Net turns mod 4: three quarter-turns one way are one the other.
        match count % 4 {
            1 | -3 => out.push(group.add),
            2 | -2 => {
                out.push(group.add);
                out.push(group.add);
            }
            3 | -1 => out.push(group.subtract),
            _ => {}
        }
    }

    out
}
