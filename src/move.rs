use std::fmt;

/// The closed alphabet of cube moves.
///
/// Face turns rotate an outer layer (clockwise viewed from outside that
/// face, `i` suffix for counter-clockwise), slice turns rotate the middle
/// layer parallel to the named face, and the `C*` moves reorient the whole
/// cube without changing its relative configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Move {
    U,
    Ui,
    D,
    Di,
    L,
    Li,
    R,
    Ri,
    F,
    Fi,
    B,
    Bi,
    Us,
    Ds,
    Ls,
    Rs,
    Fs,
    Bs,
    Cu,
    Cd,
    Cl,
    Cr,
}

impl Move {
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all()
    }

    /// The 18-move scramble alphabet: every turn except the whole-cube
    /// reorientations.
    pub fn turns() -> impl Iterator<Item = Move> {
        Move::all().filter(|m| !m.is_reorientation())
    }

    pub fn is_reorientation(self) -> bool {
        matches!(self, Move::Cu | Move::Cd | Move::Cl | Move::Cr)
    }

    /// The move that undoes this one.
    ///
    /// Slice turns invert to the opposite slice name; reorientations pair
    /// up/down and left/right.
    pub fn inverse(self) -> Move {
        use Move::*;
        match self {
            U => Ui,
            Ui => U,
            D => Di,
            Di => D,
            L => Li,
            Li => L,
            R => Ri,
            Ri => R,
            F => Fi,
            Fi => F,
            B => Bi,
            Bi => B,
            Us => Ds,
            Ds => Us,
            Ls => Rs,
            Rs => Ls,
            Fs => Bs,
            Bs => Fs,
            Cu => Cd,
            Cd => Cu,
            Cl => Cr,
            Cr => Cl,
        }
    }

    /// Strict sequence parse: any unrecognized token is an error.
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|token| token.parse()).collect()
    }

    /// Permissive sequence parse: unrecognized tokens are dropped.
    pub fn parse_lenient(s: &str) -> Vec<Move> {
        s.split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        use Move::*;
        let token = s.to_ascii_lowercase();
        Ok(match token.as_str() {
            "u" => U,
            "ui" => Ui,
            "d" => D,
            "di" => Di,
            "l" => L,
            "li" => Li,
            "r" => R,
            "ri" => Ri,
            "f" => F,
            "fi" => Fi,
            "b" => B,
            "bi" => Bi,
            "us" => Us,
            "ds" => Ds,
            "ls" => Ls,
            "rs" => Rs,
            "fs" => Fs,
            "bs" => Bs,
            "cu" => Cu,
            "cd" => Cd,
            "cl" => Cl,
            "cr" => Cr,
            _ => return Err(anyhow::anyhow!("Unrecognized move {}", s)),
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Move::*;
        let token = match self {
            U => "U",
            Ui => "Ui",
            D => "D",
            Di => "Di",
            L => "L",
            Li => "Li",
            R => "R",
            Ri => "Ri",
            F => "F",
            Fi => "Fi",
            B => "B",
            Bi => "Bi",
            Us => "Us",
            Ds => "Ds",
            Ls => "Ls",
            Rs => "Rs",
            Fs => "Fs",
            Bs => "Bs",
            Cu => "Cu",
            Cd => "Cd",
            Cl => "Cl",
            Cr => "Cr",
        };
        write!(f, "{}", token)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary(g: &mut quickcheck::Gen) -> Move {
        let all: Vec<Move> = Move::all().collect();
        *g.choose(&all).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_22_moves() {
        assert_eq!(Move::all().count(), 22);
        assert_eq!(Move::turns().count(), 18);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("fi".parse::<Move>().unwrap(), Move::Fi);
        assert_eq!("FI".parse::<Move>().unwrap(), Move::Fi);
        assert_eq!("Cu".parse::<Move>().unwrap(), Move::Cu);
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert!("x".parse::<Move>().is_err());
        assert!("u2".parse::<Move>().is_err());
        assert!(Move::parse_sequence("u x d").is_err());
    }

    #[test]
    fn lenient_parse_drops_unknown_tokens() {
        assert_eq!(Move::parse_lenient("u ** pause d"), vec![Move::U, Move::D]);
    }

    #[test]
    fn inverse_is_an_involution() {
        for m in Move::all() {
            assert_eq!(m.inverse().inverse(), m);
            assert_ne!(m.inverse(), m);
        }
    }

    #[test]
    fn slice_inverses_cross_the_cube() {
        assert_eq!(Move::Us.inverse(), Move::Ds);
        assert_eq!(Move::Ls.inverse(), Move::Rs);
        assert_eq!(Move::Fs.inverse(), Move::Bs);
        assert_eq!(Move::Cu.inverse(), Move::Cd);
        assert_eq!(Move::Cl.inverse(), Move::Cr);
    }

    #[quickcheck_macros::quickcheck]
    fn display_round_trips(m: Move) -> bool {
        m.to_string().parse::<Move>().unwrap() == m
    }
}
