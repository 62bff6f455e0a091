//! Builder spawn patterns
//!
//! Offsets are (drow, dcol) relative to the builder. Only one pattern is
//! active per world; `SandboxConfig::pattern` picks it.

use serde::{Deserialize, Serialize};

use super::cell::CellState;

/// One stamped cell: (drow, dcol, state)
pub type PatternCell = (i32, i32, CellState);

const A: CellState = CellState::Alive;
const T: CellState = CellState::Trapper;
const V: CellState = CellState::Voyager;

const GLIDER: &[PatternCell] = &[(-1, 2, A), (-1, 3, A), (-1, 4, A), (-2, 4, A), (-3, 3, A)];

const BRUSH: &[PatternCell] = &[
    (1, 2, V),
    (2, 4, A),
    (2, 5, A),
    (3, 4, A),
    (3, 5, A),
    (3, 7, T),
];

const ROCKET: &[PatternCell] = &[
    (1, 4, V),
    (2, 6, A),
    (2, 7, A),
    (3, 6, A),
    (3, 7, A),
    (4, 6, A),
    (4, 7, A),
];

const MINI_ROCKET: &[PatternCell] = &[(0, 4, A), (1, 4, A), (-1, 5, V), (0, 6, V)];

const R_PENTOMINO: &[PatternCell] = &[(-2, 27, A), (-2, 26, A), (-1, 27, A), (-3, 27, A), (-3, 28, A)];

const STAR_SLUG: &[PatternCell] = &[(-3, 13, V), (-2, 13, A), (-1, 14, V)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Glider,
    Brush,
    Rocket,
    #[default]
    MiniRocket,
    RPentomino,
    StarSlug,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Glider,
        PatternKind::Brush,
        PatternKind::Rocket,
        PatternKind::MiniRocket,
        PatternKind::RPentomino,
        PatternKind::StarSlug,
    ];

    #[inline]
    pub fn cells(self) -> &'static [PatternCell] {
        match self {
            PatternKind::Glider => GLIDER,
            PatternKind::Brush => BRUSH,
            PatternKind::Rocket => ROCKET,
            PatternKind::MiniRocket => MINI_ROCKET,
            PatternKind::RPentomino => R_PENTOMINO,
            PatternKind::StarSlug => STAR_SLUG,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Glider => "glider",
            PatternKind::Brush => "brush",
            PatternKind::Rocket => "rocket",
            PatternKind::MiniRocket => "mini-rocket",
            PatternKind::RPentomino => "r-pentomino",
            PatternKind::StarSlug => "star-slug",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}
