//! Cell states and the per-cell record
//!
//! The discriminants are the values the JS side paints from `states_ptr`,
//! so they must never be renumbered.

use serde::{Deserialize, Serialize};

use crate::core::{SandboxError, SandboxResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
    Trapper = 2,
    Voyager = 3,
    Builder = 4,
}

impl CellState {
    pub const ALL: [CellState; 5] = [
        CellState::Dead,
        CellState::Alive,
        CellState::Trapper,
        CellState::Voyager,
        CellState::Builder,
    ];

    /// Gravity mode reads Alive cells as sand.
    pub const SAND: CellState = CellState::Alive;
    /// Gravity mode reads Trapper cells as water.
    pub const WATER: CellState = CellState::Trapper;

    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellState::Dead),
            1 => Some(CellState::Alive),
            2 => Some(CellState::Trapper),
            3 => Some(CellState::Voyager),
            4 => Some(CellState::Builder),
            _ => None,
        }
    }

    pub fn try_from_u8(value: u8) -> SandboxResult<Self> {
        Self::from_u8(value).ok_or(SandboxError::UnknownState(value))
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Alive, Voyager and Builder all count toward birth and survival.
    #[inline]
    pub fn is_alive_type(self) -> bool {
        matches!(self, CellState::Alive | CellState::Voyager | CellState::Builder)
    }

    /// Display color, ABGR packed for direct canvas `ImageData` copies
    #[inline]
    pub fn color(self) -> u32 {
        match self {
            CellState::Dead => COLOR_DEAD,
            CellState::Alive => COLOR_ALIVE,
            CellState::Trapper => COLOR_TRAPPER,
            CellState::Voyager => COLOR_VOYAGER,
            CellState::Builder => COLOR_BUILDER,
        }
    }
}

// ABGR (little-endian 0xAABBGGRR -> bytes [RR, GG, BB, AA])
pub const COLOR_DEAD: u32 = 0xFFFF_FFFF; // #FFFFFF
pub const COLOR_ALIVE: u32 = 0xFF00_0000; // #000000
pub const COLOR_TRAPPER: u32 = 0xFF00_8000; // #008000
pub const COLOR_VOYAGER: u32 = 0xFFCE_008D; // #8D00CE
pub const COLOR_BUILDER: u32 = 0xFFFF_0000; // #0000FF

/// One grid slot.
///
/// `cooldown` only means something for builders: `Some(n)` is the number of
/// ticks left before the next stamp, `None` marks a dormant builder (a
/// single-shot builder that already fired). Every other state carries `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub cooldown: Option<u32>,
}

impl Cell {
    pub const DEAD: Cell = Cell { state: CellState::Dead, cooldown: None };

    #[inline]
    pub const fn new(state: CellState) -> Self {
        Self { state, cooldown: None }
    }

    #[inline]
    pub const fn builder(cooldown: Option<u32>) -> Self {
        Self { state: CellState::Builder, cooldown }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == CellState::Dead
    }
}

impl From<CellState> for Cell {
    fn from(state: CellState) -> Self {
        Cell::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip_through_from_u8() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_u8(state.as_u8()), Some(state));
        }
        assert_eq!(CellState::from_u8(5), None);
        assert!(matches!(CellState::try_from_u8(9), Err(SandboxError::UnknownState(9))));
    }

    #[test]
    fn alive_type_excludes_dead_and_trapper() {
        assert!(CellState::Alive.is_alive_type());
        assert!(CellState::Voyager.is_alive_type());
        assert!(CellState::Builder.is_alive_type());
        assert!(!CellState::Dead.is_alive_type());
        assert!(!CellState::Trapper.is_alive_type());
    }

    #[test]
    fn trapper_color_is_opaque_green() {
        let c = CellState::Trapper.color();
        assert_eq!(c & 0xFF, 0x00); // R
        assert_eq!((c >> 8) & 0xFF, 0x80); // G
        assert_eq!(c >> 24, 0xFF); // A
    }
}
