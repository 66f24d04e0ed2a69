//! Axial hex coordinates.
//!
//! Coordinates are integer pairs `(q, r)` on a pointy-topped hexagonal grid.
//! The third cube component is derived (`s = -q - r`), so conversions are
//! lossless and distance reduces to the Chebyshev metric in cube space.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// HexCoord
// ---------------------------------------------------------------------------

/// An axial hex coordinate. Structural equality; usable as a map key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

/// The six neighbor offsets, ordered top-right, right, bottom-right,
/// bottom-left, left, top-left. [`HexDirection`] indexes into this table.
pub const NEIGHBOR_OFFSETS: [HexCoord; 6] = [
    HexCoord::new(1, -1),
    HexCoord::new(1, 0),
    HexCoord::new(0, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(-1, 0),
    HexCoord::new(0, -1),
];

impl HexCoord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The derived cube component.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The full cube coordinate `(q, r, s)`.
    #[inline]
    pub const fn cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    /// The six adjacent coordinates, in [`NEIGHBOR_OFFSETS`] order.
    #[inline]
    pub fn neighbors(self) -> [HexCoord; 6] {
        NEIGHBOR_OFFSETS.map(|d| self + d)
    }

    /// Hex distance: the Chebyshev distance in cube coordinates, i.e. the
    /// minimum number of steps between the two cells.
    #[inline]
    pub fn distance(self, other: Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// All coordinates within `radius` steps of `self`, inclusive.
    ///
    /// A negative radius yields an empty list; radius 0 yields just `self`.
    pub fn disc(self, radius: i32) -> Vec<HexCoord> {
        if radius < 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for q in -radius..=radius {
            for r in (-radius).max(-q - radius)..=radius.min(-q + radius) {
                out.push(HexCoord::new(self.q + q, self.r + r));
            }
        }
        out
    }
}

impl Add for HexCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

// ---------------------------------------------------------------------------
// HexDirection
// ---------------------------------------------------------------------------

/// One of the six hex directions, named for a pointy-topped layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    TopRight = 0,
    Right = 1,
    BottomRight = 2,
    BottomLeft = 3,
    Left = 4,
    TopLeft = 5,
}

impl HexDirection {
    /// All six directions, in [`NEIGHBOR_OFFSETS`] order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::TopRight,
        HexDirection::Right,
        HexDirection::BottomRight,
        HexDirection::BottomLeft,
        HexDirection::Left,
        HexDirection::TopLeft,
    ];

    /// The coordinate offset for one step in this direction.
    #[inline]
    pub fn offset(self) -> HexCoord {
        NEIGHBOR_OFFSETS[self as usize]
    }

    /// The opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            HexDirection::TopRight => HexDirection::BottomLeft,
            HexDirection::Right => HexDirection::Left,
            HexDirection::BottomRight => HexDirection::TopLeft,
            HexDirection::BottomLeft => HexDirection::TopRight,
            HexDirection::Left => HexDirection::Right,
            HexDirection::TopLeft => HexDirection::BottomRight,
        }
    }
}
