//! Traffic vocabulary: compass approaches, turn types, lanes, and signals.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::geom::Vec2;

// ── Approach ──────────────────────────────────────────────────────────────────

/// The compass side of the intersection a vehicle originates from.
///
/// An origin side implies an inbound travel direction toward the opposite
/// side: vehicles from `North` travel south (down-screen, +y), vehicles from
/// `East` travel west, and so on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    North,
    East,
    South,
    West,
}

impl Approach {
    pub const ALL: [Approach; 4] = [
        Approach::North,
        Approach::East,
        Approach::South,
        Approach::West,
    ];

    /// Stable index for per-approach arrays (`[T; 4]`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Approach::North => 0,
            Approach::East  => 1,
            Approach::South => 2,
            Approach::West  => 3,
        }
    }

    /// Inbound travel heading for vehicles entering from this side.
    ///
    /// y grows downward, so `North` traffic (moving down-screen) has heading
    /// `+π/2` and `South` traffic `-π/2`.
    #[inline]
    pub fn heading(self) -> f64 {
        match self {
            Approach::North => FRAC_PI_2,
            Approach::East  => PI,
            Approach::South => -FRAC_PI_2,
            Approach::West  => 0.0,
        }
    }

    /// Unit vector of the inbound travel direction.
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::from_heading(self.heading())
    }

    #[inline]
    pub fn opposite(self) -> Approach {
        match self {
            Approach::North => Approach::South,
            Approach::East  => Approach::West,
            Approach::South => Approach::North,
            Approach::West  => Approach::East,
        }
    }

    /// The side of the intersection a vehicle leaves through after `turn`.
    ///
    /// Exhaustive over the full origin × turn domain so a new variant in
    /// either enum is a compile error here rather than a silent default.
    pub fn destination(self, turn: TurnType) -> Approach {
        match (self, turn) {
            (Approach::North, TurnType::Straight) => Approach::South,
            (Approach::North, TurnType::Left)     => Approach::West,
            (Approach::North, TurnType::Right)    => Approach::East,

            (Approach::East, TurnType::Straight) => Approach::West,
            (Approach::East, TurnType::Left)     => Approach::North,
            (Approach::East, TurnType::Right)    => Approach::South,

            (Approach::South, TurnType::Straight) => Approach::North,
            (Approach::South, TurnType::Left)     => Approach::East,
            (Approach::South, TurnType::Right)    => Approach::West,

            (Approach::West, TurnType::Straight) => Approach::East,
            (Approach::West, TurnType::Left)     => Approach::South,
            (Approach::West, TurnType::Right)    => Approach::North,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Approach::North => "north",
            Approach::East  => "east",
            Approach::South => "south",
            Approach::West  => "west",
        };
        f.write_str(s)
    }
}

// ── TurnType ──────────────────────────────────────────────────────────────────

/// The maneuver a vehicle performs at the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnType {
    Straight,
    Left,
    Right,
}

impl TurnType {
    /// Total heading change over the maneuver.  Left turns are
    /// counter-clockwise (`+π/2`), right turns clockwise (`-π/2`).
    #[inline]
    pub fn heading_delta(self) -> f64 {
        match self {
            TurnType::Straight => 0.0,
            TurnType::Left     => FRAC_PI_2,
            TurnType::Right    => -FRAC_PI_2,
        }
    }
}

impl fmt::Display for TurnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TurnType::Straight => "straight",
            TurnType::Left     => "left",
            TurnType::Right    => "right",
        };
        f.write_str(s)
    }
}

// ── Lane ──────────────────────────────────────────────────────────────────────

/// Inbound lane assignment.  Two lanes per approach.
///
/// The turn restriction is a hard rule, not a preference: a `RightTurn`
/// vehicle always turns right; a `Through` vehicle goes straight or left
/// (weighted 70/30 at spawn).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lane {
    /// Lane 0 — right turns only.
    RightTurn,
    /// Lane 1 — straight through or left turn.
    Through,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::RightTurn, Lane::Through];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Lane::RightTurn => 0,
            Lane::Through   => 1,
        }
    }

    /// Lateral offset of the lane center from the road centerline, as a
    /// fraction of the inbound side's width.
    #[inline]
    pub fn offset_factor(self) -> f64 {
        match self {
            Lane::RightTurn => 0.25,
            Lane::Through   => 0.75,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane{}", self.index())
    }
}

// ── Signals ───────────────────────────────────────────────────────────────────

/// Signal color shown to one approach.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightColor {
    Red,
    Yellow,
    Green,
}

impl LightColor {
    /// Whether a waiting vehicle may enter the intersection on this color.
    /// Yellow permits entry (vehicles already committed clear the box).
    #[inline]
    pub fn permits_entry(self) -> bool {
        !matches!(self, LightColor::Red)
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LightColor::Red    => "red",
            LightColor::Yellow => "yellow",
            LightColor::Green  => "green",
        };
        f.write_str(s)
    }
}

/// Per-approach signal state, owned and mutated by an external signal
/// controller and read-only inside the simulation core.
///
/// An absent entry is permissive: a vehicle facing no known signal is allowed
/// to proceed, so a stale or partial controller can never freeze traffic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightMap([Option<LightColor>; 4]);

impl LightMap {
    /// A map with no entries — every approach is treated as permitted.
    #[inline]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// A map showing `color` to every approach.
    pub fn uniform(color: LightColor) -> Self {
        Self([Some(color); 4])
    }

    #[inline]
    pub fn get(&self, approach: Approach) -> Option<LightColor> {
        self.0[approach.index()]
    }

    #[inline]
    pub fn set(&mut self, approach: Approach, color: LightColor) {
        self.0[approach.index()] = Some(color);
    }

    #[inline]
    pub fn clear(&mut self, approach: Approach) {
        self.0[approach.index()] = None;
    }

    /// `true` unless the approach is showing red.  Absent entries permit.
    #[inline]
    pub fn permits(&self, approach: Approach) -> bool {
        self.get(approach).is_none_or(LightColor::permits_entry)
    }
}

// ── ColorTag ──────────────────────────────────────────────────────────────────

/// Render color assigned to a vehicle at spawn.  Carried through snapshots
/// for drawing; the core itself never interprets it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTag {
    Crimson,
    Cobalt,
    Amber,
    Jade,
    Slate,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Crimson,
        ColorTag::Cobalt,
        ColorTag::Amber,
        ColorTag::Jade,
        ColorTag::Slate,
    ];
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorTag::Crimson => "crimson",
            ColorTag::Cobalt  => "cobalt",
            ColorTag::Amber   => "amber",
            ColorTag::Jade    => "jade",
            ColorTag::Slate   => "slate",
        };
        f.write_str(s)
    }
}
