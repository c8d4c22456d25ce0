//! Quadrant selectors for the midpoint circle helpers.

bitflags::bitflags! {
    /// Quadrants emitted by [`Canvas::draw_circle_helper`](crate::Canvas::draw_circle_helper).
    ///
    /// Each flag selects one pair of mirrored octant points, offset from the
    /// center by `(dx, dy)` with these signs:
    ///
    /// | flag           | dx | dy |
    /// |----------------|----|----|
    /// | `TOP_LEFT`     | -  | -  |
    /// | `TOP_RIGHT`    | +  | -  |
    /// | `BOTTOM_RIGHT` | +  | +  |
    /// | `BOTTOM_LEFT`  | -  | +  |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT = 0x1;
        const TOP_RIGHT = 0x2;
        const BOTTOM_RIGHT = 0x4;
        const BOTTOM_LEFT = 0x8;
        const ALL = Self::TOP_LEFT.bits()
            | Self::TOP_RIGHT.bits()
            | Self::BOTTOM_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits();
    }
}

bitflags::bitflags! {
    /// Halves filled by [`Canvas::fill_circle_helper`](crate::Canvas::fill_circle_helper).
    ///
    /// `RIGHT` spans columns at `+dx` from the center, `LEFT` at `-dx`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Halves: u8 {
        const RIGHT = 0x1;
        const LEFT = 0x2;
        const BOTH = Self::RIGHT.bits() | Self::LEFT.bits();
    }
}
