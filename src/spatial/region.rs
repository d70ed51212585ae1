//! Rectangular sub-regions of the target image and quadrant subdivision
//!
//! A region describes where a recursive composition call reads from the
//! target and writes into the output. Regions are plain values; the
//! quadtree exists only implicitly through recursive subdivision, never
//! as an allocated tree of nodes.

/// A sub-rectangle of the target image in output coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Horizontal offset of the left edge
    pub x: u32,
    /// Vertical offset of the top edge
    pub y: u32,
    /// Extent along the horizontal axis
    pub width: u32,
    /// Extent along the vertical axis
    pub height: u32,
}

impl Region {
    /// Create a region from an offset and extent
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The full-image region anchored at the origin
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of pixels covered by the region
    pub const fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the region covers no pixels at all
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the region is small enough to fill with a single tile
    ///
    /// Triggers when *either* extent drops below the floor, not only when
    /// both do, so very wide-but-short or tall-but-narrow regions are
    /// processed whole rather than split further.
    pub const fn is_leaf(self, min_extent: u32) -> bool {
        self.width < min_extent || self.height < min_extent
    }

    /// Split into upper-left, upper-right, lower-left, lower-right quadrants
    ///
    /// Both axes are bisected with truncating division and the right/lower
    /// quadrants absorb the odd remainder pixel, so the four quadrants
    /// exactly tile the region with no gaps and no overlaps.
    pub const fn quadrants(self) -> [Self; 4] {
        let left_width = self.width / 2;
        let right_width = self.width - left_width;
        let top_height = self.height / 2;
        let bottom_height = self.height - top_height;

        [
            Self::new(self.x, self.y, left_width, top_height),
            Self::new(self.x + left_width, self.y, right_width, top_height),
            Self::new(self.x, self.y + top_height, left_width, bottom_height),
            Self::new(
                self.x + left_width,
                self.y + top_height,
                right_width,
                bottom_height,
            ),
        ]
    }
}
