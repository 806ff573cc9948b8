//! Canvas geometry value types.

use serde::{Deserialize, Serialize};

/// Smallest width or height a motif may have, in canvas pixels.
pub const MIN_SIZE: f64 = 20.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("bounds {width}x{height} cannot hold a minimum-size motif")]
    BoundsTooSmall { width: f64, height: f64 },
}

/// A point on the canvas (top-left corner of something, usually).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in canvas pixels.
///
/// Serialized as `{"x":..,"y":..,"width":..,"height":..}`, the layout used
/// for the persisted motif transform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn with_position(self, pos: Point) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Checks every placement invariant: minimum size and full containment.
    pub fn fits_within(&self, bounds: &Bounds) -> bool {
        self.is_finite()
            && self.width >= MIN_SIZE
            && self.height >= MIN_SIZE
            && self.x >= bounds.x
            && self.y >= bounds.y
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }
}

/// The garment's drawable region. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Rect", into = "Rect")]
pub struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    /// Builds bounds that can hold at least one minimum-size motif.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        let finite = x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width < MIN_SIZE || height < MIN_SIZE {
            return Err(GeometryError::BoundsTooSmall { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl TryFrom<Rect> for Bounds {
    type Error = GeometryError;

    fn try_from(r: Rect) -> Result<Self, Self::Error> {
        Bounds::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Self {
        b.as_rect()
    }
}
