use crate::align::{Align, JustifyContent};
use crate::color::Color;
use crate::math::Axis;

/// Converts an integer percentage into the encoded length stored in
/// [`Style::width`] / [`Style::height`].
///
/// Percentages are stored as negative fractions, so `percent(50)` is `-0.5`
/// and `percent(100)` is `-1.0`. Values are clamped to `0..=100`.
/// ```
/// assert_eq!(gala::percent(50), -0.5);
/// assert_eq!(gala::percent(250), -1.0);
/// ```
pub fn percent(value: i32) -> f32 {
    -(value.clamp(0, 100) as f32 / 100.0)
}

/// A decoded width or height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Sized from the node's children.
    Auto,
    /// Fixed size in pixels.
    Points(f32),
    /// Fraction (`0.0..=1.0`) of the parent's resolved size.
    Percent(f32),
}

impl Length {
    /// Decodes a stored width or height: positive values are pixels, values in
    /// `[-1, 0)` are percentages and zero is auto.
    pub fn from_encoded(value: f32) -> Self {
        if value > 0.0 {
            Length::Points(value)
        } else if value < 0.0 && value >= -1.0 {
            Length::Percent(-value)
        } else {
            Length::Auto
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Length::Auto)
    }

    pub fn is_percent(self) -> bool {
        matches!(self, Length::Percent(_))
    }
}

fn sanitize_length(value: f32) -> f32 {
    if value.is_nan() || value < -1.0 {
        0.0
    } else {
        value
    }
}

/// Represents padding values for each side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Padding {
    /// Creates a new `Padding` with individual values for each side.
    pub fn new(left: u16, right: u16, top: u16, bottom: u16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Sets the same padding value for all sides.
    pub fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left and right only.
    pub fn horizontal(value: u16) -> Self {
        Self::new(value, value, 0, 0)
    }

    /// Top and bottom only.
    pub fn vertical(value: u16) -> Self {
        Self::new(0, 0, value, value)
    }

    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left as f32,
            Axis::Vertical => self.top as f32,
        }
    }

    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right as f32,
            Axis::Vertical => self.bottom as f32,
        }
    }

    /// Sum of both sides along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        self.start(axis) + self.end(axis)
    }
}

impl From<u16> for Padding {
    fn from(value: u16) -> Self {
        Self::all(value)
    }
}

impl From<(u16, u16, u16, u16)> for Padding {
    /// Creates padding from a tuple in CSS order: (top, right, bottom, left).
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Outer spacing of a node. Unlike padding, margins may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margin {
    pub left: i16,
    pub right: i16,
    pub top: i16,
    pub bottom: i16,
}

impl Margin {
    pub fn new(left: i16, right: i16, top: i16, bottom: i16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn all(value: i16) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left as f32,
            Axis::Vertical => self.top as f32,
        }
    }

    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right as f32,
            Axis::Vertical => self.bottom as f32,
        }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        self.start(axis) + self.end(axis)
    }
}

impl From<i16> for Margin {
    fn from(value: i16) -> Self {
        Self::all(value)
    }
}

impl From<(i16, i16, i16, i16)> for Margin {
    /// CSS order: (top, right, bottom, left).
    fn from((top, right, bottom, left): (i16, i16, i16, i16)) -> Self {
        Self { left, right, top, bottom }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Position {
    /// Takes part in the parent's flow; offsets shift it without moving siblings.
    #[default]
    Relative,
    /// Placed from the parent's origin by its offsets, outside the flow.
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Display {
    #[default]
    Flex,
    /// The node and its whole subtree are neither laid out in flow nor painted.
    None,
}

/// Defines the main axis a container arranges its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexDirection {
    /// Arranges children from left to right.
    #[default]
    Row,
    /// Arranges children from top to bottom.
    Column,
}

impl FlexDirection {
    pub fn main_axis(self) -> Axis {
        match self {
            FlexDirection::Row => Axis::Horizontal,
            FlexDirection::Column => Axis::Vertical,
        }
    }

    pub fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

/// Box-model and flex properties of a node.
///
/// `width` and `height` use the encoded form decoded by [`Length::from_encoded`].
/// Offsets (`left`, `right`, `top`, `bottom`) of zero count as unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub width: f32,
    pub height: f32,
    pub flex: u16,
    pub gap: u16,
    pub z_index: i16,
    pub left: i16,
    pub right: i16,
    pub top: i16,
    pub bottom: i16,
    pub padding: Padding,
    pub margin: Margin,
    pub position: Position,
    pub display: Display,
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: Align,
    /// Overrides the parent's `align_items` for this node when set.
    pub align_self: Option<Align>,
    pub background_color: Color,
}

impl Style {
    // ========================================================================
    // Spacing
    // ========================================================================

    #[inline]
    pub fn padding(&mut self, padding: impl Into<Padding>) -> &mut Self {
        self.padding = padding.into();
        self
    }

    #[inline]
    pub fn padding_left(&mut self, value: u16) -> &mut Self {
        self.padding.left = value;
        self
    }

    #[inline]
    pub fn padding_right(&mut self, value: u16) -> &mut Self {
        self.padding.right = value;
        self
    }

    #[inline]
    pub fn padding_top(&mut self, value: u16) -> &mut Self {
        self.padding.top = value;
        self
    }

    #[inline]
    pub fn padding_bottom(&mut self, value: u16) -> &mut Self {
        self.padding.bottom = value;
        self
    }

    #[inline]
    pub fn margin(&mut self, margin: impl Into<Margin>) -> &mut Self {
        self.margin = margin.into();
        self
    }

    #[inline]
    pub fn margin_left(&mut self, value: i16) -> &mut Self {
        self.margin.left = value;
        self
    }

    #[inline]
    pub fn margin_right(&mut self, value: i16) -> &mut Self {
        self.margin.right = value;
        self
    }

    #[inline]
    pub fn margin_top(&mut self, value: i16) -> &mut Self {
        self.margin.top = value;
        self
    }

    #[inline]
    pub fn margin_bottom(&mut self, value: i16) -> &mut Self {
        self.margin.bottom = value;
        self
    }

    /// Spacing between adjacent in-flow children along the main axis.
    #[inline]
    pub fn gap(&mut self, gap: u16) -> &mut Self {
        self.gap = gap;
        self
    }

    // ========================================================================
    // Positioning
    // ========================================================================

    #[inline]
    pub fn position(&mut self, position: Position) -> &mut Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn relative(&mut self) -> &mut Self {
        self.position(Position::Relative)
    }

    #[inline]
    pub fn absolute(&mut self) -> &mut Self {
        self.position(Position::Absolute)
    }

    /// For absolute nodes, the distance from the parent's left edge. For
    /// relative nodes, a shift applied after flow placement.
    ///
    /// With both `left` and `right` set and no declared width, the node
    /// stretches between the two offsets. The same holds for `top`/`bottom`.
    #[inline]
    pub fn left(&mut self, value: i16) -> &mut Self {
        self.left = value;
        self
    }

    #[inline]
    pub fn right(&mut self, value: i16) -> &mut Self {
        self.right = value;
        self
    }

    #[inline]
    pub fn top(&mut self, value: i16) -> &mut Self {
        self.top = value;
        self
    }

    #[inline]
    pub fn bottom(&mut self, value: i16) -> &mut Self {
        self.bottom = value;
        self
    }

    /// Paint order; zero inherits the parent's resolved z-index.
    #[inline]
    pub fn z_index(&mut self, z_index: i16) -> &mut Self {
        self.z_index = z_index;
        self
    }

    // ========================================================================
    // Flex
    // ========================================================================

    #[inline]
    pub fn display(&mut self, display: Display) -> &mut Self {
        self.display = display;
        self
    }

    #[inline]
    pub fn direction(&mut self, direction: FlexDirection) -> &mut Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn row(&mut self) -> &mut Self {
        self.direction(FlexDirection::Row)
    }

    #[inline]
    pub fn column(&mut self) -> &mut Self {
        self.direction(FlexDirection::Column)
    }

    #[inline]
    pub fn justify_content(&mut self, justify: JustifyContent) -> &mut Self {
        self.justify_content = justify;
        self
    }

    #[inline]
    pub fn align_items(&mut self, align: Align) -> &mut Self {
        self.align_items = align;
        self
    }

    #[inline]
    pub fn align_self(&mut self, align: Align) -> &mut Self {
        self.align_self = Some(align);
        self
    }

    /// Share of the parent's remaining main-axis space. Zero opts out.
    #[inline]
    pub fn flex(&mut self, flex: u16) -> &mut Self {
        self.flex = flex;
        self
    }

    // ========================================================================
    // Size and color
    // ========================================================================

    /// Pixels when positive, a percentage when in `[-1, 0)` (see [`percent`]),
    /// auto when zero. Anything below `-1` clamps to auto.
    #[inline]
    pub fn width(&mut self, width: f32) -> &mut Self {
        self.width = sanitize_length(width);
        self
    }

    /// Same encoding as [`Style::width`].
    #[inline]
    pub fn height(&mut self, height: f32) -> &mut Self {
        self.height = sanitize_length(height);
        self
    }

    #[inline]
    pub fn size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width(width).height(height)
    }

    #[inline]
    pub fn background_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.background_color = color.into();
        self
    }

    // ========================================================================
    // Axis helpers
    // ========================================================================

    pub fn length(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => Length::from_encoded(self.width),
            Axis::Vertical => Length::from_encoded(self.height),
        }
    }

    /// `(left, right)` or `(top, bottom)`.
    pub fn offsets(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.left as f32, self.right as f32),
            Axis::Vertical => (self.top as f32, self.bottom as f32),
        }
    }

    /// Relative and displayed, so it takes part in the parent's flow.
    pub fn in_flow(&self) -> bool {
        self.position == Position::Relative && self.display == Display::Flex
    }
}
