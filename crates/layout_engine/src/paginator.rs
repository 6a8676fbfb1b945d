//! Pagination
//!
//! A [`PageLayout`] is the vertical cursor of a document being drawn. The
//! caller owns it, asks it for space before placing each element, and
//! advances it afterwards. Coordinates are in points from the top-left of
//! the page.
//!
//! The layout never loops on oversized elements: a break only happens when
//! the current page already holds something, so an element taller than a
//! page is placed once on a fresh page.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// A4 (210mm x 297mm), rounded to whole points
    #[default]
    A4,
    /// US Letter (8.5" x 11")
    Letter,
    /// US Legal (8.5" x 14")
    Legal,
    /// Custom size in points
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Get the width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Page margins in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl PageMargins {
    /// The same margin on all four sides
    pub fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(40.0)
    }
}

/// Outcome of [`PageLayout::ensure_space`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBreak {
    /// The element fits on the current page
    None,
    /// A new page was started
    Broken,
}

/// Cursor state of a paginated document
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margins: PageMargins,
    /// Vertical advance of one body line
    pub line_height: f32,
    /// Current vertical position, measured from the top of the page
    pub cursor_y: f32,
    /// Zero-based index of the current page
    pub page_index: usize,
}

impl PageLayout {
    /// Create a layout with the cursor at the top of the first page
    pub fn new(size: PageSize, margins: PageMargins, line_height: f32) -> Result<Self> {
        let (page_width, page_height) = size.dimensions();

        if !(page_width.is_finite() && page_height.is_finite())
            || page_width <= 0.0
            || page_height <= 0.0
        {
            return Err(LayoutError::InvalidPageSetup(format!(
                "page size {page_width}x{page_height} is not positive"
            )));
        }
        let margin_values = [margins.top, margins.right, margins.bottom, margins.left];
        if margin_values.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(LayoutError::InvalidPageSetup(
                "margins must be finite and non-negative".into(),
            ));
        }
        if margins.left + margins.right >= page_width || margins.top + margins.bottom >= page_height {
            return Err(LayoutError::InvalidPageSetup(
                "margins leave no content area".into(),
            ));
        }
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "line height {line_height} must be positive"
            )));
        }

        Ok(Self {
            page_width,
            page_height,
            margins,
            line_height,
            cursor_y: margins.top,
            page_index: 0,
        })
    }

    /// Top of the content area
    pub fn top(&self) -> f32 {
        self.margins.top
    }

    /// Lowest y the cursor may reach on a page
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margins.bottom
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// Whether an element of `height` fits below the cursor on this page
    pub fn fits(&self, height: f32) -> bool {
        self.cursor_y + height <= self.bottom_limit()
    }

    /// Whether nothing has been placed on the current page yet
    pub fn at_page_top(&self) -> bool {
        self.cursor_y <= self.top()
    }

    /// Make room for an element of `height`, starting a new page if needed
    ///
    /// A new page is only started when the current one already holds
    /// content, so the call never breaks twice for the same element.
    pub fn ensure_space(&mut self, height: f32) -> PageBreak {
        if self.fits(height) || self.at_page_top() {
            return PageBreak::None;
        }
        self.cursor_y = self.top();
        self.page_index += 1;
        PageBreak::Broken
    }

    /// Move the cursor down by `height` without checking bounds
    pub fn advance(&mut self, height: f32) {
        self.cursor_y += height;
    }

    /// Current drawing position at the left margin
    pub fn position(&self) -> (f32, f32) {
        (self.margins.left, self.cursor_y)
    }

    pub fn page_count(&self) -> usize {
        self.page_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn a4() -> PageLayout {
        PageLayout::new(PageSize::A4, PageMargins::default(), 14.0).unwrap()
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(PageSize::A4.dimensions(), (595.0, 842.0));
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(
            PageSize::Custom { width: 100.0, height: 200.0 }.dimensions(),
            (100.0, 200.0)
        );
    }

    #[test]
    fn test_new_layout() {
        let layout = a4();
        assert_eq!(layout.cursor_y, 40.0);
        assert_eq!(layout.bottom_limit(), 802.0);
        assert_eq!(layout.content_width(), 515.0);
        assert_eq!(layout.position(), (40.0, 40.0));
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn test_invalid_setup() {
        assert!(PageLayout::new(PageSize::A4, PageMargins::uniform(400.0), 14.0).is_err());
        assert!(PageLayout::new(PageSize::A4, PageMargins::default(), 0.0).is_err());
        assert!(PageLayout::new(
            PageSize::Custom { width: -1.0, height: 10.0 },
            PageMargins::uniform(0.0),
            14.0
        )
        .is_err());
    }

    #[test]
    fn test_ensure_space_breaks() {
        let mut layout = a4();
        layout.advance(740.0);
        assert_eq!(layout.ensure_space(14.0), PageBreak::None);
        layout.advance(14.0);
        assert_eq!(layout.ensure_space(14.0), PageBreak::Broken);
        assert_eq!(layout.cursor_y, 40.0);
        assert_eq!(layout.page_index, 1);
    }

    #[test]
    fn test_oversized_element_does_not_loop() {
        let mut layout = a4();
        assert_eq!(layout.ensure_space(5000.0), PageBreak::None);
        layout.advance(5000.0);
        assert_eq!(layout.ensure_space(5000.0), PageBreak::Broken);
        assert_eq!(layout.ensure_space(5000.0), PageBreak::None);
        assert_eq!(layout.page_count(), 2);
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_on_page(heights in proptest::collection::vec(1.0f32..60.0, 1..300)) {
            let mut layout = a4();
            for h in heights {
                layout.ensure_space(h);
                layout.advance(h);
                prop_assert!(layout.cursor_y <= layout.bottom_limit());
            }
        }

        #[test]
        fn prop_page_count_bounded(lines in 0usize..500) {
            let mut layout = a4();
            for _ in 0..lines {
                layout.ensure_space(14.0);
                layout.advance(14.0);
            }
            let per_page = ((layout.bottom_limit() - layout.top()) / 14.0).floor() as usize;
            prop_assert!(layout.page_count() <= lines / per_page + 1);
        }
    }
}
