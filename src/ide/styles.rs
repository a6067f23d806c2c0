//! Presentation of each classification kind.
//!
//! The classifier itself only produces kinds; a rendering layer looks up the
//! [`Style`] of each kind in a [`ClassificationStyles`] value supplied at
//! construction time.

use super::ClassificationKind;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    pub const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x00);
    pub const BROWN: Rgb = Rgb::new(0xA5, 0x2A, 0x2A);
    pub const CORNFLOWER_BLUE: Rgb = Rgb::new(0x64, 0x95, 0xED);
    pub const ORANGE: Rgb = Rgb::new(0xFF, 0xA5, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinePattern {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Underline {
    pub color: Rgb,
    pub pattern: LinePattern,
}

/// How one classification kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub underline: Option<Underline>,
}

impl Style {
    pub const fn foreground(color: Rgb) -> Self {
        Self {
            foreground: Some(color),
            underline: None,
        }
    }

    pub const fn underline(color: Rgb, pattern: LinePattern) -> Self {
        Self {
            foreground: None,
            underline: Some(Underline { color, pattern }),
        }
    }
}

/// Style of every classification kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassificationStyles {
    pub keyword: Style,
    pub comment: Style,
    pub string: Style,
    pub class_name: Style,
    pub indent_error: Style,
}

impl Default for ClassificationStyles {
    fn default() -> Self {
        Self {
            keyword: Style::foreground(Rgb::BLUE),
            comment: Style::foreground(Rgb::GREEN),
            string: Style::foreground(Rgb::BROWN),
            class_name: Style::foreground(Rgb::CORNFLOWER_BLUE),
            indent_error: Style::underline(Rgb::ORANGE, LinePattern::Dotted),
        }
    }
}

impl ClassificationStyles {
    pub fn style(&self, kind: ClassificationKind) -> &Style {
        match kind {
            ClassificationKind::Keyword => &self.keyword,
            ClassificationKind::Comment => &self.comment,
            ClassificationKind::String => &self.string,
            ClassificationKind::ClassName => &self.class_name,
            ClassificationKind::IndentError => &self.indent_error,
        }
    }

    pub fn style_mut(&mut self, kind: ClassificationKind) -> &mut Style {
        match kind {
            ClassificationKind::Keyword => &mut self.keyword,
            ClassificationKind::Comment => &mut self.comment,
            ClassificationKind::String => &mut self.string,
            ClassificationKind::ClassName => &mut self.class_name,
            ClassificationKind::IndentError => &mut self.indent_error,
        }
    }
}
