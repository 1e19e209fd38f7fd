//! Windows
//!
//! A window is either fixed or openable. Both share an immutable
//! [`WindowFrame`]; only the openable kind carries opened/closed state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::Openable;
use crate::types::{Direction, WindowType};
use crate::value_objects::{Color, Material};

/// The immutable part of every window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowFrame {
    material: Material,
    color: Color,
    window_type: WindowType,
    direction: Direction,
}

impl WindowFrame {
    pub fn new(material: Material, color: Color, window_type: WindowType, direction: Direction) -> Self {
        Self {
            material,
            color,
            window_type,
            direction,
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    #[inline]
    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Direction the window looks at.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for WindowFrame {
    /// A brown wooden single window looking north.
    fn default() -> Self {
        Self::new(
            Material::known("Wood"),
            Color::known("Brown"),
            WindowType::Single,
            Direction::North,
        )
    }
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window[material='{}', color='{}', type={}, direction={}]",
            self.material, self.color, self.window_type, self.direction
        )
    }
}

/// A window that can be opened, initially closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenableWindow {
    frame: WindowFrame,
    opened: bool,
}

impl OpenableWindow {
    pub fn new(frame: WindowFrame) -> Self {
        Self {
            frame,
            opened: false,
        }
    }

    #[inline]
    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }
}

impl Openable for OpenableWindow {
    fn open(&mut self) {
        self.opened = true;
    }

    fn close(&mut self) {
        self.opened = false;
    }

    fn is_opened(&self) -> bool {
        self.opened
    }
}

impl fmt::Display for OpenableWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenableWindow[{}, opened={}]", self.frame, self.opened)
    }
}

/// A window in a house wall.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Window {
    Fixed(WindowFrame),
    Openable(OpenableWindow),
}

impl Window {
    /// A default window that cannot be opened.
    pub fn fixed() -> Self {
        Self::Fixed(WindowFrame::default())
    }

    /// A default window that can be opened, closed.
    pub fn openable() -> Self {
        Self::Openable(OpenableWindow::default())
    }

    pub fn frame(&self) -> &WindowFrame {
        match self {
            Self::Fixed(frame) => frame,
            Self::Openable(window) => window.frame(),
        }
    }

    pub fn as_openable(&self) -> Option<&OpenableWindow> {
        match self {
            Self::Fixed(_) => None,
            Self::Openable(window) => Some(window),
        }
    }

    pub fn as_openable_mut(&mut self) -> Option<&mut OpenableWindow> {
        match self {
            Self::Fixed(_) => None,
            Self::Openable(window) => Some(window),
        }
    }

    pub fn is_openable(&self) -> bool {
        matches!(self, Self::Openable(_))
    }

    /// Fixed windows are never open.
    pub fn is_opened(&self) -> bool {
        self.as_openable().is_some_and(Openable::is_opened)
    }
}

impl From<WindowFrame> for Window {
    fn from(frame: WindowFrame) -> Self {
        Self::Fixed(frame)
    }
}

impl From<OpenableWindow> for Window {
    fn from(window: OpenableWindow) -> Self {
        Self::Openable(window)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(frame) => write!(f, "{}", frame),
            Self::Openable(window) => write!(f, "{}", window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_brown_wood_single_north() {
        let frame = WindowFrame::default();
        assert_eq!(frame.material().as_str(), "Wood");
        assert_eq!(frame.color().as_str(), "Brown");
        assert_eq!(frame.window_type(), WindowType::Single);
        assert_eq!(frame.direction(), Direction::North);
    }

    #[test]
    fn fixed_window_cannot_be_opened() {
        let mut window = Window::fixed();
        assert!(!window.is_openable());
        assert!(window.as_openable_mut().is_none());
        assert!(!window.is_opened());
    }

    #[test]
    fn openable_window_starts_closed_and_opens() {
        let mut window = Window::openable();
        assert!(!window.is_opened());
        if let Some(openable) = window.as_openable_mut() {
            openable.open();
        }
        assert!(window.is_opened());
    }

    #[test]
    fn fixed_and_openable_with_same_frame_differ() {
        let frame = WindowFrame::default();
        let fixed = Window::from(frame.clone());
        let openable = Window::from(OpenableWindow::new(frame));
        assert_ne!(fixed, openable);
        assert_eq!(fixed.frame(), openable.frame());
    }

    #[test]
    fn display_forms() {
        assert_eq!(
            Window::fixed().to_string(),
            "Window[material='Wood', color='Brown', type=Single, direction=North]"
        );
        assert_eq!(
            Window::openable().to_string(),
            "OpenableWindow[Window[material='Wood', color='Brown', type=Single, direction=North], opened=false]"
        );
    }

    #[test]
    fn serde_tags_the_kind() {
        let json = serde_json::to_value(Window::openable()).unwrap();
        assert_eq!(json["kind"], "openable");
        assert_eq!(json["opened"], false);
        let back: Window = serde_json::from_value(json).unwrap();
        assert!(back.is_openable());
    }
}
