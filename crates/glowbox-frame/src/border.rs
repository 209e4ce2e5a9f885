#![forbid(unsafe_code)]

//! Border character sets and the named-style registry.

use std::collections::HashMap;

use crate::error::ConfigurationError;

/// The nine characters a frame border is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
    /// Left joint where a divider meets the left edge.
    pub left_joint: char,
    /// Right joint where a divider meets the right edge.
    pub right_joint: char,
    /// Crossing joint (divider over vertical rules).
    pub cross: char,
}

impl BorderSet {
    /// Single-line box drawing characters.
    pub const SOLID: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        left_joint: '├',
        right_joint: '┤',
        cross: '┼',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
        left_joint: '├',
        right_joint: '┤',
        cross: '┼',
    };

    /// Double-line box drawing characters.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        left_joint: '╠',
        right_joint: '╣',
        cross: '╬',
    };

    /// Heavy (thick) box drawing characters.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        left_joint: '┣',
        right_joint: '┫',
        cross: '╋',
    };

    /// Pure-ASCII fallback.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        left_joint: '+',
        right_joint: '+',
        cross: '+',
    };

    /// Whitespace edges: padding-only framing.
    pub const MINIMAL: Self = Self {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        horizontal: ' ',
        vertical: ' ',
        left_joint: ' ',
        right_joint: ' ',
        cross: ' ',
    };

    /// Check if a character belongs to this set.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c == self.top_left
            || c == self.top_right
            || c == self.bottom_left
            || c == self.bottom_right
            || c == self.horizontal
            || c == self.vertical
            || c == self.left_joint
            || c == self.right_joint
            || c == self.cross
    }

    /// Look up a built-in set by case-insensitive name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "solid" | "square" => Some(Self::SOLID),
            "rounded" => Some(Self::ROUNDED),
            "double" => Some(Self::DOUBLE),
            "heavy" | "thick" => Some(Self::HEAVY),
            "ascii" => Some(Self::ASCII),
            "minimal" | "none" => Some(Self::MINIMAL),
            _ => None,
        }
    }
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::SOLID
    }
}

/// Named lookup for border sets: the built-ins plus caller-registered
/// custom styles. A registry is a plain value; there is no global state.
#[derive(Debug, Clone, Default)]
pub struct BorderRegistry {
    custom: HashMap<String, BorderSet>,
}

impl BorderRegistry {
    /// Create a registry containing only the built-in styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom style (builder form). Names are matched
    /// case-insensitively; a custom style shadows a built-in of the
    /// same name.
    #[must_use]
    pub fn register(mut self, name: impl Into<String>, set: BorderSet) -> Self {
        self.custom.insert(name.into().to_ascii_lowercase(), set);
        self
    }

    /// Resolve a style name.
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownBorderStyle`] if the name matches
    /// neither a custom nor a built-in style.
    pub fn get(&self, name: &str) -> Result<BorderSet, ConfigurationError> {
        let key = name.to_ascii_lowercase();
        self.custom
            .get(&key)
            .copied()
            .or_else(|| BorderSet::builtin(&key))
            .ok_or_else(|| ConfigurationError::UnknownBorderStyle {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_case_insensitive() {
        assert_eq!(BorderSet::builtin("SOLID"), Some(BorderSet::SOLID));
        assert_eq!(BorderSet::builtin("Rounded"), Some(BorderSet::ROUNDED));
    }

    #[test]
    fn builtin_unknown_is_none() {
        assert_eq!(BorderSet::builtin("dotted"), None);
    }

    #[test]
    fn ascii_set_is_ascii_only() {
        let set = BorderSet::ASCII;
        for c in [
            set.top_left,
            set.top_right,
            set.bottom_left,
            set.bottom_right,
            set.horizontal,
            set.vertical,
            set.left_joint,
            set.right_joint,
            set.cross,
        ] {
            assert!(c.is_ascii());
        }
    }

    #[test]
    fn contains_detects_members() {
        assert!(BorderSet::SOLID.contains('┌'));
        assert!(BorderSet::SOLID.contains('│'));
        assert!(!BorderSet::SOLID.contains('x'));
    }

    #[test]
    fn registry_resolves_builtins() {
        let registry = BorderRegistry::new();
        assert_eq!(registry.get("double").unwrap(), BorderSet::DOUBLE);
    }

    #[test]
    fn registry_unknown_name_errors() {
        let err = BorderRegistry::new().get("wavy").unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownBorderStyle { name } if name == "wavy"
        ));
    }

    #[test]
    fn registry_custom_style() {
        let stars = BorderSet {
            top_left: '*',
            top_right: '*',
            bottom_left: '*',
            bottom_right: '*',
            horizontal: '*',
            vertical: '*',
            left_joint: '*',
            right_joint: '*',
            cross: '*',
        };
        let registry = BorderRegistry::new().register("Stars", stars);
        assert_eq!(registry.get("stars").unwrap(), stars);
        assert_eq!(registry.get("STARS").unwrap(), stars);
    }

    #[test]
    fn registry_custom_shadows_builtin() {
        let registry = BorderRegistry::new().register("solid", BorderSet::ASCII);
        assert_eq!(registry.get("solid").unwrap(), BorderSet::ASCII);
    }
}
