use super::{Fields, Level};

/// Backend logging context: accumulated fields plus the verbosity level.
///
/// A context is a value. Every derivation returns a new context and leaves
/// the receiver untouched, so loggers derived from the same parent never
/// observe each other's level or field changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    level: Level,
    fields: Fields,
}

impl Context {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            fields: Fields::new(),
        }
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.level.enables(level)
    }

    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        Self {
            level,
            fields: self.fields.clone(),
        }
    }

    #[must_use]
    pub fn with_fields(&self, fields: &Fields) -> Self {
        Self {
            level: self.level,
            fields: self.fields.merged(fields),
        }
    }
}
