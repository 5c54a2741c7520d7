use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKinds {
    #[default]
    Classic,
    Fire,
    Ice,
    Psychedelic,
    Mono,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Fire,
        Self::Ice,
        Self::Psychedelic,
        Self::Mono,
    ];

    /// Stable lowercase identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Psychedelic => "psychedelic",
            Self::Mono => "mono",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Psychedelic => "Psychedelic",
            Self::Mono => "Mono",
        }
    }
}

impl fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteKindsParseError {
    value: String,
}

impl fmt::Display for PaletteKindsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = PaletteKinds::ALL.iter().map(|k| k.id()).collect();

        write!(
            f,
            "unknown palette '{}', expected one of: {}",
            self.value,
            expected.join(", ")
        )
    }
}

impl Error for PaletteKindsParseError {}

impl FromStr for PaletteKinds {
    type Err = PaletteKindsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PaletteKindsParseError {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteKinds::ALL.first(), Some(&PaletteKinds::default()));
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for &kind in PaletteKinds::ALL {
            assert_eq!(kind.id().parse::<PaletteKinds>(), Ok(kind));
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" Fire ".parse::<PaletteKinds>(), Ok(PaletteKinds::Fire));
        assert_eq!("MONO".parse::<PaletteKinds>(), Ok(PaletteKinds::Mono));
    }

    #[test]
    fn from_str_rejects_unknown_palette() {
        let err = "sepia".parse::<PaletteKinds>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "unknown palette 'sepia', expected one of: classic, fire, ice, psychedelic, mono"
        );
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
