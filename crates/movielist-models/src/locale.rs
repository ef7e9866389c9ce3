use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for the watched-status label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Locale {
    pub fn status_label(self, watched: bool) -> &'static str {
        match (self, watched) {
            (Locale::English, true) => "Watched",
            (Locale::English, false) => "Not watched",
            (Locale::Russian, true) => "Просмотрен",
            (Locale::Russian, false) => "Не просмотрен",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Russian => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ru" | "russian" => Ok(Locale::Russian),
            _ => Err(format!("Invalid locale: {}. Use 'en' or 'ru'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(Locale::English.status_label(true), "Watched");
        assert_eq!(Locale::English.status_label(false), "Not watched");
        assert_eq!(Locale::Russian.status_label(true), "Просмотрен");
        assert_eq!(Locale::Russian.status_label(false), "Не просмотрен");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Russian);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }
}
