use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C header
    C,
    /// GNU assembler include
    Asm,
    /// Python module
    Py,
}

impl Language {
    /// Every supported language, in CLI listing order.
    pub const ALL: [Language; 3] = [Language::C, Language::Asm, Language::Py];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Asm => "asm",
            Language::Py => "py",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
                format!("unknown language '{s}', expected one of: {}", names.join(", "))
            })
    }
}
