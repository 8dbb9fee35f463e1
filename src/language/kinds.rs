use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::models::FileMetadata;

/// Languages recognized by the analyzer. The discriminants are stable and
/// stored in the database, so new variants must be appended before `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go = 0,
    C,
    Cpp,
    CSharp,
    Rust,
    JavaScript,
    TypeScript,
    Python,
    Java,
    Kotlin,
    Swift,
    Html,
    Css,
    Sql,
    Php,
    Ruby,
    Dart,
    Lua,
    Perl,
    Scala,
    Haskell,
    Assembly,
    Bash,
    R,
    Matlab,
    VisualBasic,
    ObjectiveC,
    Batch,
    Pascal,
    Elixir,
    Clojure,
    FSharp,
    Julia,
    PowerShell,
    Fortran,
    Zig,
    Unknown,
}

const ALL_LANGUAGES: [Language; 37] = [
    Language::Go,
    Language::C,
    Language::Cpp,
    Language::CSharp,
    Language::Rust,
    Language::JavaScript,
    Language::TypeScript,
    Language::Python,
    Language::Java,
    Language::Kotlin,
    Language::Swift,
    Language::Html,
    Language::Css,
    Language::Sql,
    Language::Php,
    Language::Ruby,
    Language::Dart,
    Language::Lua,
    Language::Perl,
    Language::Scala,
    Language::Haskell,
    Language::Assembly,
    Language::Bash,
    Language::R,
    Language::Matlab,
    Language::VisualBasic,
    Language::ObjectiveC,
    Language::Batch,
    Language::Pascal,
    Language::Elixir,
    Language::Clojure,
    Language::FSharp,
    Language::Julia,
    Language::PowerShell,
    Language::Fortran,
    Language::Zig,
    Language::Unknown,
];

impl Language {
    /// Human-readable name, matching GitHub linguist naming
    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Rust => "Rust",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Swift => "Swift",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Dart => "Dart",
            Language::Lua => "Lua",
            Language::Perl => "Perl",
            Language::Scala => "Scala",
            Language::Haskell => "Haskell",
            Language::Assembly => "Assembly",
            Language::Bash => "Bash",
            Language::R => "R",
            Language::Matlab => "MATLAB",
            Language::VisualBasic => "Visual Basic",
            Language::ObjectiveC => "Objective-C",
            Language::Batch => "Batch",
            Language::Pascal => "Pascal",
            Language::Elixir => "Elixir",
            Language::Clojure => "Clojure",
            Language::FSharp => "F#",
            Language::Julia => "Julia",
            Language::PowerShell => "PowerShell",
            Language::Fortran => "Fortran",
            Language::Zig => "Zig",
            Language::Unknown => "Unknown",
        }
    }

    /// GitHub linguist color for the language, as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Language::Go => "#00ADD8",
            Language::C => "#555555",
            Language::Cpp => "#F34B7D",
            Language::CSharp => "#178600",
            Language::Rust => "#DEA584",
            Language::JavaScript => "#F1E05A",
            Language::TypeScript => "#3178c6",
            Language::Python => "#3572A5",
            Language::Java => "#B07219",
            Language::Kotlin => "#F18E33",
            Language::Swift => "#FFAC45",
            Language::Html => "#E34C26",
            Language::Css => "#563D7C",
            Language::Sql => "#438EFF",
            Language::Php => "#777BB4",
            Language::Ruby => "#701516",
            Language::Dart => "#00B4AB",
            Language::Lua => "#000080",
            Language::Perl => "#0298C3",
            Language::Scala => "#c22d40",
            Language::Haskell => "#5e5086",
            Language::Assembly => "#6E4C13",
            Language::Bash => "#89E051",
            Language::R => "#198CE7",
            Language::Matlab => "#0076A8",
            Language::VisualBasic => "#945DB7",
            Language::ObjectiveC => "#438EFF",
            Language::Batch => "#89E051",
            Language::Pascal => "#E31C3D",
            Language::Elixir => "#6e4a7e",
            Language::Clojure => "#db5855",
            Language::FSharp => "#B845FC",
            Language::Julia => "#A93939",
            Language::PowerShell => "#012456",
            Language::Fortran => "#4d41b1",
            Language::Zig => "#EC915C",
            Language::Unknown => "#CCCCCC",
        }
    }

    /// Map a file extension (without the leading dot) to a language.
    ///
    /// `.m` maps to MATLAB here; callers with access to the file content
    /// should use [`detect_language`], which disambiguates Objective-C.
    pub fn from_extension(extension: &str) -> Language {
        match extension {
            "go" => Language::Go,
            "c" | "h" => Language::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" => Language::Cpp,
            "cs" => Language::CSharp,
            "rs" => Language::Rust,
            "js" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "kt" => Language::Kotlin,
            "swift" => Language::Swift,
            "html" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            "dart" => Language::Dart,
            "lua" => Language::Lua,
            "pl" => Language::Perl,
            "scala" => Language::Scala,
            "hs" => Language::Haskell,
            "asm" => Language::Assembly,
            "sh" => Language::Bash,
            "r" => Language::R,
            "m" => Language::Matlab,
            "vb" => Language::VisualBasic,
            "mm" => Language::ObjectiveC,
            "bat" => Language::Batch,
            "ps1" => Language::PowerShell,
            "p" | "pas" => Language::Pascal,
            "ex" | "exs" => Language::Elixir,
            "clj" => Language::Clojure,
            "fs" => Language::FSharp,
            "jl" => Language::Julia,
            "f" | "f90" | "f95" => Language::Fortran,
            "zig" => Language::Zig,
            _ => Language::Unknown,
        }
    }

    /// Stable integer code used by the database layer
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Inverse of [`Language::code`]; out-of-range codes map to `Unknown`
    pub fn from_code(code: i64) -> Language {
        usize::try_from(code)
            .ok()
            .and_then(|idx| ALL_LANGUAGES.get(idx).copied())
            .unwrap_or(Language::Unknown)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Determine the language of a file from its metadata.
///
/// Most extensions map directly; `.m` is shared by MATLAB and Objective-C
/// and is resolved by sniffing the file content.
pub fn detect_language(metadata: &FileMetadata) -> Language {
    match metadata.extension.as_str() {
        "m" => detect_m_dialect(&metadata.path),
        ext => Language::from_extension(ext),
    }
}

static OBJC_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"@interface",
        r"@implementation",
        r"@property",
        r"#import",
        // Typical Objective-C class prefix
        r"NS[A-Z][a-zA-Z]+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static MATLAB_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"function", r"%", r"linspace", r"zeros\(", r"ones\("]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

// How far into a .m file to look before giving up on disambiguation
const M_DIALECT_SNIFF_LINES: usize = 20;

/// Decide whether a `.m` file is MATLAB or Objective-C by scanning its first
/// lines for dialect markers. MATLAB wins when nothing matches or the file
/// cannot be read.
pub fn detect_m_dialect(path: &Path) -> Language {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("could not open {} for dialect sniffing: {}", path.display(), err);
            return Language::Matlab;
        }
    };

    let reader = BufReader::new(file);
    for line in reader.lines().take(M_DIALECT_SNIFF_LINES) {
        let line = match line {
            Ok(line) => line,
            Err(_) => return Language::Matlab,
        };
        if OBJC_MARKERS.iter().any(|marker| marker.is_match(&line)) {
            return Language::ObjectiveC;
        }
        if MATLAB_MARKERS.iter().any(|marker| marker.is_match(&line)) {
            return Language::Matlab;
        }
    }

    Language::Matlab
}
