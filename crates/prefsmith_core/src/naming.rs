//! Derive storage field names from accessor names and convert identifiers between case conventions.
//!
//! ## Notes
//! - Accessor prefixes are an explicit, closed list ([`ACCESSOR_PREFIXES`]); matching is plain string work.
//! - Camel-case words break before every uppercase ASCII letter, so `URL` splits into `U`, `R`, `L`.
//!   Separator conventions (`lower_underscore`, `UPPER_UNDERSCORE`, `lower-hyphen`) break on their separator.
//! - Only ASCII letters change case; every other character is carried through untouched.
//!
//! ## Examples
//! ```rust
//! use prefsmith_core::naming::{self, CaseFormat};
//!
//! assert_eq!(naming::derive_field_name("getUserName", CaseFormat::LowerCamel), "userName");
//! assert_eq!(naming::derive_field_name("isEnabled", CaseFormat::LowerCamel), "enabled");
//! assert_eq!(naming::convert_case("userName", CaseFormat::LowerCamel, CaseFormat::LowerUnderscore), "user_name");
//! ```

use std::fmt;
use std::str::FromStr;

/// Read-accessor prefixes stripped when deriving a field name, in match order.
pub const ACCESSOR_PREFIXES: &[&str] = &["get", "is", "has"];

/// Identifier case conventions understood by [`convert_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseFormat {
    /// `userName`
    #[default]
    LowerCamel,
    /// `UserName`
    UpperCamel,
    /// `user_name`
    LowerUnderscore,
    /// `USER_NAME`
    UpperUnderscore,
    /// `user-name`
    LowerHyphen,
}

impl CaseFormat {
    /// All conventions, in declaration order.
    pub const ALL: &'static [CaseFormat] = &[
        CaseFormat::LowerCamel,
        CaseFormat::UpperCamel,
        CaseFormat::LowerUnderscore,
        CaseFormat::UpperUnderscore,
        CaseFormat::LowerHyphen,
    ];

    /// Stable kebab-case spelling used in configuration and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseFormat::LowerCamel => "lower-camel",
            CaseFormat::UpperCamel => "upper-camel",
            CaseFormat::LowerUnderscore => "lower-underscore",
            CaseFormat::UpperUnderscore => "upper-underscore",
            CaseFormat::LowerHyphen => "lower-hyphen",
        }
    }

    /// Whether names spelled in this convention are identifiers; `lower-hyphen` names never are.
    pub fn produces_identifiers(self) -> bool {
        self.separator() != Some('-')
    }

    fn separator(self) -> Option<char> {
        match self {
            CaseFormat::LowerCamel | CaseFormat::UpperCamel => None,
            CaseFormat::LowerUnderscore | CaseFormat::UpperUnderscore => Some('_'),
            CaseFormat::LowerHyphen => Some('-'),
        }
    }

    fn normalize_first_word(self, word: &str) -> String {
        match self {
            CaseFormat::LowerCamel | CaseFormat::LowerUnderscore | CaseFormat::LowerHyphen => {
                word.to_ascii_lowercase()
            }
            CaseFormat::UpperCamel => first_char_only_upper(word),
            CaseFormat::UpperUnderscore => word.to_ascii_uppercase(),
        }
    }

    fn normalize_word(self, word: &str) -> String {
        match self {
            CaseFormat::LowerCamel | CaseFormat::UpperCamel => first_char_only_upper(word),
            CaseFormat::LowerUnderscore | CaseFormat::LowerHyphen => word.to_ascii_lowercase(),
            CaseFormat::UpperUnderscore => word.to_ascii_uppercase(),
        }
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a case-format spelling is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCaseFormat(pub String);

impl fmt::Display for UnknownCaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown case format '{}'", self.0)
    }
}

impl std::error::Error for UnknownCaseFormat {}

impl FromStr for CaseFormat {
    type Err = UnknownCaseFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseFormat::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownCaseFormat(s.to_string()))
    }
}

fn first_char_only_upper(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Split an identifier into words according to `format`.
fn split_words(identifier: &str, format: CaseFormat) -> Vec<&str> {
    if let Some(sep) = format.separator() {
        return identifier.split(sep).collect();
    }

    let mut words = Vec::new();
    let mut start = 0;
    for (idx, ch) in identifier.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            words.push(&identifier[start..idx]);
            start = idx;
        }
    }
    words.push(&identifier[start..]);
    words
}

/// Convert `identifier` from one case convention to another.
///
/// ## Parameters
/// - `identifier`: the name to convert, assumed to be spelled in `from`.
/// - `from`: the convention `identifier` is written in.
/// - `to`: the target convention.
///
/// ## Returns
/// - (`String`): the converted identifier. Converting to the same convention returns the input unchanged.
pub fn convert_case(identifier: &str, from: CaseFormat, to: CaseFormat) -> String {
    if from == to {
        return identifier.to_string();
    }

    let words = split_words(identifier, from);
    let mut out = String::with_capacity(identifier.len() + words.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&to.normalize_first_word(word));
        } else {
            if let Some(sep) = to.separator() {
                out.push(sep);
            }
            out.push_str(&to.normalize_word(word));
        }
    }
    out
}

/// Return the upper-camel remainder of an accessor name, if it has one.
///
/// A remainder is recognized when the name is an accessor prefix (or nothing) followed by at least two characters,
/// the first of which is not a lowercase ASCII letter. Prefixes are tried in [`ACCESSOR_PREFIXES`] order before
/// falling back to the whole name.
pub fn accessor_remainder(accessor: &str) -> Option<&str> {
    fn is_remainder(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(first) => !first.is_ascii_lowercase() && chars.next().is_some(),
            None => false,
        }
    }

    ACCESSOR_PREFIXES
        .iter()
        .filter_map(|prefix| accessor.strip_prefix(prefix))
        .find(|rest| is_remainder(rest))
        .or_else(|| is_remainder(accessor).then_some(accessor))
}

/// Derive the storage field name for an accessor.
///
/// ## Examples
/// ```rust
/// use prefsmith_core::naming::{CaseFormat, derive_field_name};
///
/// assert_eq!(derive_field_name("hasAvatar", CaseFormat::LowerCamel), "avatar");
/// assert_eq!(derive_field_name("volume", CaseFormat::LowerCamel), "volume");
/// assert_eq!(derive_field_name("getUserName", CaseFormat::LowerUnderscore), "user_name");
/// ```
pub fn derive_field_name(accessor: &str, to: CaseFormat) -> String {
    match accessor_remainder(accessor) {
        Some(remainder) => convert_case(remainder, CaseFormat::UpperCamel, to),
        None => convert_case(accessor, CaseFormat::LowerCamel, to),
    }
}

/// Check whether `name` is a plain ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
