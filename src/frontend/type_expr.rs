//! Type expressions as they appear in manifests.
//!
//! Grammar:
//!
//! ```text
//! type  := path ( '<' type ( ',' type )* '>' )?
//! path  := ident ( ( '::' | '.' ) ident )*
//! ident := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Whitespace between tokens is ignored. Paths keep the separator they were written with; [`TypeExpr::simple_name`]
//! strips the qualifier regardless of which separator was used.

use std::fmt;

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeExpr {
    /// Possibly qualified type name (`String`, `java.util.Date`, `crate::prefs::Theme`)
    pub name: String,
    /// Type arguments, in order
    pub args: Vec<TypeExpr>,
}

/// Error while parsing a type expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeExprError {
    #[error("empty type expression")]
    Empty,
    #[error("unexpected `{found}` at offset {offset} in `{input}`")]
    Unexpected { input: String, offset: usize, found: char },
    #[error("unexpected end of type expression `{input}`")]
    UnexpectedEnd { input: String },
}

impl TypeExpr {
    /// A type expression without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A type expression with arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self { name: name.into(), args }
    }

    /// Parse a complete type expression.
    pub fn parse(input: &str) -> Result<Self, TypeExprError> {
        let mut parser = Parser {
            input,
            chars: input.char_indices().collect(),
            pos: 0,
        };
        parser.skip_ws();
        if parser.peek().is_none() {
            return Err(TypeExprError::Empty);
        }
        let expr = parser.parse_type()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(expr),
            Some((offset, found)) => Err(TypeExprError::Unexpected {
                input: input.to_string(),
                offset,
                found,
            }),
        }
    }

    /// The last path segment of the name.
    pub fn simple_name(&self) -> &str {
        let after_colons = self.name.rsplit("::").next().unwrap_or(&self.name);
        after_colons.rsplit('.').next().unwrap_or(after_colons)
    }

    /// Whether the name carries a module/package qualifier.
    pub fn is_qualified(&self) -> bool {
        self.simple_name().len() != self.name.len()
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TypeExpr {
    type Err = TypeExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeExpr::parse(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn unexpected(&self) -> TypeExprError {
        match self.peek() {
            Some((offset, found)) => TypeExprError::Unexpected {
                input: self.input.to_string(),
                offset,
                found,
            },
            None => TypeExprError::UnexpectedEnd {
                input: self.input.to_string(),
            },
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        let name = self.parse_path()?;
        self.skip_ws();
        let mut args = Vec::new();
        if matches!(self.peek(), Some((_, '<'))) {
            self.bump();
            loop {
                self.skip_ws();
                args.push(self.parse_type()?);
                self.skip_ws();
                match self.peek() {
                    Some((_, ',')) => self.bump(),
                    Some((_, '>')) => {
                        self.bump();
                        break;
                    }
                    _ => return Err(self.unexpected()),
                }
            }
        }
        Ok(TypeExpr { name, args })
    }

    fn parse_path(&mut self) -> Result<String, TypeExprError> {
        let mut path = self.parse_ident()?;
        loop {
            match self.peek() {
                Some((_, '.')) => {
                    self.bump();
                    path.push('.');
                }
                Some((_, ':')) if matches!(self.chars.get(self.pos + 1), Some((_, ':'))) => {
                    self.pos += 2;
                    path.push_str("::");
                }
                _ => return Ok(path),
            }
            path.push_str(&self.parse_ident()?);
        }
    }

    fn parse_ident(&mut self) -> Result<String, TypeExprError> {
        let mut ident = String::new();
        match self.peek() {
            Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {
                ident.push(c);
                self.bump();
            }
            _ => return Err(self.unexpected()),
        }
        while let Some((_, c)) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Ok(ident)
    }
}
