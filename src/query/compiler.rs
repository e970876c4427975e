use clap::ValueEnum;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Please enter a search term before sending.")]
    EmptyQuery,
}

/// A document field the search term can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    Header,
    Summary,
    Text,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Header, Scope::Summary, Scope::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Header => "header",
            Scope::Summary => "summary",
            Scope::Text => "text",
        }
    }
}

/// Field toggles. All three are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scopes {
    pub header: bool,
    pub summary: bool,
    pub text: bool,
}

impl Default for Scopes {
    fn default() -> Self {
        Self {
            header: true,
            summary: true,
            text: true,
        }
    }
}

impl Scopes {
    pub fn none() -> Self {
        Self {
            header: false,
            summary: false,
            text: false,
        }
    }

    pub fn only(scopes: &[Scope]) -> Self {
        let mut out = Self::none();
        for scope in scopes {
            out.set(*scope, true);
        }
        out
    }

    pub fn set(&mut self, scope: Scope, enabled: bool) {
        match scope {
            Scope::Header => self.header = enabled,
            Scope::Summary => self.summary = enabled,
            Scope::Text => self.text = enabled,
        }
    }

    pub fn is_enabled(&self, scope: Scope) -> bool {
        match scope {
            Scope::Header => self.header,
            Scope::Summary => self.summary,
            Scope::Text => self.text,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Scope> + '_ {
        Scope::ALL.into_iter().filter(move |s| self.is_enabled(*s))
    }
}

/// Compile a raw term into the provider's query string.
///
/// With exactly one scope enabled the term becomes `scope:(term)`. Any other
/// selection passes the trimmed term through unscoped, and the provider falls
/// back to its default fields. Operators such as `AND`, `SPAN/n(...)`, `[m..n]`
/// or `lang:xx` are not parsed or escaped.
pub fn compile(raw_term: &str, scopes: Scopes) -> Result<String, CompileError> {
    let term = raw_term.trim();
    if term.is_empty() {
        return Err(CompileError::EmptyQuery);
    }

    let mut enabled = scopes.enabled();
    match (enabled.next(), enabled.next()) {
        (Some(scope), None) => Ok(format!("{}:({term})", scope.as_str())),
        _ => Ok(term.to_string()),
    }
}
