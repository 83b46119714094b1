use std::fmt;
use std::str::FromStr;

/// A single dot-separated segment of a CalVer format, e.g. `YYYY` or `0M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    FullYear,
    ShortYear,
    ZeroPaddedYear,
    ShortMonth,
    ZeroPaddedMonth,
    ShortWeek,
    ZeroPaddedWeek,
    ShortDay,
    ZeroPaddedDay,
    Major,
    Minor,
    Micro,
    Modifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    ShortWeek,
    ZeroPaddedWeek,
    Major,
    Minor,
    Micro,
    Modifier,
}

/// What a token turns into inside the intermediate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Layout(&'static str),
    Placeholder(Placeholder),
}

impl Token {
    pub const ALL: [Token; 13] = [
        Token::FullYear,
        Token::ShortYear,
        Token::ZeroPaddedYear,
        Token::ShortMonth,
        Token::ZeroPaddedMonth,
        Token::ShortWeek,
        Token::ZeroPaddedWeek,
        Token::ShortDay,
        Token::ZeroPaddedDay,
        Token::Major,
        Token::Minor,
        Token::Micro,
        Token::Modifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Token::FullYear => "YYYY",
            Token::ShortYear => "YY",
            Token::ZeroPaddedYear => "0Y",
            Token::ShortMonth => "MM",
            Token::ZeroPaddedMonth => "0M",
            Token::ShortWeek => "WW",
            Token::ZeroPaddedWeek => "0W",
            Token::ShortDay => "DD",
            Token::ZeroPaddedDay => "0D",
            Token::Major => "MAJOR",
            Token::Minor => "MINOR",
            Token::Micro => "MICRO",
            Token::Modifier => "MODIFIER",
        }
    }

    pub fn fragment(&self) -> Fragment {
        match self {
            Token::FullYear => Fragment::Layout("%Y"),
            Token::ShortYear => Fragment::Layout("%-y"),
            Token::ZeroPaddedYear => Fragment::Layout("%y"),
            Token::ShortMonth => Fragment::Layout("%-m"),
            Token::ZeroPaddedMonth => Fragment::Layout("%m"),
            Token::ShortWeek => Fragment::Placeholder(Placeholder::ShortWeek),
            Token::ZeroPaddedWeek => Fragment::Placeholder(Placeholder::ZeroPaddedWeek),
            Token::ShortDay => Fragment::Layout("%-d"),
            Token::ZeroPaddedDay => Fragment::Layout("%d"),
            Token::Major => Fragment::Placeholder(Placeholder::Major),
            Token::Minor => Fragment::Placeholder(Placeholder::Minor),
            Token::Micro => Fragment::Placeholder(Placeholder::Micro),
            Token::Modifier => Fragment::Placeholder(Placeholder::Modifier),
        }
    }
}

impl FromStr for Token {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::ShortWeek,
        Placeholder::ZeroPaddedWeek,
        Placeholder::Major,
        Placeholder::Minor,
        Placeholder::Micro,
        Placeholder::Modifier,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::ShortWeek => "ShortWeek",
            Placeholder::ZeroPaddedWeek => "ZeroPaddedWeek",
            Placeholder::Major => "Major",
            Placeholder::Minor => "Minor",
            Placeholder::Micro => "Micro",
            Placeholder::Modifier => "Modifier",
        }
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}
