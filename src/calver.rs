use std::fmt::Write;
use std::sync::OnceLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Utc};
use regex::Regex;

use crate::error::CalverError;
use crate::token::{Fragment, Placeholder, Token};

const MIN_TOKENS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub now: DateTime<Utc>,
    pub week: u32,
    pub major: &'a str,
    pub minor: &'a str,
    pub micro: &'a str,
    pub modifier: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        now: DateTime<Utc>,
        major: &'a str,
        minor: &'a str,
        micro: &'a str,
        modifier: &'a str,
    ) -> Self {
        Self {
            now,
            week: now.iso_week().week(),
            major,
            minor,
            micro,
            modifier,
        }
    }

    fn value(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::ShortWeek => self.week.to_string(),
            Placeholder::ZeroPaddedWeek => format!("{:02}", self.week),
            Placeholder::Major => self.major.to_string(),
            Placeholder::Minor => self.minor.to_string(),
            Placeholder::Micro => self.micro.to_string(),
            Placeholder::Modifier => self.modifier.to_string(),
        }
    }
}

pub fn parse_format(format: &str) -> Result<Vec<Token>, CalverError> {
    let segments = format.split('.').collect::<Vec<_>>();
    if segments.len() < MIN_TOKENS {
        return Err(CalverError::InvalidFormat {
            format: format.to_string(),
        });
    }

    segments
        .into_iter()
        .map(|segment| {
            segment
                .parse::<Token>()
                .map_err(|_| CalverError::UnknownToken {
                    token: segment.to_string(),
                    format: format.to_string(),
                })
        })
        .collect()
}

pub fn to_date_layout(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| match token.fragment() {
            Fragment::Layout(pattern) => pattern.to_string(),
            Fragment::Placeholder(placeholder) => placeholder.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

pub fn render_date_layout(layout: &str, now: &DateTime<Utc>) -> Result<String, CalverError> {
    let items = StrftimeItems::new(layout).collect::<Vec<_>>();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(CalverError::Render(format!(
            "invalid date layout: {layout}"
        )));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", now.format_with_items(items.iter()))
        .map_err(|e| CalverError::Render(e.to_string()))?;
    Ok(rendered)
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("marker regex is valid"))
}

/// Replaces every `{{Name}}` marker in one pass. Substituted values are not
/// scanned again.
pub fn substitute_placeholders(
    rendered: &str,
    ctx: &RenderContext<'_>,
) -> Result<String, CalverError> {
    let mut out = String::with_capacity(rendered.len());
    let mut last = 0;

    for caps in marker_regex().captures_iter(rendered) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let placeholder = Placeholder::from_name(name.as_str()).ok_or_else(|| {
            CalverError::Render(format!("undefined placeholder `{}`", name.as_str()))
        })?;

        out.push_str(&rendered[last..whole.start()]);
        out.push_str(&ctx.value(placeholder));
        last = whole.end();
    }
    out.push_str(&rendered[last..]);

    Ok(out)
}

pub fn generate(
    format: &str,
    major: &str,
    minor: &str,
    micro: &str,
    modifier: &str,
) -> Result<String, CalverError> {
    generate_at(Utc::now(), format, major, minor, micro, modifier)
}

/// Same as [`generate`] with an explicit clock reading.
pub fn generate_at(
    now: DateTime<Utc>,
    format: &str,
    major: &str,
    minor: &str,
    micro: &str,
    modifier: &str,
) -> Result<String, CalverError> {
    let tokens = parse_format(format)?;
    let layout = to_date_layout(&tokens);
    tracing::debug!("intermediate layout: {}", layout);

    let ctx = RenderContext::new(now, major, minor, micro, modifier);
    let rendered = render_date_layout(&layout, &ctx.now)?;
    tracing::debug!("rendered {} (iso week {})", rendered, ctx.week);

    substitute_placeholders(&rendered, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn layout_for_default_format() {
        let tokens = parse_format("YYYY.0M.0D").unwrap();
        assert_eq!(to_date_layout(&tokens), "%Y.%m.%d");
    }

    #[test]
    fn layout_keeps_placeholders_as_markers() {
        let tokens = parse_format("YY.WW.MAJOR.MODIFIER").unwrap();
        assert_eq!(to_date_layout(&tokens), "%-y.{{ShortWeek}}.{{Major}}.{{Modifier}}");
    }

    #[test]
    fn fewer_than_three_tokens_is_invalid() {
        for format in ["YYYY.MM", "YYYY", ""] {
            assert_eq!(
                parse_format(format),
                Err(CalverError::InvalidFormat {
                    format: format.to_string()
                })
            );
        }
    }

    #[test]
    fn unknown_and_empty_tokens_are_rejected() {
        assert_eq!(
            parse_format("YYYY.0M.XX"),
            Err(CalverError::UnknownToken {
                token: "XX".to_string(),
                format: "YYYY.0M.XX".to_string()
            })
        );
        assert!(matches!(
            parse_format("YYYY..0D"),
            Err(CalverError::UnknownToken { token, .. }) if token.is_empty()
        ));
    }

    #[test]
    fn date_render_leaves_markers_untouched() {
        let rendered = render_date_layout("%Y.{{Major}}.%-m", &at(2023, 3, 15)).unwrap();
        assert_eq!(rendered, "2023.{{Major}}.3");
    }

    #[test]
    fn substitution_fills_week_and_components() {
        let ctx = RenderContext::new(at(2023, 1, 2), "1", "", "3", "rc1");
        let out = substitute_placeholders(
            "{{ShortWeek}}.{{ZeroPaddedWeek}}.{{Major}}.{{Minor}}.{{Micro}}.{{Modifier}}",
            &ctx,
        )
        .unwrap();
        assert_eq!(out, "1.01.1..3.rc1");
    }

    #[test]
    fn caller_values_are_not_rescanned() {
        let ctx = RenderContext::new(at(2023, 3, 15), "{{Minor}}", "2", "", "");
        let out = substitute_placeholders("{{Major}}.{{Minor}}", &ctx).unwrap();
        assert_eq!(out, "{{Minor}}.2");
    }

    #[test]
    fn undefined_marker_is_a_render_error() {
        let ctx = RenderContext::new(at(2023, 3, 15), "", "", "", "");
        assert!(matches!(
            substitute_placeholders("{{Patch}}", &ctx),
            Err(CalverError::Render(_))
        ));
    }

    #[test]
    fn short_and_padded_year() {
        let now = at(2006, 7, 4);
        assert_eq!(
            generate_at(now, "YY.0Y.MM.DD", "", "", "", "").unwrap(),
            "6.06.7.4"
        );
    }
}
