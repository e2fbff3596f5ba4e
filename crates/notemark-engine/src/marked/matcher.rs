use regex::{Captures, Regex};

use super::context::RenderContext;

/// Output of one successful match: rendered markup plus the number of input
/// bytes it accounts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub markup: String,
    /// Bytes of the remaining input consumed. Always on a char boundary.
    pub consumed: usize,
}

/// Recognises one construct at the start of the remaining text and renders it.
///
/// Matchers are stateless: the same `rest` and context always give the same
/// result. Precedence is decided by position in a [`MatcherList`].
pub trait Matcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `None` to decline, letting the next matcher in the list try.
    fn try_match(&self, rest: &str, ctx: &RenderContext<'_>) -> Option<Fragment>;

    /// Whether [`Matcher::try_match`] would succeed, without rendering.
    fn accepts(&self, rest: &str, ctx: &RenderContext<'_>) -> bool {
        self.try_match(rest, ctx).is_some()
    }

    /// A fallback accepts any non-empty input and consumes at least one char.
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Renders the captures of a [`PatternMatcher`].
pub type RenderFn = fn(&Captures<'_>, &RenderContext<'_>) -> String;

/// A matcher made of a start-anchored pattern and a render function.
///
/// The pattern must begin with `^`; the whole match is what gets consumed.
pub struct PatternMatcher {
    name: &'static str,
    pattern: &'static Regex,
    render: RenderFn,
    fallback: bool,
}

impl PatternMatcher {
    pub fn new(name: &'static str, pattern: &'static Regex, render: RenderFn) -> Self {
        Self {
            name,
            pattern,
            render,
            fallback: false,
        }
    }

    /// Marks this matcher as the catch-all for its list.
    #[must_use]
    pub fn fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

impl Matcher for PatternMatcher {
    fn name(&self) -> &'static str {
        self.name
    }

    fn try_match(&self, rest: &str, ctx: &RenderContext<'_>) -> Option<Fragment> {
        let caps = self.pattern.captures(rest)?;
        let whole = caps.get(0)?;
        debug_assert_eq!(whole.start(), 0, "pattern for `{}` is not anchored", self.name);
        Some(Fragment {
            markup: (self.render)(&caps, ctx),
            consumed: whole.end(),
        })
    }

    fn accepts(&self, rest: &str, _ctx: &RenderContext<'_>) -> bool {
        self.pattern.is_match(rest)
    }

    fn is_fallback(&self) -> bool {
        self.fallback
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherListError {
    #[error("matcher list is empty")]
    Empty,
    #[error("matcher list must end with a fallback matcher, but ends with `{last}`")]
    MissingFallback { last: &'static str },
    #[error("fallback matcher `{name}` shadows the matchers after it")]
    FallbackNotLast { name: &'static str },
}

/// An ordered set of matchers; earlier entries win.
///
/// Construction guarantees the list ends with exactly one fallback, so
/// dispatch over it always makes progress.
pub struct MatcherList {
    matchers: Vec<Box<dyn Matcher>>,
}

impl MatcherList {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Result<Self, MatcherListError> {
        let (last, init) = matchers.split_last().ok_or(MatcherListError::Empty)?;
        if let Some(early) = init.iter().find(|m| m.is_fallback()) {
            return Err(MatcherListError::FallbackNotLast { name: early.name() });
        }
        if !last.is_fallback() {
            return Err(MatcherListError::MissingFallback { last: last.name() });
        }
        Ok(Self { matchers })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Matcher> {
        self.matchers.iter().map(|m| m.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl std::fmt::Debug for MatcherList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static ANY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*)(\n?)").unwrap());
    static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").unwrap());

    fn echo(caps: &Captures<'_>, _ctx: &RenderContext<'_>) -> String {
        caps[0].to_string()
    }

    fn line() -> Box<dyn Matcher> {
        Box::new(PatternMatcher::new("line", &ANY_LINE, echo).fallback())
    }

    fn digits() -> Box<dyn Matcher> {
        Box::new(PatternMatcher::new("digits", &DIGITS, echo))
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(MatcherList::new(vec![]).unwrap_err(), MatcherListError::Empty);
    }

    #[test]
    fn list_without_fallback_is_rejected() {
        let err = MatcherList::new(vec![digits()]).unwrap_err();
        assert_eq!(err, MatcherListError::MissingFallback { last: "digits" });
    }

    #[test]
    fn fallback_must_be_last() {
        let err = MatcherList::new(vec![line(), digits(), line()]).unwrap_err();
        assert_eq!(err, MatcherListError::FallbackNotLast { name: "line" });
    }

    #[test]
    fn valid_list_keeps_order() {
        let list = MatcherList::new(vec![digits(), line()]).unwrap();
        assert_eq!(list.names(), vec!["digits", "line"]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(format!("{list:?}"), r#"["digits", "line"]"#);
    }

    #[test]
    fn pattern_matcher_consumes_whole_match() {
        let ctx = RenderContext::plain();
        let fragment = PatternMatcher::new("digits", &DIGITS, echo)
            .try_match("123abc", &ctx)
            .unwrap();
        assert_eq!(fragment.markup, "123");
        assert_eq!(fragment.consumed, 3);
    }

    #[test]
    fn pattern_matcher_declines_without_match() {
        let ctx = RenderContext::plain();
        assert!(PatternMatcher::new("digits", &DIGITS, echo)
            .try_match("abc", &ctx)
            .is_none());
    }

    #[test]
    fn accepts_agrees_with_try_match() {
        let ctx = RenderContext::plain();
        let matcher = PatternMatcher::new("digits", &DIGITS, echo);
        for rest in ["123abc", "abc", "", "9"] {
            assert_eq!(matcher.accepts(rest, &ctx), matcher.try_match(rest, &ctx).is_some());
        }
    }
}
