//! Tag discovery.
//!
//! Collects the `#name` tags written in note text, which is where the known
//! tag list for rendering comes from. A tag starts at the beginning of a line
//! or after whitespace, the same rule the tag matcher applies. Fenced code,
//! code spans and image alt text are never rendered as tags, so they are
//! skipped here too.

use std::{collections::BTreeSet, ops::Range, sync::LazyLock};

use regex::Regex;

use crate::marked::{
    blocks::segments,
    inline::kinds::{code_span, image, tag},
};

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    let name = tag::PATTERN.as_str().trim_start_matches('^');
    Regex::new(&format!(r"(?:^|\s){name}")).expect("Invalid tag regex")
});

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(code_span::PATTERN.as_str().trim_start_matches('^')).expect("Invalid code span regex")
});

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(image::PATTERN.as_str().trim_start_matches('^')).expect("Invalid image regex")
});

/// Returns the distinct tags in `text`, sorted.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut tags = BTreeSet::new();
    add_tags(text, &mut tags);
    tags.into_iter().collect()
}

/// Returns the distinct tags across many notes, sorted.
pub fn collect_tags<'a, I>(notes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = BTreeSet::new();
    for note in notes {
        add_tags(note, &mut tags);
    }
    log::trace!("Collected {} tags", tags.len());
    tags.into_iter().collect()
}

fn add_tags(text: &str, tags: &mut BTreeSet<String>) {
    for segment in segments(text).filter(|s| !s.is_code) {
        let line = segment.text;
        let raw: Vec<Range<usize>> = CODE_SPAN
            .find_iter(line)
            .chain(IMAGE.find_iter(line))
            .map(|m| m.range())
            .collect();
        for caps in TAG.captures_iter(line) {
            let Some(name) = caps.get(1) else { continue };
            if raw.iter().any(|r| r.contains(&name.start())) {
                continue;
            }
            tags.insert(name.as_str().to_string());
        }
    }
}
