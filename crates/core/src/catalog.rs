//! Message lookup for every user-visible phrase.
//!
//! Messages are identified by their untranslated English text and carry
//! `{name}` style placeholders that are substituted after lookup with [`fill`].

use std::borrow::Cow;

pub trait Catalog: Send + Sync {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;

    fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> Cow<'a, str>;
}

/// Untranslated English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceCatalog;

impl Catalog for SourceCatalog {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }

    fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> Cow<'a, str> {
        Cow::Borrowed(if n == 1 { singular } else { plural })
    }
}

/// Substitutes `{key}` placeholders in `template`. Unknown placeholders are left as is.
#[must_use]
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match args.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
