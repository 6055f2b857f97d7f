//! String holders that rewrite every stored value through a transform.
//!
//! The transform runs on the initial value and on each `set`, so a reader
//! never observes an untransformed string.

use alloc::string::{String, ToString};
use core::fmt;

/// Plain function transform; the type used by the named constructors.
pub type StrTransform = fn(&str) -> String;

pub struct TransformingHolder<F = StrTransform> {
    value: String,
    transform: F,
}

impl<F> TransformingHolder<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(initial: &str, transform: F) -> Self {
        let value = transform(initial);
        Self { value, transform }
    }

    #[inline]
    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: &str) {
        self.value = (self.transform)(value);
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

fn trim(s: &str) -> String {
    s.trim().to_string()
}

impl TransformingHolder<StrTransform> {
    /// Stores values upper-cased (Unicode default case mapping).
    pub fn uppercase(initial: &str) -> Self {
        Self::new(initial, to_upper)
    }

    /// Stores values without leading/trailing whitespace.
    pub fn trimmed(initial: &str) -> Self {
        Self::new(initial, trim)
    }
}

impl<F> fmt::Debug for TransformingHolder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformingHolder").field("value", &self.value).finish()
    }
}

impl<F> fmt::Display for TransformingHolder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<F> AsRef<str> for TransformingHolder<F> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Demo profile: `name` is kept upper-case, `bio` is kept trimmed.
#[derive(Debug)]
pub struct UserProfile {
    name: TransformingHolder,
    bio: TransformingHolder,
}

impl UserProfile {
    pub const DEFAULT_NAME: &'static str = "rx-mobile-team";
    pub const DEFAULT_BIO: &'static str = "Good";

    pub fn new(name: &str, bio: &str) -> Self {
        Self {
            name: TransformingHolder::uppercase(name),
            bio: TransformingHolder::trimmed(bio),
        }
    }

    pub fn name(&self) -> &str { self.name.get() }
    pub fn bio(&self) -> &str { self.bio.get() }

    pub fn set_name(&mut self, name: &str) { self.name.set(name) }
    pub fn set_bio(&mut self, bio: &str) { self.bio.set(bio) }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Self::DEFAULT_BIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_applies_on_initial_and_write() {
        let mut h = TransformingHolder::uppercase("rx-mobile-team");
        assert_eq!(h.get(), "RX-MOBILE-TEAM");
        h.set("RxMobileTeam");
        assert_eq!(h.get(), "RXMOBILETEAM");
        h.set("straße");
        assert_eq!(h.get(), "STRASSE");
    }

    #[test]
    fn trimmed_strips_both_ends() {
        let mut h = TransformingHolder::trimmed("  Good \n");
        assert_eq!(h.get(), "Good");
        h.set("RxMobileTeam is a mobile full-stack development team.\n\n\n\n\n                 \n");
        assert_eq!(h.get(), "RxMobileTeam is a mobile full-stack development team.");
        h.set("   \t ");
        assert_eq!(h.get(), "");
    }

    #[test]
    fn custom_closure_transform() {
        let suffix = "!";
        let mut h = TransformingHolder::new("hi", |s: &str| {
            let mut out = s.to_string();
            out.push_str(suffix);
            out
        });
        assert_eq!(h.get(), "hi!");
        h.set("bye");
        assert_eq!(h.to_string(), "bye!");
        assert_eq!(h.into_inner(), "bye!");
    }

    #[test]
    fn profile_defaults_and_updates() {
        let mut p = UserProfile::default();
        assert_eq!(p.name(), "RX-MOBILE-TEAM");
        assert_eq!(p.bio(), "Good");
        p.set_name("RxMobileTeam");
        p.set_bio("  team bio  ");
        assert_eq!(p.name(), "RXMOBILETEAM");
        assert_eq!(p.bio(), "team bio");
    }
}
