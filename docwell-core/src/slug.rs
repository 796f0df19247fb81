/*
 * slug.rs
 *
 * docwell-core - Documentation workspace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! URL-safe identifiers derived from display names.
//!
//! Slugs are never checked for uniqueness here. That is left to the
//! unique constraints in storage, which report a conflict on insert.

use crate::{Error, Result};
use regex::Regex;

lazy_static! {
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// Lowercases the text, collapses each run of characters outside `[a-z0-9]`
/// into one hyphen, and strips hyphens from both ends.
///
/// The result is either empty or a valid slug.
pub fn slugify(text: &str) -> String {
    let lowercase = text.to_lowercase();
    let replaced = SEPARATOR_REGEX.replace_all(&lowercase, "-");

    replaced.trim_matches('-').to_string()
}

#[inline]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Picks the slug for a new resource.
///
/// An explicit slug is used as given, and must already be valid.
/// Otherwise the slug is derived from the name.
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String> {
    let slug = match explicit.map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(name),
    };

    if is_valid_slug(&slug) {
        Ok(slug)
    } else {
        warn!("Rejecting invalid slug '{}' (name '{}')", slug, name);

        Err(Error::InvalidSlug(slug))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slugify("My Documentation"), "my-documentation");
        assert_eq!(slugify("Product Docs!! 2.0"), "product-docs-2-0");
        assert_eq!(slugify("  --Leading and trailing--  "), "leading-and-trailing");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("UPPER_case__snake"), "upper-case-snake");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn output_shape() {
        let inputs = [
            "Hello, World",
            "  spaced   out  ",
            "tabs\tand\nnewlines",
            "日本語のタイトル",
            "a--b",
            "-x-",
            "100% Coverage?",
            "emoji 📄 docs",
            "ÀÉÎÕÜ",
            "v1.2.3-rc.1",
        ];

        for input in &inputs {
            let slug = slugify(input);
            assert!(
                slug.is_empty() || is_valid_slug(&slug),
                "Slug for {:?} is malformed: {:?}",
                input,
                slug,
            );
        }
    }

    #[test]
    fn validation() {
        assert!(is_valid_slug("getting-started"));
        assert!(is_valid_slug("v2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn resolve() {
        assert_eq!(resolve_slug(None, "My Team").unwrap(), "my-team");
        assert_eq!(resolve_slug(Some(""), "My Team").unwrap(), "my-team");
        assert_eq!(resolve_slug(Some("custom"), "My Team").unwrap(), "custom");

        let error = resolve_slug(Some("Not Valid"), "My Team").expect_err("Accepted bad slug");
        assert_eq!(error.fixed_name(), "invalid-slug");

        let error = resolve_slug(None, "???").expect_err("Accepted empty slug");
        assert_eq!(error.fixed_name(), "invalid-slug");
    }
}
