/*
 * utils.rs
 *
 * docwell - Documentation workspace service
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

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};

/// Current time as stored in timestamp columns.
#[inline]
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[inline]
pub fn rows_to_result(rows: usize) -> bool {
    match rows {
        0 => false,
        1 => true,
        _ => {
            error!("Multiple rows affected by an update or delete: {}", rows);

            true
        }
    }
}

/// The `order_index` one past the largest existing sibling, or 0 for the first.
#[inline]
pub fn next_order_index(max: Option<i32>) -> i32 {
    max.map_or(0, |index| index + 1)
}

/// Treats an empty or whitespace-only optional field as absent.
#[inline]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Trims a required text field, failing with `message` if nothing is left.
pub fn require_text<'a>(value: &'a str, message: &'static str) -> Result<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        warn!("Rejecting empty field: {}", message);
        Err(Error::StaticMsg(message))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_index() {
        assert_eq!(next_order_index(None), 0);
        assert_eq!(next_order_index(Some(0)), 1);
        assert_eq!(next_order_index(Some(7)), 8);
    }

    #[test]
    fn empty_fields() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" text ")), Some("text"));
    }

    #[test]
    fn required_fields() {
        assert_eq!(require_text("  Guide ", "Title cannot be empty").unwrap(), "Guide");

        let error = require_text(" \t", "Title cannot be empty").expect_err("Accepted blank title");
        assert_eq!(error.to_string(), "error: Title cannot be empty");
    }
}
