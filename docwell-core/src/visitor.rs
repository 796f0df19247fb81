/*
 * visitor.rs
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

//! Anonymous per-client identifiers used for view counting.

use crate::{Error, Result};
use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[serde(transparent)]
pub struct VisitorId(Uuid);

impl VisitorId {
    #[inline]
    pub fn generate() -> Self {
        VisitorId(Uuid::new_v4())
    }

    /// Reads the identifier stored at `path`, creating and saving a new one
    /// if the file is missing or does not hold a valid identifier.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => match contents.parse() {
                Ok(id) => return Ok(id),
                Err(_) => warn!("Discarding malformed visitor ID in {}", path.display()),
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => (),
            Err(error) => return Err(Error::Io(error)),
        }

        let id = VisitorId::generate();
        info!("Saving new visitor ID {} to {}", id, path.display());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, id.to_string())?;
        Ok(id)
    }
}

impl FromStr for VisitorId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Uuid::parse_str(value.trim())
            .map(VisitorId)
            .map_err(|_| Error::StaticMsg("malformed visitor ID"))
    }
}

impl Display for VisitorId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(VisitorId::generate(), VisitorId::generate());
    }

    #[test]
    fn parse_roundtrip() {
        let id = VisitorId::generate();
        let parsed: VisitorId = id.to_string().parse().expect("Unable to parse visitor ID");
        assert_eq!(id, parsed);

        assert!("not-a-uuid".parse::<VisitorId>().is_err());
    }

    #[test]
    fn persisted() {
        let dir = tempdir().expect("Unable to create temp dir");
        let path = dir.path().join("state").join("visitor_id");

        let first = VisitorId::load_or_create(&path).expect("Unable to create visitor ID");
        let second = VisitorId::load_or_create(&path).expect("Unable to load visitor ID");
        assert_eq!(first, second);

        fs::write(&path, "garbage").expect("Unable to overwrite visitor ID");
        let third = VisitorId::load_or_create(&path).expect("Unable to replace visitor ID");
        assert_ne!(first, third);
    }
}
