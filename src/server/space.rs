/*
 * server/space.rs
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

use super::access::require_space_owner;
use super::Server;
use crate::manager_prelude::*;
use crate::space::{NewSpaceInput, SpaceChanges, SpaceManager};
use crate::user::UserManager;

impl Server {
    /// Creates a space owned by the given user.
    pub fn create_space(&self, owner_id: UserId, input: NewSpaceInput) -> Result<Space> {
        self.transaction(|conn| {
            UserManager::new(conn).check(owner_id)?;
            SpaceManager::new(conn).create(owner_id, input)
        })
    }

    pub fn get_space(&self, slug: &str) -> Result<Space> {
        let mut conn = self.conn();

        SpaceManager::new(&mut conn)
            .get_from_slug(slug)?
            .ok_or(Error::SpaceNotFound)
    }

    pub fn get_space_by_id(&self, id: SpaceId) -> Result<Space> {
        let mut conn = self.conn();

        SpaceManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::SpaceNotFound)
    }

    /// Lists a user's spaces, newest first.
    pub fn list_spaces(&self, owner_id: UserId) -> Result<Vec<Space>> {
        let mut conn = self.conn();

        SpaceManager::new(&mut conn).list_for_owner(owner_id)
    }

    /// Edits the space's settings. Only its owner may do so.
    /// Changing a space's slug is not supported.
    pub fn edit_space(&self, actor: UserId, id: SpaceId, changes: SpaceChanges) -> Result<Space> {
        self.transaction(|conn| {
            let mut spaces = SpaceManager::new(conn);
            let space = spaces.get_from_id(id)?.ok_or(Error::SpaceNotFound)?;
            require_space_owner(&space, actor)?;

            if !changes.has_changes() {
                debug!("No changes to space ID {}", id);
                return Ok(space);
            }

            spaces.edit(id, changes)
        })
    }

    /// Gets a space for anonymous readers.
    /// Private spaces are reported as not found.
    pub fn get_public_space(&self, slug: &str) -> Result<Space> {
        let space = self.get_space(slug)?;

        if space.is_public() {
            Ok(space)
        } else {
            debug!("Space '{}' is private, hiding it", slug);
            Err(Error::SpaceNotFound)
        }
    }
}
