/*
 * space/manager.rs
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

use super::models::{NewSpace, NewSpaceInput, SpaceChanges, UpdateSpace};
use crate::manager_prelude::*;
use crate::schema::spaces;

make_manager!(SpaceManager, "space manager");

impl SpaceManager<'_> {
    pub fn create(&mut self, owner_id: UserId, input: NewSpaceInput) -> Result<Space> {
        let name = require_text(input.name, "Name cannot be empty")?;
        let slug = resolve_slug(input.slug, name)?;

        info!("Creating space '{}' ({}) for user ID {}", name, slug, owner_id);

        let timestamp = now();
        let model = NewSpace {
            name,
            slug: &slug,
            description: non_empty(input.description),
            owner_id,
            is_public: input.is_public,
            created_at: timestamp,
            updated_at: timestamp,
        };

        diesel::insert_into(spaces::table)
            .values(&model)
            .get_result::<Space>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::SpaceExists))
    }

    pub fn get_from_id(&mut self, id: SpaceId) -> Result<Option<Space>> {
        debug!("Getting space for ID {}", id);

        let space = spaces::table
            .filter(spaces::space_id.eq(id))
            .first::<Space>(self.conn)
            .optional()?;

        Ok(space)
    }

    pub fn get_from_slug(&mut self, slug: &str) -> Result<Option<Space>> {
        debug!("Getting space for slug '{}'", slug);

        let space = spaces::table
            .filter(spaces::slug.eq(slug))
            .first::<Space>(self.conn)
            .optional()?;

        Ok(space)
    }

    /// Lists the spaces owned by a user, newest first.
    pub fn list_for_owner(&mut self, owner_id: UserId) -> Result<Vec<Space>> {
        debug!("Listing spaces owned by user ID {}", owner_id);

        let spaces = spaces::table
            .filter(spaces::owner_id.eq(owner_id))
            .order_by((spaces::created_at.desc(), spaces::space_id.desc()))
            .load::<Space>(self.conn)?;

        Ok(spaces)
    }

    pub fn edit(&mut self, id: SpaceId, changes: SpaceChanges) -> Result<Space> {
        let name = match changes.name {
            Some(name) => Some(require_text(name, "Name cannot be empty")?),
            None => None,
        };

        let model = UpdateSpace {
            name,
            description: changes.description.map(non_empty),
            is_public: changes.is_public,
            updated_at: now(),
        };

        info!("Editing space ID {}, data: {:?}", id, &model);

        diesel::update(spaces::table.filter(spaces::space_id.eq(id)))
            .set(&model)
            .get_result::<Space>(self.conn)
            .optional()?
            .ok_or(Error::SpaceNotFound)
    }
}
