/*
 * collection/manager.rs
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

use super::models::{NewCollection, NewCollectionInput};
use crate::manager_prelude::*;
use crate::schema::collections;
use diesel::dsl::max;

make_manager!(CollectionManager, "collection manager");

impl CollectionManager<'_> {
    pub fn create(&mut self, workspace_id: WorkspaceId, input: NewCollectionInput) -> Result<Collection> {
        let name = require_text(input.name, "Name cannot be empty")?;
        let slug = resolve_slug(input.slug, name)?;

        let max_index = collections::table
            .filter(collections::workspace_id.eq(workspace_id))
            .select(max(collections::order_index))
            .get_result::<Option<i32>>(self.conn)?;

        let order_index = next_order_index(max_index);

        info!(
            "Creating collection '{}' in workspace ID {} at position {}",
            slug, workspace_id, order_index,
        );

        let timestamp = now();
        let model = NewCollection {
            workspace_id,
            name,
            slug: &slug,
            description: non_empty(input.description),
            icon: non_empty(input.icon),
            order_index,
            created_at: timestamp,
            updated_at: timestamp,
        };

        diesel::insert_into(collections::table)
            .values(&model)
            .get_result::<Collection>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::CollectionExists))
    }

    pub fn get_from_id(&mut self, id: CollectionId) -> Result<Option<Collection>> {
        debug!("Getting collection for ID {}", id);

        let collection = collections::table
            .filter(collections::collection_id.eq(id))
            .first::<Collection>(self.conn)
            .optional()?;

        Ok(collection)
    }

    pub fn get_from_slug(&mut self, workspace_id: WorkspaceId, slug: &str) -> Result<Option<Collection>> {
        debug!("Getting collection '{}' in workspace ID {}", slug, workspace_id);

        let collection = collections::table
            .filter(collections::workspace_id.eq(workspace_id))
            .filter(collections::slug.eq(slug))
            .first::<Collection>(self.conn)
            .optional()?;

        Ok(collection)
    }

    /// Lists a workspace's collections by position.
    pub fn list(&mut self, workspace_id: WorkspaceId) -> Result<Vec<Collection>> {
        debug!("Listing collections in workspace ID {}", workspace_id);

        let collections = collections::table
            .filter(collections::workspace_id.eq(workspace_id))
            .order_by((collections::order_index.asc(), collections::collection_id.asc()))
            .load::<Collection>(self.conn)?;

        Ok(collections)
    }
}
