/*
 * server/collection.rs
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

use super::access::{require_permission, workspace_visibility};
use super::Server;
use crate::collection::{CollectionManager, CollectionOverview, NewCollectionInput};
use crate::document::DocumentManager;
use crate::manager_prelude::*;
use crate::workspace::WorkspaceManager;

impl Server {
    /// Adds a collection to the end of the workspace. Requires the admin role.
    pub fn create_collection(
        &self,
        actor: UserId,
        workspace_slug: &str,
        input: NewCollectionInput,
    ) -> Result<Collection> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_slug(workspace_slug)?
                .ok_or(Error::WorkspaceNotFound)?;

            require_permission(conn, workspace.team_id(), actor, Permission::ManageContent)?;
            CollectionManager::new(conn).create(workspace.id(), input)
        })
    }

    pub fn get_collection(
        &self,
        reader: Option<UserId>,
        workspace_slug: &str,
        slug: &str,
    ) -> Result<Collection> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_slug(workspace_slug)?
                .ok_or(Error::WorkspaceNotFound)?;

            workspace_visibility(conn, &workspace, reader)?;
            CollectionManager::new(conn)
                .get_from_slug(workspace.id(), slug)?
                .ok_or(Error::CollectionNotFound)
        })
    }

    /// Lists a workspace's collections, ordered by `order_index`.
    pub fn list_collections(&self, reader: Option<UserId>, workspace_id: WorkspaceId) -> Result<Vec<Collection>> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_id(workspace_id)?
                .ok_or(Error::WorkspaceNotFound)?;

            workspace_visibility(conn, &workspace, reader)?;
            CollectionManager::new(conn).list(workspace_id)
        })
    }

    /// Loads a workspace's collections together with their top-level documents.
    /// Readers outside the team only see published documents.
    pub fn workspace_overview(
        &self,
        reader: Option<UserId>,
        workspace_slug: &str,
    ) -> Result<Vec<CollectionOverview>> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_slug(workspace_slug)?
                .ok_or(Error::WorkspaceNotFound)?;

            let visibility = workspace_visibility(conn, &workspace, reader)?;
            let collections = CollectionManager::new(conn).list(workspace.id())?;
            let mut overview = Vec::with_capacity(collections.len());

            for collection in collections {
                let mut documents = DocumentManager::new(conn).list_roots(collection.id())?;
                documents.retain(|document| visibility.shows(document));

                overview.push(CollectionOverview {
                    collection,
                    documents,
                });
            }

            Ok(overview)
        })
    }
}
