/*
 * server/template.rs
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

use super::access::require_permission;
use super::Server;
use crate::manager_prelude::*;
use crate::template::{NewTemplateInput, TemplateManager};
use crate::workspace::WorkspaceManager;

impl Server {
    /// Adds a document template to a workspace. Requires the admin role.
    pub fn create_template(
        &self,
        actor: UserId,
        workspace_slug: &str,
        input: NewTemplateInput,
    ) -> Result<Template> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_slug(workspace_slug)?
                .ok_or(Error::WorkspaceNotFound)?;

            require_permission(conn, workspace.team_id(), actor, Permission::ManageContent)?;
            TemplateManager::new(conn).create(workspace.id(), input)
        })
    }

    pub fn get_template(&self, id: TemplateId) -> Result<Template> {
        let mut conn = self.conn();

        TemplateManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::TemplateNotFound)
    }

    /// Lists a workspace's templates, the default one first.
    pub fn list_templates(&self, workspace_id: WorkspaceId) -> Result<Vec<Template>> {
        let mut conn = self.conn();

        TemplateManager::new(&mut conn).list(workspace_id)
    }
}
