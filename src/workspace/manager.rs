/*
 * workspace/manager.rs
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

use super::models::{NewWorkspace, NewWorkspaceInput, UpdateWorkspace, WorkspaceChanges};
use crate::manager_prelude::*;
use crate::schema::workspaces;

make_manager!(WorkspaceManager, "workspace manager");

impl WorkspaceManager<'_> {
    pub fn create(&mut self, team_id: TeamId, input: NewWorkspaceInput) -> Result<Workspace> {
        let name = require_text(input.name, "Name cannot be empty")?;
        let slug = resolve_slug(input.slug, name)?;

        info!("Creating workspace '{}' ({}) in team ID {}", name, slug, team_id);

        let timestamp = now();
        let model = NewWorkspace {
            team_id,
            name,
            slug: &slug,
            description: non_empty(input.description),
            icon: non_empty(input.icon),
            is_public: input.is_public,
            theme: input.theme,
            created_at: timestamp,
            updated_at: timestamp,
        };

        diesel::insert_into(workspaces::table)
            .values(&model)
            .get_result::<Workspace>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::WorkspaceExists))
    }

    pub fn get_from_id(&mut self, id: WorkspaceId) -> Result<Option<Workspace>> {
        debug!("Getting workspace for ID {}", id);

        let workspace = workspaces::table
            .filter(workspaces::workspace_id.eq(id))
            .first::<Workspace>(self.conn)
            .optional()?;

        Ok(workspace)
    }

    pub fn get_from_slug(&mut self, slug: &str) -> Result<Option<Workspace>> {
        debug!("Getting workspace for slug '{}'", slug);

        let workspace = workspaces::table
            .filter(workspaces::slug.eq(slug))
            .first::<Workspace>(self.conn)
            .optional()?;

        Ok(workspace)
    }

    /// Lists a team's workspaces, newest first.
    pub fn list(&mut self, team_id: TeamId) -> Result<Vec<Workspace>> {
        debug!("Listing workspaces of team ID {}", team_id);

        let workspaces = workspaces::table
            .filter(workspaces::team_id.eq(team_id))
            .order_by((workspaces::created_at.desc(), workspaces::workspace_id.desc()))
            .load::<Workspace>(self.conn)?;

        Ok(workspaces)
    }

    pub fn edit(&mut self, id: WorkspaceId, changes: WorkspaceChanges) -> Result<Workspace> {
        let name = match changes.name {
            Some(name) => Some(require_text(name, "Name cannot be empty")?),
            None => None,
        };

        let model = UpdateWorkspace {
            name,
            description: changes.description.map(non_empty),
            icon: changes.icon.map(non_empty),
            is_public: changes.is_public,
            theme: changes.theme,
            custom_domain: changes.custom_domain.map(non_empty),
            updated_at: now(),
        };

        info!("Editing workspace ID {}, data: {:?}", id, &model);

        diesel::update(workspaces::table.filter(workspaces::workspace_id.eq(id)))
            .set(&model)
            .get_result::<Workspace>(self.conn)
            .optional()?
            .ok_or(Error::WorkspaceNotFound)
    }
}
