/*
 * server/workspace.rs
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
use crate::member::MemberManager;
use crate::team::TeamManager;
use crate::workspace::{NewWorkspaceInput, WorkspaceChanges, WorkspaceManager};

impl Server {
    /// Creates a workspace in the team. Requires the admin role.
    pub fn create_workspace(
        &self,
        actor: UserId,
        team_slug: &str,
        input: NewWorkspaceInput,
    ) -> Result<Workspace> {
        self.transaction(|conn| {
            let team = TeamManager::new(conn)
                .get_from_slug(team_slug)?
                .ok_or(Error::TeamNotFound)?;

            require_permission(conn, team.id(), actor, Permission::ManageContent)?;
            WorkspaceManager::new(conn).create(team.id(), input)
        })
    }

    pub fn get_workspace(&self, slug: &str) -> Result<Workspace> {
        let mut conn = self.conn();

        WorkspaceManager::new(&mut conn)
            .get_from_slug(slug)?
            .ok_or(Error::WorkspaceNotFound)
    }

    pub fn get_workspace_by_id(&self, id: WorkspaceId) -> Result<Workspace> {
        let mut conn = self.conn();

        WorkspaceManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::WorkspaceNotFound)
    }

    /// Lists a team's workspaces, newest first.
    /// Readers outside the team only see public workspaces.
    pub fn list_workspaces(&self, reader: Option<UserId>, team_id: TeamId) -> Result<Vec<Workspace>> {
        self.transaction(|conn| {
            let is_member = match reader {
                Some(user_id) => MemberManager::new(conn).role_of(team_id, user_id)?.is_some(),
                None => false,
            };

            let mut workspaces = WorkspaceManager::new(conn).list(team_id)?;
            if !is_member {
                workspaces.retain(|workspace| workspace.is_public());
            }

            Ok(workspaces)
        })
    }

    /// Changes a workspace's settings. Requires the admin role.
    /// Changing a workspace's slug is not supported.
    pub fn edit_workspace(
        &self,
        actor: UserId,
        id: WorkspaceId,
        changes: WorkspaceChanges,
    ) -> Result<Workspace> {
        self.transaction(|conn| {
            let workspace = WorkspaceManager::new(conn)
                .get_from_id(id)?
                .ok_or(Error::WorkspaceNotFound)?;

            require_permission(conn, workspace.team_id(), actor, Permission::ManageContent)?;

            if !changes.has_changes() {
                debug!("No changes to workspace ID {}", id);
                return Ok(workspace);
            }

            WorkspaceManager::new(conn).edit(id, changes)
        })
    }

    /// Gets a workspace for anonymous readers.
    /// Private workspaces are reported as not found.
    pub fn get_public_workspace(&self, slug: &str) -> Result<Workspace> {
        let workspace = self.get_workspace(slug)?;

        if workspace.is_public() {
            Ok(workspace)
        } else {
            debug!("Workspace '{}' is private, hiding it", slug);
            Err(Error::WorkspaceNotFound)
        }
    }
}
