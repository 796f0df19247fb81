/*
 * server/access.rs
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

use crate::document::DocumentManager;
use crate::manager_prelude::*;
use crate::member::MemberManager;

/// Checks that `user_id` holds a role in the team allowing `permission`.
/// Returns the role on success.
pub fn require_permission(
    conn: &mut SqliteConnection,
    team_id: TeamId,
    user_id: UserId,
    permission: Permission,
) -> Result<Role> {
    let role = match MemberManager::new(conn).role_of(team_id, user_id)? {
        Some(role) => role,
        None => {
            warn!("User ID {} is not a member of team ID {}", user_id, team_id);
            return Err(Error::NotTeamMember);
        }
    };

    if role.permits(permission) {
        trace!(
            "User ID {} with role {} allowed {:?} in team ID {}",
            user_id,
            role,
            permission,
            team_id,
        );

        Ok(role)
    } else {
        warn!(
            "User ID {} with role {} denied {:?} in team ID {}",
            user_id, role, permission, team_id,
        );

        Err(Error::PermissionDenied(permission.denied_message()))
    }
}

/// How much of a workspace a reader may see.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Team members see drafts and published documents alike.
    Team,

    /// Anyone else sees only published documents of a public workspace.
    Published,
}

impl Visibility {
    #[inline]
    pub fn shows(self, document: &Document) -> bool {
        self == Visibility::Team || document.is_published()
    }
}

/// Decides what `reader` may see in the workspace.
///
/// Members need `ViewContent`. Outsiders and anonymous readers only get
/// through when the workspace is public. A private workspace is reported
/// as not found to anonymous readers.
pub fn workspace_visibility(
    conn: &mut SqliteConnection,
    workspace: &Workspace,
    reader: Option<UserId>,
) -> Result<Visibility> {
    let team_id = workspace.team_id();

    if let Some(user_id) = reader {
        if MemberManager::new(conn).role_of(team_id, user_id)?.is_some() {
            require_permission(conn, team_id, user_id, Permission::ViewContent)?;
            return Ok(Visibility::Team);
        }
    }

    if workspace.is_public() {
        trace!("Workspace ID {} is public, showing published documents", workspace.id());
        return Ok(Visibility::Published);
    }

    match reader {
        Some(user_id) => {
            require_permission(conn, team_id, user_id, Permission::ViewContent)?;
            Ok(Visibility::Team)
        }
        None => {
            debug!("Workspace ID {} is private, hiding it", workspace.id());
            Err(Error::WorkspaceNotFound)
        }
    }
}

/// Checks that the document is visible to `reader`, returning its workspace's visibility.
/// Drafts are reported as not found to outsiders.
pub fn require_visible(
    conn: &mut SqliteConnection,
    document: &Document,
    reader: Option<UserId>,
) -> Result<Visibility> {
    let workspace = DocumentManager::new(conn).workspace_of(document)?;
    let visibility = workspace_visibility(conn, &workspace, reader)?;

    if visibility.shows(document) {
        Ok(visibility)
    } else {
        debug!("Document ID {} is not published, hiding it", document.id());
        Err(Error::DocumentNotFound)
    }
}

/// Checks that `user_id` owns the space.
pub fn require_space_owner(space: &Space, user_id: UserId) -> Result<()> {
    if space.is_owned_by(user_id) {
        Ok(())
    } else {
        warn!(
            "User ID {} does not own space ID {} ('{}')",
            user_id,
            space.id(),
            space.slug(),
        );

        Err(Error::PermissionDenied("Only the owner of a space can change it"))
    }
}
