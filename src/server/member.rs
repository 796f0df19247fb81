/*
 * server/member.rs
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
use crate::user::UserManager;

impl Server {
    /// Lists a team's members with their emails, oldest first.
    /// Only members of the team may see the list.
    pub fn list_members(&self, actor: UserId, team_id: TeamId) -> Result<Vec<TeamMemberWithUser>> {
        self.transaction(|conn| {
            TeamManager::new(conn)
                .get_from_id(team_id)?
                .ok_or(Error::TeamNotFound)?;

            require_permission(conn, team_id, actor, Permission::ViewContent)?;
            MemberManager::new(conn).list(team_id)
        })
    }

    /// Gets the user's role in the team, if they are a member.
    pub fn member_role(&self, team_id: TeamId, user_id: UserId) -> Result<Option<Role>> {
        let mut conn = self.conn();

        MemberManager::new(&mut conn).role_of(team_id, user_id)
    }

    /// Which membership controls `viewer` should see on the row for `member_id`.
    pub fn member_controls(&self, viewer: UserId, member_id: MemberId) -> Result<MemberControls> {
        let mut conn = self.conn();
        let mut members = MemberManager::new(&mut conn);

        let member = members
            .get_from_id(member_id)?
            .ok_or(Error::MemberNotFound)?;

        let role = members.role_of(member.team_id(), viewer)?;
        Ok(MemberControls::for_member(
            role,
            member.role(),
            member.user_id() == viewer,
        ))
    }

    /// Adds an existing user to the team by email.
    pub fn invite_member(
        &self,
        actor: UserId,
        team_id: TeamId,
        email: &str,
        role: Role,
    ) -> Result<TeamMember> {
        self.transaction(|conn| {
            let actor_role = require_permission(conn, team_id, actor, Permission::ManageMembers)?;

            if !actor_role.assignable_roles().contains(&role) {
                warn!("User ID {} ({}) cannot grant role {}", actor, actor_role, role);
                return Err(Error::PermissionDenied(
                    Permission::ManageOwners.denied_message(),
                ));
            }

            let invitee = match UserManager::new(conn).get_from_email(email)? {
                Some(user) => user,
                None => {
                    warn!("No user with email '{}' to invite", email);
                    return Err(Error::InviteeNotFound);
                }
            };

            MemberManager::new(conn).add(team_id, invitee.id(), role)
        })
    }

    /// Changes another member's role.
    pub fn change_member_role(
        &self,
        actor: UserId,
        member_id: MemberId,
        role: Role,
    ) -> Result<TeamMember> {
        self.transaction(|conn| {
            let (member, actor_role) = check_member_change(conn, actor, member_id)?;

            if member.role() == role {
                debug!("Member ID {} already has role {}", member_id, role);
                return Ok(member);
            }

            if !actor_role.can_reassign(member.role(), role) {
                warn!(
                    "User ID {} ({}) cannot change member ID {} from {} to {}",
                    actor,
                    actor_role,
                    member_id,
                    member.role(),
                    role,
                );

                return Err(Error::PermissionDenied(
                    Permission::ManageOwners.denied_message(),
                ));
            }

            let mut members = MemberManager::new(conn);
            if member.role() == Role::Owner {
                check_remaining_owners(&mut members, member.team_id())?;
            }

            members.set_role(member_id, role)
        })
    }

    /// Removes another member from the team.
    pub fn remove_member(&self, actor: UserId, member_id: MemberId) -> Result<()> {
        self.transaction(|conn| {
            let (member, actor_role) = check_member_change(conn, actor, member_id)?;
            let mut members = MemberManager::new(conn);

            if member.role() == Role::Owner {
                if !actor_role.permits(Permission::ManageOwners) {
                    warn!("User ID {} ({}) cannot remove an owner", actor, actor_role);

                    return Err(Error::PermissionDenied(
                        Permission::ManageOwners.denied_message(),
                    ));
                }

                check_remaining_owners(&mut members, member.team_id())?;
            }

            if members.remove(member_id)? {
                Ok(())
            } else {
                Err(Error::MemberNotFound)
            }
        })
    }
}

/// Loads the target membership and checks the actor may manage it.
fn check_member_change(
    conn: &mut SqliteConnection,
    actor: UserId,
    member_id: MemberId,
) -> Result<(TeamMember, Role)> {
    let member = MemberManager::new(conn)
        .get_from_id(member_id)?
        .ok_or(Error::MemberNotFound)?;

    let actor_role = require_permission(conn, member.team_id(), actor, Permission::ManageMembers)?;

    if member.user_id() == actor {
        warn!("User ID {} tried to modify their own membership", actor);
        return Err(Error::CannotModifySelf);
    }

    Ok((member, actor_role))
}

fn check_remaining_owners(members: &mut MemberManager<'_>, team_id: TeamId) -> Result<()> {
    if members.count_owners(team_id)? > 1 {
        Ok(())
    } else {
        warn!("Refusing to remove the last owner of team ID {}", team_id);
        Err(Error::LastOwner)
    }
}
