/*
 * member/manager.rs
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

use super::models::NewMember;
use crate::manager_prelude::*;
use crate::schema::{team_members, users};

make_manager!(MemberManager, "member manager");

impl MemberManager<'_> {
    pub fn add(&mut self, team_id: TeamId, user_id: UserId, role: Role) -> Result<TeamMember> {
        info!(
            "Adding user ID {} to team ID {} as {}",
            user_id, team_id, role,
        );

        let model = NewMember {
            team_id,
            user_id,
            role,
            created_at: now(),
        };

        diesel::insert_into(team_members::table)
            .values(&model)
            .get_result::<TeamMember>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::MemberExists))
    }

    pub fn get_from_id(&mut self, id: MemberId) -> Result<Option<TeamMember>> {
        debug!("Getting team member for ID {}", id);

        let member = team_members::table
            .filter(team_members::member_id.eq(id))
            .first::<TeamMember>(self.conn)
            .optional()?;

        Ok(member)
    }

    pub fn get_for_user(&mut self, team_id: TeamId, user_id: UserId) -> Result<Option<TeamMember>> {
        debug!("Getting membership of user ID {} in team ID {}", user_id, team_id);

        let member = team_members::table
            .filter(team_members::team_id.eq(team_id))
            .filter(team_members::user_id.eq(user_id))
            .first::<TeamMember>(self.conn)
            .optional()?;

        Ok(member)
    }

    #[inline]
    pub fn role_of(&mut self, team_id: TeamId, user_id: UserId) -> Result<Option<Role>> {
        let member = self.get_for_user(team_id, user_id)?;

        Ok(member.map(|member| member.role()))
    }

    /// Lists a team's members with their emails, oldest membership first.
    pub fn list(&mut self, team_id: TeamId) -> Result<Vec<TeamMemberWithUser>> {
        debug!("Listing members of team ID {}", team_id);

        let rows = team_members::table
            .inner_join(users::table)
            .filter(team_members::team_id.eq(team_id))
            .order_by((team_members::created_at.asc(), team_members::member_id.asc()))
            .select((team_members::all_columns, users::email))
            .load::<(TeamMember, String)>(self.conn)?;

        let members = rows
            .into_iter()
            .map(|(member, email)| TeamMemberWithUser { member, email })
            .collect();

        Ok(members)
    }

    pub fn count_owners(&mut self, team_id: TeamId) -> Result<i64> {
        let count = team_members::table
            .filter(team_members::team_id.eq(team_id))
            .filter(team_members::role.eq(Role::Owner))
            .count()
            .get_result::<i64>(self.conn)?;

        Ok(count)
    }

    pub fn set_role(&mut self, id: MemberId, role: Role) -> Result<TeamMember> {
        info!("Setting role of member ID {} to {}", id, role);

        diesel::update(team_members::table.filter(team_members::member_id.eq(id)))
            .set(team_members::role.eq(role))
            .get_result::<TeamMember>(self.conn)
            .optional()?
            .ok_or(Error::MemberNotFound)
    }

    pub fn remove(&mut self, id: MemberId) -> Result<bool> {
        info!("Removing member ID {}", id);

        let rows = diesel::delete(team_members::table.filter(team_members::member_id.eq(id)))
            .execute(self.conn)?;

        Ok(rows_to_result(rows))
    }
}
