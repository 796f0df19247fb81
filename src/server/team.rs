/*
 * server/team.rs
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

use super::Server;
use crate::manager_prelude::*;
use crate::member::MemberManager;
use crate::team::TeamManager;
use crate::user::UserManager;

impl Server {
    /// Creates a team, making its creator the first owner.
    pub fn create_team(&self, actor: UserId, name: &str, slug: Option<&str>) -> Result<Team> {
        self.transaction(|conn| {
            UserManager::new(conn).check(actor)?;

            let team = TeamManager::new(conn).create(name, slug, None)?;
            MemberManager::new(conn).add(team.id(), actor, Role::Owner)?;

            Ok(team)
        })
    }

    pub fn get_team(&self, slug: &str) -> Result<Team> {
        let mut conn = self.conn();

        TeamManager::new(&mut conn)
            .get_from_slug(slug)?
            .ok_or(Error::TeamNotFound)
    }

    pub fn get_team_by_id(&self, id: TeamId) -> Result<Team> {
        let mut conn = self.conn();

        TeamManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::TeamNotFound)
    }

    /// Lists the teams a user belongs to, with the user's role in each.
    pub fn list_teams(&self, user_id: UserId) -> Result<Vec<(Team, Role)>> {
        let mut conn = self.conn();

        TeamManager::new(&mut conn).list_for_user(user_id)
    }
}
