/*
 * team/manager.rs
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

use super::models::NewTeam;
use crate::manager_prelude::*;
use crate::schema::{team_members, teams};

make_manager!(TeamManager, "team manager");

impl TeamManager<'_> {
    pub fn create(&mut self, name: &str, slug: Option<&str>, avatar_url: Option<&str>) -> Result<Team> {
        let name = require_text(name, "Team name cannot be empty")?;
        let slug = resolve_slug(slug, name)?;

        info!("Creating team '{}' ({})", name, slug);

        let timestamp = now();
        let model = NewTeam {
            name,
            slug: &slug,
            avatar_url: non_empty(avatar_url),
            created_at: timestamp,
            updated_at: timestamp,
        };

        diesel::insert_into(teams::table)
            .values(&model)
            .get_result::<Team>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::TeamExists))
    }

    pub fn get_from_id(&mut self, id: TeamId) -> Result<Option<Team>> {
        debug!("Getting team for ID {}", id);

        let team = teams::table
            .filter(teams::team_id.eq(id))
            .first::<Team>(self.conn)
            .optional()?;

        Ok(team)
    }

    pub fn get_from_slug(&mut self, slug: &str) -> Result<Option<Team>> {
        debug!("Getting team for slug '{}'", slug);

        let team = teams::table
            .filter(teams::slug.eq(slug))
            .first::<Team>(self.conn)
            .optional()?;

        Ok(team)
    }

    /// Lists the teams a user belongs to, along with their role in each.
    pub fn list_for_user(&mut self, user_id: UserId) -> Result<Vec<(Team, Role)>> {
        debug!("Listing teams for user ID {}", user_id);

        let teams = teams::table
            .inner_join(team_members::table)
            .filter(team_members::user_id.eq(user_id))
            .order_by((teams::name.asc(), teams::team_id.asc()))
            .select((teams::all_columns, team_members::role))
            .load::<(Team, Role)>(self.conn)?;

        Ok(teams)
    }
}
