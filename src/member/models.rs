/*
 * member/models.rs
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

use crate::schema::team_members;
use chrono::NaiveDateTime;
use docwell_core::roles::Role;
use docwell_core::types::{TeamId, UserId};

#[derive(Debug, Insertable)]
#[diesel(table_name = team_members)]
pub struct NewMember {
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: Role,
    pub created_at: NaiveDateTime,
}
