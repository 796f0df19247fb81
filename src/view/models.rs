/*
 * view/models.rs
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

use crate::schema::page_views;
use chrono::NaiveDateTime;
use docwell_core::types::{DocumentId, UserId};

#[derive(Debug, Insertable)]
#[diesel(table_name = page_views)]
pub struct NewPageView<'a> {
    pub document_id: DocumentId,
    pub visitor_id: &'a str,
    pub user_id: Option<UserId>,
    pub viewed_at: NaiveDateTime,
}
