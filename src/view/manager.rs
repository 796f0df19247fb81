/*
 * view/manager.rs
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

use super::models::NewPageView;
use crate::manager_prelude::*;
use crate::schema::page_views;
use diesel::dsl::count_distinct;

make_manager!(ViewManager, "view manager");

impl ViewManager<'_> {
    pub fn record(
        &mut self,
        document_id: DocumentId,
        visitor_id: VisitorId,
        user_id: Option<UserId>,
    ) -> Result<PageView> {
        let visitor_id = visitor_id.to_string();

        trace!("Recording view of document ID {} by visitor {}", document_id, visitor_id);

        let model = NewPageView {
            document_id,
            visitor_id: &visitor_id,
            user_id,
            viewed_at: now(),
        };

        let view = diesel::insert_into(page_views::table)
            .values(&model)
            .get_result::<PageView>(self.conn)?;

        Ok(view)
    }

    pub fn count(&mut self, document_id: DocumentId) -> Result<i64> {
        let count = page_views::table
            .filter(page_views::document_id.eq(document_id))
            .count()
            .get_result::<i64>(self.conn)?;

        Ok(count)
    }

    pub fn count_visitors(&mut self, document_id: DocumentId) -> Result<i64> {
        let count = page_views::table
            .filter(page_views::document_id.eq(document_id))
            .select(count_distinct(page_views::visitor_id))
            .get_result::<i64>(self.conn)?;

        Ok(count)
    }
}
