/*
 * server/view.rs
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
use crate::document::DocumentManager;
use crate::manager_prelude::*;
use crate::view::ViewManager;

impl Server {
    /// Records one view of a document.
    pub fn record_view(
        &self,
        document_id: DocumentId,
        visitor_id: VisitorId,
        user_id: Option<UserId>,
    ) -> Result<PageView> {
        self.transaction(|conn| {
            DocumentManager::new(conn)
                .get_from_id(document_id)?
                .ok_or(Error::DocumentNotFound)?;

            ViewManager::new(conn).record(document_id, visitor_id, user_id)
        })
    }

    /// Total number of recorded views of a document.
    pub fn view_count(&self, document_id: DocumentId) -> Result<i64> {
        let mut conn = self.conn();

        ViewManager::new(&mut conn).count(document_id)
    }

    /// Number of distinct visitors who viewed a document.
    pub fn visitor_count(&self, document_id: DocumentId) -> Result<i64> {
        let mut conn = self.conn();

        ViewManager::new(&mut conn).count_visitors(document_id)
    }
}
