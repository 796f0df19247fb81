/*
 * models/view.rs
 *
 * docwell-core - Documentation workspace service
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

use super::prelude::*;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    view_id: ViewId,
    document_id: DocumentId,
    visitor_id: String,
    user_id: Option<UserId>,
    viewed_at: NaiveDateTime,
}

impl PageView {
    #[inline]
    pub fn id(&self) -> ViewId {
        self.view_id
    }

    #[inline]
    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }

    #[inline]
    pub fn visitor_id(&self) -> &str {
        &self.visitor_id
    }

    #[inline]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    #[inline]
    pub fn viewed_at(&self) -> NaiveDateTime {
        self.viewed_at
    }
}
