/*
 * models/document.rs
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
pub struct Document {
    document_id: DocumentId,
    collection_id: CollectionId,
    parent_id: Option<DocumentId>,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    icon: Option<String>,
    order_index: i32,
    is_published: bool,
    template: Option<String>,
    version: i32,
    created_by: UserId,
    updated_by: Option<UserId>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    published_at: Option<NaiveDateTime>,
}

impl Document {
    /// Version number given to a newly created document.
    pub const FIRST_VERSION: i32 = 1;

    #[inline]
    pub fn id(&self) -> DocumentId {
        self.document_id
    }

    #[inline]
    pub fn collection_id(&self) -> CollectionId {
        self.collection_id
    }

    #[inline]
    pub fn parent_id(&self) -> Option<DocumentId> {
        self.parent_id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn icon(&self) -> Option<&str> {
        self.icon.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn order_index(&self) -> i32 {
        self.order_index
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    #[inline]
    pub fn template(&self) -> Option<&str> {
        self.template.ref_map(|s| s.as_str())
    }

    #[inline]
    pub fn version(&self) -> i32 {
        self.version
    }

    #[inline]
    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    #[inline]
    pub fn updated_by(&self) -> Option<UserId> {
        self.updated_by
    }

    #[inline]
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    #[inline]
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.published_at
    }
}
