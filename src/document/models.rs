/*
 * document/models.rs
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

use crate::schema::{document_versions, documents};
use chrono::NaiveDateTime;
use docwell_core::types::{CollectionId, DocumentId, TemplateId, UserId};

/// Fields supplied when creating a document.
///
/// An absent `slug` is derived from the title.
/// If a template is given and `content` is blank, the template's content is used.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NewDocumentInput<'a> {
    pub title: &'a str,
    pub slug: Option<&'a str>,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub parent_id: Option<DocumentId>,
    pub template_id: Option<TemplateId>,
}

/// A save from the editor.
///
/// `expected_version` is the version the editor loaded. The save is
/// rejected if the document has moved on since then.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DocumentEdit<'a> {
    pub expected_version: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocument<'a> {
    pub collection_id: CollectionId,
    pub parent_id: Option<DocumentId>,
    pub title: &'a str,
    pub slug: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub order_index: i32,
    pub is_published: bool,
    pub template: Option<&'a str>,
    pub version: i32,
    pub created_by: UserId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = documents, treat_none_as_null = true)]
pub struct SaveDocument<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub version: i32,
    pub updated_by: Option<UserId>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = document_versions)]
pub struct NewVersion<'a> {
    pub document_id: DocumentId,
    pub version: i32,
    pub title: &'a str,
    pub content: &'a str,
    pub created_by: UserId,
    pub created_at: NaiveDateTime,
    pub change_summary: Option<&'a str>,
}
