/*
 * server/comment.rs
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

use super::access::require_permission;
use super::Server;
use crate::comment::CommentManager;
use crate::document::DocumentManager;
use crate::manager_prelude::*;

impl Server {
    /// Comments on a document. Any team member may comment.
    pub fn add_comment(&self, actor: UserId, document_id: DocumentId, content: &str) -> Result<Comment> {
        self.transaction(|conn| {
            team_of_document(conn, actor, document_id, Permission::Comment)?;
            CommentManager::new(conn).add(document_id, actor, content)
        })
    }

    /// Lists a document's comments with author emails, oldest first.
    /// Only team members may read them.
    pub fn list_comments(&self, actor: UserId, document_id: DocumentId) -> Result<Vec<CommentWithAuthor>> {
        self.transaction(|conn| {
            team_of_document(conn, actor, document_id, Permission::ViewContent)?;
            CommentManager::new(conn).list(document_id)
        })
    }

    /// Marks a comment resolved or reopens it.
    /// Allowed for the comment's author and for editors.
    pub fn resolve_comment(&self, actor: UserId, id: CommentId, resolved: bool) -> Result<Comment> {
        self.transaction(|conn| {
            let comment = CommentManager::new(conn)
                .get_from_id(id)?
                .ok_or(Error::CommentNotFound)?;

            let permission = if comment.user_id() == actor {
                Permission::Comment
            } else {
                Permission::EditContent
            };

            team_of_document(conn, actor, comment.document_id(), permission)?;
            CommentManager::new(conn).set_resolved(id, resolved)
        })
    }
}

fn team_of_document(
    conn: &mut SqliteConnection,
    actor: UserId,
    document_id: DocumentId,
    permission: Permission,
) -> Result<Role> {
    let mut documents = DocumentManager::new(conn);
    let document = documents
        .get_from_id(document_id)?
        .ok_or(Error::DocumentNotFound)?;

    let workspace = documents.workspace_of(&document)?;
    require_permission(conn, workspace.team_id(), actor, permission)
}
