/*
 * comment/manager.rs
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

use super::models::NewComment;
use crate::manager_prelude::*;
use crate::schema::{comments, users};

make_manager!(CommentManager, "comment manager");

impl CommentManager<'_> {
    pub fn add(&mut self, document_id: DocumentId, user_id: UserId, content: &str) -> Result<Comment> {
        let content = content.trim();
        if content.is_empty() {
            warn!("Rejecting empty comment on document ID {}", document_id);
            return Err(Error::EmptyComment);
        }

        info!("Adding comment by user ID {} on document ID {}", user_id, document_id);

        let timestamp = now();
        let model = NewComment {
            document_id,
            user_id,
            content,
            resolved: false,
            created_at: timestamp,
            updated_at: timestamp,
        };

        let comment = diesel::insert_into(comments::table)
            .values(&model)
            .get_result::<Comment>(self.conn)?;

        Ok(comment)
    }

    pub fn get_from_id(&mut self, id: CommentId) -> Result<Option<Comment>> {
        debug!("Getting comment for ID {}", id);

        let comment = comments::table
            .filter(comments::comment_id.eq(id))
            .first::<Comment>(self.conn)
            .optional()?;

        Ok(comment)
    }

    /// Lists a document's comments with their authors' emails, oldest first.
    pub fn list(&mut self, document_id: DocumentId) -> Result<Vec<CommentWithAuthor>> {
        debug!("Listing comments on document ID {}", document_id);

        let rows = comments::table
            .inner_join(users::table)
            .filter(comments::document_id.eq(document_id))
            .order_by((comments::created_at.asc(), comments::comment_id.asc()))
            .select((comments::all_columns, users::email))
            .load::<(Comment, String)>(self.conn)?;

        let comments = rows
            .into_iter()
            .map(|(comment, email)| CommentWithAuthor { comment, email })
            .collect();

        Ok(comments)
    }

    pub fn set_resolved(&mut self, id: CommentId, resolved: bool) -> Result<Comment> {
        info!(
            "Marking comment ID {} as {}",
            id,
            if resolved { "resolved" } else { "open" },
        );

        diesel::update(comments::table.filter(comments::comment_id.eq(id)))
            .set((
                comments::resolved.eq(resolved),
                comments::updated_at.eq(now()),
            ))
            .get_result::<Comment>(self.conn)
            .optional()?
            .ok_or(Error::CommentNotFound)
    }
}
