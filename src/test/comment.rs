/*
 * test/comment.rs
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

use super::prelude::*;

#[test]
fn comments() {
    run(|server| {
        let fixture = create_fixture(server);
        let document = create_document(
            server,
            &fixture.editor,
            &fixture.workspace,
            &fixture.collection,
            "Style Guide",
            "Use the active voice.",
        );

        let first = server
            .add_comment(fixture.viewer.id(), document.id(), "  Looks good to me  ")
            .expect("Viewer unable to comment");

        assert_eq!(first.content(), "Looks good to me");
        assert_eq!(first.user_id(), fixture.viewer.id());
        assert!(!first.is_resolved());

        let second = server
            .add_comment(fixture.editor.id(), document.id(), "Thanks!")
            .expect("Editor unable to comment");

        {
            let error = server
                .add_comment(fixture.viewer.id(), document.id(), " \n ")
                .expect_err("Blank comment accepted");

            match error {
                Error::EmptyComment => (),
                _ => panic!("Error doesn't match: {}", error),
            }
        }

        {
            let outsider = create_user(server, "Mallory");
            let error = server
                .add_comment(outsider.id(), document.id(), "Spam")
                .expect_err("Outsider commented");
            assert_eq!(error.fixed_name(), "not-team-member");
        }

        let error = server
            .add_comment(fixture.viewer.id(), DocumentId::from_raw(9999), "Hello?")
            .expect_err("Commented on nonexistent document");
        assert_eq!(error.fixed_name(), "document-not-found");

        let comments = server
            .list_comments(fixture.viewer.id(), document.id())
            .expect("Unable to list comments");

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].comment, first);
        assert_eq!(comments[0].email, "victor@example.com");
        assert_eq!(comments[1].comment, second);
        assert_eq!(comments[1].email, "edith@example.com");

        // Viewers may only resolve their own comments
        let error = server
            .resolve_comment(fixture.viewer.id(), second.id(), true)
            .expect_err("Viewer resolved someone else's comment");
        assert_eq!(error.fixed_name(), "permission-denied");

        let resolved = server
            .resolve_comment(fixture.viewer.id(), first.id(), true)
            .expect("Author unable to resolve comment");
        assert!(resolved.is_resolved());

        let reopened = server
            .resolve_comment(fixture.editor.id(), first.id(), false)
            .expect("Editor unable to reopen comment");
        assert!(!reopened.is_resolved());

        let error = server
            .resolve_comment(fixture.editor.id(), CommentId::from_raw(9999), true)
            .expect_err("Resolved nonexistent comment");
        assert_eq!(error.fixed_name(), "comment-not-found");
    });
}
