/*
 * test/page.rs
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
fn pages() {
    run(|server| {
        let owner = create_user(server, "Alice");
        let other = create_user(server, "Bob");
        let space = create_space(server, &owner, "Docs", false);

        let intro = create_page(server, &owner, &space, "Getting Started", "# Welcome\n");
        let install = create_page(server, &owner, &space, "Installation", "Run it.\n");

        assert_eq!(intro.slug(), "getting-started");
        assert_eq!(intro.order_index(), 0);
        assert_eq!(install.order_index(), 1);
        assert_eq!(intro.created_by(), owner.id());
        assert!(intro.is_root());

        let child = server
            .create_page(
                owner.id(),
                "docs",
                NewPageInput {
                    title: "Deep Dive",
                    parent_id: Some(intro.id()),
                    ..Default::default()
                },
            )
            .expect("Unable to create child page");

        assert_eq!(child.parent_id(), Some(intro.id()));
        assert_eq!(child.order_index(), 0);
        assert!(!child.is_published());

        {
            let pages = server.list_pages(space.id()).expect("Unable to list pages");
            let slugs: Vec<_> = pages.iter().map(|page| page.slug()).collect();
            assert_eq!(slugs, vec!["getting-started", "deep-dive", "installation"]);

            let roots = server.page_tree(space.id()).expect("Unable to get page tree");
            let slugs: Vec<_> = roots.iter().map(|page| page.slug()).collect();
            assert_eq!(slugs, vec!["getting-started", "installation"]);
        }

        {
            let error = server
                .create_page(
                    owner.id(),
                    "docs",
                    NewPageInput {
                        title: "Installation",
                        ..Default::default()
                    },
                )
                .expect_err("Created page with duplicate slug");

            assert_eq!(error.fixed_name(), "page-exists");
            assert_eq!(
                error.to_string(),
                "A page with this slug already exists in this space",
            );
        }

        // Slugs only need to be unique within a space
        {
            let elsewhere = create_space(server, &owner, "Elsewhere", false);
            let page = create_page(server, &owner, &elsewhere, "Installation", "");
            assert_eq!(page.slug(), "installation");
        }

        {
            let error = server
                .create_page(
                    other.id(),
                    "docs",
                    NewPageInput {
                        title: "Intruder",
                        ..Default::default()
                    },
                )
                .expect_err("Non-owner created page");

            assert_eq!(error.fixed_name(), "permission-denied");
        }

        let found = server
            .get_page("docs", "installation")
            .expect("Couldn't find page");
        assert_eq!(found, install);

        let edited = server
            .edit_page(
                owner.id(),
                install.id(),
                PageChanges {
                    title: Some("Install"),
                    content: Some("Run `docwell`.\n"),
                    is_published: Some(false),
                },
            )
            .expect("Unable to edit page");

        assert_eq!(edited.title(), "Install");
        assert_eq!(edited.slug(), "installation");
        assert_eq!(edited.content(), "Run `docwell`.\n");
        assert!(!edited.is_published());

        server
            .edit_page(other.id(), install.id(), PageChanges::default())
            .expect_err("Non-owner edited page");

        // Deleting a parent promotes its children
        server
            .delete_page(owner.id(), intro.id())
            .expect("Unable to delete page");

        let child = server.get_page_by_id(child.id()).expect("Child page deleted");
        assert!(child.is_root());
        assert_eq!(child.order_index(), 2);

        {
            let roots = server.page_tree(space.id()).expect("Unable to get page tree");
            let slugs: Vec<_> = roots.iter().map(|page| page.slug()).collect();
            assert_eq!(slugs, vec!["installation", "deep-dive"]);
        }

        let error = server
            .delete_page(owner.id(), intro.id())
            .expect_err("Deleted page twice");
        assert_eq!(error.fixed_name(), "page-not-found");
    });
}

#[test]
fn published_pages() {
    run(|server| {
        let owner = create_user(server, "Alice");
        let space = create_space(server, &owner, "Public Docs", false);

        create_page(server, &owner, &space, "Overview", "# Overview\n\nSome **bold** text.\n");
        server
            .create_page(
                owner.id(),
                space.slug(),
                NewPageInput {
                    title: "Draft",
                    content: "Not yet",
                    ..Default::default()
                },
            )
            .expect("Unable to create draft");

        // Private spaces are hidden entirely
        let error = server
            .list_published_pages("public-docs")
            .expect_err("Listed pages of private space");
        assert_eq!(error.fixed_name(), "space-not-found");

        server
            .edit_space(
                owner.id(),
                space.id(),
                SpaceChanges {
                    is_public: Some(true),
                    ..Default::default()
                },
            )
            .expect("Unable to make space public");

        let pages = server
            .list_published_pages("public-docs")
            .expect("Unable to list published pages");
        let slugs: Vec<_> = pages.iter().map(|page| page.slug()).collect();
        assert_eq!(slugs, vec!["overview"]);

        let error = server
            .get_published_page("public-docs", "draft")
            .expect_err("Draft page was visible");
        assert_eq!(error.fixed_name(), "page-not-found");

        let html = server
            .render_published_page("public-docs", "overview")
            .expect("Unable to render page");

        assert!(html.contains(r#"<h1 id="overview">Overview</h1>"#), "Bad heading in {}", html);
        assert!(html.contains("<strong>bold</strong>"), "Bad emphasis in {}", html);
    });
}
