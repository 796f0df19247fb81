/*
 * test/workspace.rs
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
fn workspaces() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = create_team(server, &owner, "Acme");
        let editor = add_member(server, &team, &owner, "Edith", Role::Editor);

        let input = NewWorkspaceInput {
            name: "Product Docs!! 2.0",
            description: Some("Everything about the product"),
            ..Default::default()
        };

        let error = server
            .create_workspace(editor.id(), "acme", input)
            .expect_err("Editor created workspace");
        assert_eq!(error.fixed_name(), "permission-denied");

        let workspace = server
            .create_workspace(owner.id(), "acme", input)
            .expect("Unable to create workspace");

        assert_eq!(workspace.team_id(), team.id());
        assert_eq!(workspace.slug(), "product-docs-2-0");
        assert_eq!(workspace.theme(), Theme::Default);
        assert_eq!(workspace.description(), Some("Everything about the product"));
        assert!(!workspace.is_public());

        {
            let error = server
                .create_workspace(owner.id(), "acme", input)
                .expect_err("Created workspace with duplicate slug");

            assert_eq!(error.fixed_name(), "workspace-exists");
            assert_eq!(error.to_string(), "A workspace with this slug already exists");
        }

        let error = server
            .create_workspace(owner.id(), "missing", input)
            .expect_err("Created workspace in nonexistent team");
        assert_eq!(error.fixed_name(), "team-not-found");

        let second = create_workspace(server, &owner, &team, "Internal Wiki");
        let workspaces = server
            .list_workspaces(Some(owner.id()), team.id())
            .expect("Unable to list workspaces");
        let ids: Vec<_> = workspaces.iter().map(|workspace| workspace.id()).collect();
        assert_eq!(ids, vec![second.id(), workspace.id()]);

        let changes = WorkspaceChanges {
            description: Some(None),
            icon: Some(Some("📘")),
            is_public: Some(true),
            theme: Some(Theme::Modern),
            custom_domain: Some(Some("docs.example.com")),
            ..Default::default()
        };

        let error = server
            .edit_workspace(editor.id(), workspace.id(), changes)
            .expect_err("Editor changed workspace settings");
        assert_eq!(error.fixed_name(), "permission-denied");

        let edited = server
            .edit_workspace(owner.id(), workspace.id(), changes)
            .expect("Unable to edit workspace");

        assert_eq!(edited.name(), "Product Docs!! 2.0");
        assert_eq!(edited.description(), None);
        assert_eq!(edited.icon(), Some("📘"));
        assert!(edited.is_public());
        assert_eq!(edited.theme(), Theme::Modern);
        assert_eq!(edited.custom_domain(), Some("docs.example.com"));

        let found = server
            .get_public_workspace("product-docs-2-0")
            .expect("Public workspace not found");
        assert_eq!(found, edited);

        let error = server
            .get_public_workspace("internal-wiki")
            .expect_err("Private workspace was public");
        assert_eq!(error.fixed_name(), "workspace-not-found");

        // Outside the team only public workspaces are listed
        let outsider = create_user(server, "Mallory");
        for reader in &[None, Some(outsider.id())] {
            let workspaces = server
                .list_workspaces(*reader, team.id())
                .expect("Unable to list workspaces");
            assert_eq!(workspaces, vec![edited.clone()]);
        }

        let workspaces = server
            .list_workspaces(Some(editor.id()), team.id())
            .expect("Unable to list workspaces");
        assert_eq!(workspaces.len(), 2);
    });
}

#[test]
fn collections() {
    run(|server| {
        let fixture = create_fixture(server);
        let Fixture {
            ref admin,
            ref editor,
            ref workspace,
            ref collection,
            ..
        } = fixture;

        assert_eq!(collection.slug(), "guides");
        assert_eq!(collection.order_index(), 0);

        let reference = create_collection(server, admin, workspace, "API Reference");
        assert_eq!(reference.slug(), "api-reference");
        assert_eq!(reference.order_index(), 1);

        {
            let input = NewCollectionInput {
                name: "Guides",
                ..Default::default()
            };

            let error = server
                .create_collection(admin.id(), workspace.slug(), input)
                .expect_err("Created collection with duplicate slug");

            assert_eq!(error.fixed_name(), "collection-exists");
            assert_eq!(
                error.to_string(),
                "A collection with this slug already exists in this workspace",
            );

            let error = server
                .create_collection(editor.id(), workspace.slug(), input)
                .expect_err("Editor created collection");
            assert_eq!(error.fixed_name(), "permission-denied");
        }

        // Slugs only need to be unique within a workspace
        {
            let other = create_workspace(server, admin, &fixture.team, "Other");
            let guides = create_collection(server, admin, &other, "Guides");
            assert_eq!(guides.order_index(), 0);
        }

        let collections = server
            .list_collections(Some(editor.id()), workspace.id())
            .expect("Unable to list collections");
        assert_eq!(collections, vec![collection.clone(), reference.clone()]);

        let found = server
            .get_collection(Some(editor.id()), workspace.slug(), "api-reference")
            .expect("Couldn't find collection");
        assert_eq!(found, reference);

        let intro = create_document(server, editor, workspace, collection, "Intro", "Hello");
        create_document(server, editor, workspace, &reference, "Endpoints", "GET /");
        server
            .create_document(
                editor.id(),
                workspace.slug(),
                collection.slug(),
                NewDocumentInput {
                    title: "Nested",
                    parent_id: Some(intro.id()),
                    ..Default::default()
                },
            )
            .expect("Unable to create nested document");

        let overview = server
            .workspace_overview(Some(editor.id()), workspace.slug())
            .expect("Unable to load overview");

        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].collection, *collection);
        assert_eq!(overview[0].documents, vec![intro]);
        assert_eq!(overview[1].collection, reference);
        assert_eq!(overview[1].documents.len(), 1);
        assert_eq!(overview[1].documents[0].slug(), "endpoints");
    });
}
