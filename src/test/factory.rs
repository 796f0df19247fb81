/*
 * test/factory.rs
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

// User
pub fn create_user(server: &Server, name: &str) -> User {
    let email = format!("{}@example.com", name.to_ascii_lowercase());

    println!("Creating test user '{}'", name);
    server
        .create_user(&email, name)
        .expect("Unable to create user")
}

// Space
pub fn create_space(server: &Server, owner: &User, name: &str, is_public: bool) -> Space {
    let input = NewSpaceInput {
        name,
        is_public,
        ..Default::default()
    };

    server
        .create_space(owner.id(), input)
        .expect("Unable to create space")
}

pub fn create_page(server: &Server, owner: &User, space: &Space, title: &str, content: &str) -> Page {
    let input = NewPageInput {
        title,
        content,
        is_published: true,
        ..Default::default()
    };

    server
        .create_page(owner.id(), space.slug(), input)
        .expect("Unable to create page")
}

// Team
pub fn create_team(server: &Server, owner: &User, name: &str) -> Team {
    server
        .create_team(owner.id(), name, None)
        .expect("Unable to create team")
}

/// Creates a user and invites them into the team with the given role.
pub fn add_member(server: &Server, team: &Team, inviter: &User, name: &str, role: Role) -> User {
    let user = create_user(server, name);

    server
        .invite_member(inviter.id(), team.id(), user.email(), role)
        .expect("Unable to invite member");

    user
}

// Workspace
pub fn create_workspace(server: &Server, actor: &User, team: &Team, name: &str) -> Workspace {
    let input = NewWorkspaceInput {
        name,
        ..Default::default()
    };

    server
        .create_workspace(actor.id(), team.slug(), input)
        .expect("Unable to create workspace")
}

pub fn create_collection(
    server: &Server,
    actor: &User,
    workspace: &Workspace,
    name: &str,
) -> Collection {
    let input = NewCollectionInput {
        name,
        ..Default::default()
    };

    server
        .create_collection(actor.id(), workspace.slug(), input)
        .expect("Unable to create collection")
}

pub fn create_document(
    server: &Server,
    actor: &User,
    workspace: &Workspace,
    collection: &Collection,
    title: &str,
    content: &str,
) -> Document {
    let input = NewDocumentInput {
        title,
        content,
        ..Default::default()
    };

    server
        .create_document(actor.id(), workspace.slug(), collection.slug(), input)
        .expect("Unable to create document")
}

/// A team with one member of each role, a workspace and a collection.
#[derive(Debug)]
pub struct Fixture {
    pub owner: User,
    pub admin: User,
    pub editor: User,
    pub viewer: User,
    pub team: Team,
    pub workspace: Workspace,
    pub collection: Collection,
}

pub fn create_fixture(server: &Server) -> Fixture {
    let owner = create_user(server, "Olivia");
    let team = create_team(server, &owner, "Acme Docs");
    let admin = add_member(server, &team, &owner, "Adam", Role::Admin);
    let editor = add_member(server, &team, &owner, "Edith", Role::Editor);
    let viewer = add_member(server, &team, &owner, "Victor", Role::Viewer);
    let workspace = create_workspace(server, &admin, &team, "Product Docs");
    let collection = create_collection(server, &admin, &workspace, "Guides");

    Fixture {
        owner,
        admin,
        editor,
        viewer,
        team,
        workspace,
        collection,
    }
}
