/*
 * test/member.rs
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
fn invitations() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = create_team(server, &owner, "Acme");
        let bob = create_user(server, "Bob");

        let member = server
            .invite_member(owner.id(), team.id(), "BOB@example.com", Role::Editor)
            .expect("Unable to invite member");

        assert_eq!(member.user_id(), bob.id());
        assert_eq!(member.team_id(), team.id());
        assert_eq!(member.role(), Role::Editor);

        {
            let error = server
                .invite_member(owner.id(), team.id(), "bob@example.com", Role::Viewer)
                .expect_err("Invited member twice");

            assert_eq!(error.fixed_name(), "member-exists");
            assert_eq!(error.to_string(), "This user is already a member of the team");
        }

        {
            let error = server
                .invite_member(owner.id(), team.id(), "ghost@example.com", Role::Viewer)
                .expect_err("Invited nonexistent user");

            assert_eq!(error.fixed_name(), "invitee-not-found");
            assert_eq!(error.to_string(), "User not found. They must sign up first.");
        }

        // Editors and viewers cannot invite
        {
            create_user(server, "Carol");
            let error = server
                .invite_member(bob.id(), team.id(), "carol@example.com", Role::Viewer)
                .expect_err("Editor invited member");

            assert_eq!(error.fixed_name(), "permission-denied");
        }

        {
            let outsider = create_user(server, "Dave");
            let error = server
                .invite_member(outsider.id(), team.id(), "carol@example.com", Role::Viewer)
                .expect_err("Outsider invited member");

            match error {
                Error::NotTeamMember => (),
                _ => panic!("Error doesn't match: {}", error),
            }
        }

        // Admins cannot hand out ownership
        {
            let admin = add_member(server, &team, &owner, "Erin", Role::Admin);
            let error = server
                .invite_member(admin.id(), team.id(), "carol@example.com", Role::Owner)
                .expect_err("Admin granted ownership");

            assert_eq!(error.fixed_name(), "permission-denied");

            server
                .invite_member(admin.id(), team.id(), "carol@example.com", Role::Admin)
                .expect("Admin unable to invite admin");
        }

        let members = server.list_members(owner.id(), team.id()).expect("Unable to list members");
        let emails: Vec<_> = members.iter().map(|member| member.email.as_str()).collect();
        assert_eq!(
            emails,
            vec![
                "olivia@example.com",
                "bob@example.com",
                "erin@example.com",
                "carol@example.com",
            ],
        );
    });
}

#[test]
fn role_changes() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = create_team(server, &owner, "Acme");
        let admin = add_member(server, &team, &owner, "Erin", Role::Admin);
        let editor = add_member(server, &team, &owner, "Bob", Role::Editor);

        let member_id = |user: &User| {
            server
                .list_members(owner.id(), team.id())
                .expect("Unable to list members")
                .into_iter()
                .find(|member| member.member.user_id() == user.id())
                .map(|member| member.member.id())
                .expect("User is not a member")
        };

        let changed = server
            .change_member_role(admin.id(), member_id(&editor), Role::Viewer)
            .expect("Admin unable to change role");
        assert_eq!(changed.role(), Role::Viewer);

        {
            let error = server
                .change_member_role(admin.id(), member_id(&owner), Role::Editor)
                .expect_err("Admin demoted owner");
            assert_eq!(error.fixed_name(), "permission-denied");

            let error = server
                .change_member_role(admin.id(), member_id(&editor), Role::Owner)
                .expect_err("Admin promoted to owner");
            assert_eq!(error.fixed_name(), "permission-denied");
        }

        {
            let error = server
                .change_member_role(admin.id(), member_id(&admin), Role::Owner)
                .expect_err("Admin changed own role");

            match error {
                Error::CannotModifySelf => (),
                _ => panic!("Error doesn't match: {}", error),
            }

            let error = server
                .remove_member(owner.id(), member_id(&owner))
                .expect_err("Owner removed themselves");
            assert_eq!(error.fixed_name(), "cannot-modify-self");
        }

        {
            let error = server
                .change_member_role(editor.id(), member_id(&admin), Role::Viewer)
                .expect_err("Viewer changed role");
            assert_eq!(error.fixed_name(), "permission-denied");
        }

        // Owners can transfer ownership
        server
            .change_member_role(owner.id(), member_id(&admin), Role::Owner)
            .expect("Owner unable to promote admin");

        server
            .change_member_role(admin.id(), member_id(&owner), Role::Admin)
            .expect("New owner unable to demote old owner");

        assert_eq!(
            server.member_role(team.id(), owner.id()).unwrap(),
            Some(Role::Admin),
        );

        let unchanged = server
            .change_member_role(admin.id(), member_id(&editor), Role::Viewer)
            .expect("Unable to set same role");
        assert_eq!(unchanged.role(), Role::Viewer);
    });
}

#[test]
fn removal() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = create_team(server, &owner, "Acme");
        let admin = add_member(server, &team, &owner, "Erin", Role::Admin);
        let viewer = add_member(server, &team, &owner, "Victor", Role::Viewer);

        let members = server.list_members(owner.id(), team.id()).expect("Unable to list members");
        let owner_member = members[0].member.id();
        let viewer_member = members[2].member.id();

        let error = server
            .remove_member(viewer.id(), owner_member)
            .expect_err("Viewer removed owner");
        assert_eq!(error.fixed_name(), "permission-denied");

        let error = server
            .remove_member(admin.id(), owner_member)
            .expect_err("Admin removed owner");
        assert_eq!(error.fixed_name(), "permission-denied");

        server
            .remove_member(admin.id(), viewer_member)
            .expect("Admin unable to remove viewer");

        assert_eq!(server.member_role(team.id(), viewer.id()).unwrap(), None);

        let error = server
            .remove_member(admin.id(), viewer_member)
            .expect_err("Removed member twice");
        assert_eq!(error.fixed_name(), "member-not-found");
    });
}

#[test]
fn controls() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = create_team(server, &owner, "Acme");
        let admin = add_member(server, &team, &owner, "Erin", Role::Admin);
        let viewer = add_member(server, &team, &owner, "Victor", Role::Viewer);

        let members = server.list_members(owner.id(), team.id()).expect("Unable to list members");
        let owner_member = members[0].member.id();
        let viewer_member = members[2].member.id();

        // Viewers never see management controls
        for member in &members {
            let controls = server
                .member_controls(viewer.id(), member.member.id())
                .expect("Unable to get controls");

            assert_eq!(controls, MemberControls::NONE);
        }

        let controls = server
            .member_controls(owner.id(), viewer_member)
            .expect("Unable to get controls");
        assert!(controls.invite);
        assert!(controls.change_role);
        assert!(controls.remove);
        assert_eq!(controls.assignable, Role::ALL);

        let controls = server
            .member_controls(owner.id(), owner_member)
            .expect("Unable to get controls");
        assert!(controls.invite);
        assert!(!controls.change_role);
        assert!(!controls.remove);

        let controls = server
            .member_controls(admin.id(), viewer_member)
            .expect("Unable to get controls");
        assert!(controls.change_role && controls.remove);
        assert!(!controls.assignable.contains(&Role::Owner));

        // Admins get no role or removal controls on an owner's row
        let controls = server
            .member_controls(admin.id(), owner_member)
            .expect("Unable to get controls");
        assert!(controls.invite);
        assert!(!controls.change_role);
        assert!(!controls.remove);

        let error = server
            .remove_member(admin.id(), owner_member)
            .expect_err("Admin removed owner");
        assert_eq!(error.fixed_name(), "permission-denied");
    });
}
