/*
 * test/team.rs
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
fn teams() {
    run(|server| {
        let owner = create_user(server, "Olivia");
        let team = server
            .create_team(owner.id(), "Acme Corp", None)
            .expect("Unable to create team");

        assert_eq!(team.name(), "Acme Corp");
        assert_eq!(team.slug(), "acme-corp");

        {
            let found = server.get_team("acme-corp").expect("Couldn't find team");
            assert_eq!(found, team);

            let found = server.get_team_by_id(team.id()).expect("Couldn't find team");
            assert_eq!(found, team);
        }

        // Creator becomes the owner
        {
            let members = server.list_members(owner.id(), team.id()).expect("Unable to list members");
            assert_eq!(members.len(), 1);
            assert_eq!(members[0].member.user_id(), owner.id());
            assert_eq!(members[0].member.role(), Role::Owner);
            assert_eq!(members[0].email, "olivia@example.com");

            let role = server
                .member_role(team.id(), owner.id())
                .expect("Unable to get role");
            assert_eq!(role, Some(Role::Owner));
        }

        let error = server
            .create_team(owner.id(), "Acme corp.", None)
            .expect_err("Created team with duplicate slug");
        assert_eq!(error.fixed_name(), "team-exists");

        // The failed team left no membership behind
        let other = server
            .create_team(owner.id(), "Zeta", Some("zeta-team"))
            .expect("Unable to create second team");
        assert_eq!(other.slug(), "zeta-team");

        let teams = server.list_teams(owner.id()).expect("Unable to list teams");
        assert_eq!(
            teams,
            vec![(team.clone(), Role::Owner), (other, Role::Owner)],
        );

        let nobody = create_user(server, "Nobody");
        let teams = server.list_teams(nobody.id()).expect("Unable to list teams");
        assert!(teams.is_empty());
        assert_eq!(server.member_role(team.id(), nobody.id()).unwrap(), None);

        let error = server
            .get_team("missing")
            .expect_err("Found nonexistent team");
        assert_eq!(error.fixed_name(), "team-not-found");
    });
}
