/*
 * test/user.rs
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
fn users() {
    run(|server| {
        let user = server
            .create_user("  Jenny@Example.NET ", "Jenny")
            .expect("Unable to create user");

        assert_eq!(user.email(), "jenny@example.net");
        assert_eq!(user.name(), "Jenny");

        let found = server
            .get_user_by_email("JENNY@example.net")
            .expect("Couldn't find user by email");
        assert_eq!(found, user);

        let found = server.get_user(user.id()).expect("Couldn't find user by ID");
        assert_eq!(found, user);

        let error = server
            .create_user("jenny@example.net", "Other Jenny")
            .expect_err("Created user with duplicate email");
        assert_eq!(error.fixed_name(), "user-email-exists");

        let error = server
            .get_user(UserId::from_raw(9999))
            .expect_err("Found nonexistent user");

        match error {
            Error::UserNotFound => (),
            _ => panic!("Error doesn't match: {}", error),
        }
    });
}
