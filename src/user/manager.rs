/*
 * user/manager.rs
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

use super::models::NewUser;
use crate::manager_prelude::*;
use crate::schema::users;

make_manager!(UserManager, "user manager");

impl UserManager<'_> {
    pub fn create(&mut self, email: &str, name: &str) -> Result<User> {
        let email = email.trim().to_ascii_lowercase();
        let name = name.trim();

        info!("Creating new user '{}' with email '{}'", name, email);

        if email.is_empty() {
            warn!("Refusing to create user without an email");
            return Err(Error::StaticMsg("Email cannot be empty"));
        }

        let model = NewUser {
            email: &email,
            name,
            created_at: now(),
        };

        diesel::insert_into(users::table)
            .values(&model)
            .get_result::<User>(self.conn)
            .map_err(|error| Error::on_conflict(error, Error::UserEmailExists))
    }

    pub fn get_from_id(&mut self, id: UserId) -> Result<Option<User>> {
        debug!("Getting user for ID {}", id);

        let user = users::table
            .filter(users::user_id.eq(id))
            .first::<User>(self.conn)
            .optional()?;

        Ok(user)
    }

    pub fn get_from_email(&mut self, email: &str) -> Result<Option<User>> {
        let email = email.trim().to_ascii_lowercase();

        debug!("Getting user for email '{}'", email);

        let user = users::table
            .filter(users::email.eq(&email))
            .first::<User>(self.conn)
            .optional()?;

        Ok(user)
    }

    /// Fails with `UserNotFound` unless the user exists.
    pub fn check(&mut self, id: UserId) -> Result<()> {
        let exists = diesel::select(diesel::dsl::exists(
            users::table.filter(users::user_id.eq(id)),
        ))
        .get_result::<bool>(self.conn)?;

        if exists {
            Ok(())
        } else {
            warn!("No user with ID {}", id);
            Err(Error::UserNotFound)
        }
    }
}
