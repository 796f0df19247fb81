/*
 * server/user.rs
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

use super::Server;
use crate::manager_prelude::*;
use crate::user::UserManager;

impl Server {
    /// Registers an identity supplied by the authentication service.
    pub fn create_user(&self, email: &str, name: &str) -> Result<User> {
        let mut conn = self.conn();

        UserManager::new(&mut conn).create(email, name)
    }

    /// Gets the model for a user from its ID.
    pub fn get_user(&self, id: UserId) -> Result<User> {
        let mut conn = self.conn();

        UserManager::new(&mut conn)
            .get_from_id(id)?
            .ok_or(Error::UserNotFound)
    }

    /// Gets the model for a user from its email.
    /// Emails are compared case-insensitively.
    pub fn get_user_by_email(&self, email: &str) -> Result<User> {
        let mut conn = self.conn();

        UserManager::new(&mut conn)
            .get_from_email(email)?
            .ok_or(Error::UserNotFound)
    }
}
