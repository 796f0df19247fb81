/*
 * error.rs
 *
 * docwell-core - Documentation workspace service
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

use diesel::result::{ConnectionError, DatabaseErrorKind, Error as DieselError};
use std::io;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("error: {0}")]
    StaticMsg(&'static str),

    #[error("general I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Database(#[from] DieselError),

    #[error("error connecting to database: {0}")]
    DatabaseConnection(#[from] ConnectionError),

    #[error("error running migrations: {0}")]
    Migration(String),

    #[error("invalid slug '{0}': use lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("invalid role '{0}'")]
    InvalidRole(String),

    #[error("invalid theme '{0}'")]
    InvalidTheme(String),

    #[error("{0}")]
    PermissionDenied(&'static str),

    #[error("the given user was not found")]
    UserNotFound,

    #[error("a user with the given email already exists")]
    UserEmailExists,

    #[error("the given space was not found")]
    SpaceNotFound,

    #[error("A space with this slug already exists")]
    SpaceExists,

    #[error("the given page was not found")]
    PageNotFound,

    #[error("A page with this slug already exists in this space")]
    PageExists,

    #[error("the given team was not found")]
    TeamNotFound,

    #[error("A team with this slug already exists")]
    TeamExists,

    #[error("You are not a member of this team")]
    NotTeamMember,

    #[error("the given team member was not found")]
    MemberNotFound,

    #[error("This user is already a member of the team")]
    MemberExists,

    #[error("User not found. They must sign up first.")]
    InviteeNotFound,

    #[error("You cannot change your own membership")]
    CannotModifySelf,

    #[error("A team must keep at least one owner")]
    LastOwner,

    #[error("the given workspace was not found")]
    WorkspaceNotFound,

    #[error("A workspace with this slug already exists")]
    WorkspaceExists,

    #[error("the given collection was not found")]
    CollectionNotFound,

    #[error("A collection with this slug already exists in this workspace")]
    CollectionExists,

    #[error("the given document was not found")]
    DocumentNotFound,

    #[error("A document with this slug already exists in this collection")]
    DocumentExists,

    #[error("the given document version was not found")]
    VersionNotFound,

    #[error("the document was changed by someone else (expected version {expected}, found {actual}), reload and try again")]
    VersionConflict { expected: i32, actual: i32 },

    #[error("Comments cannot be empty")]
    EmptyComment,

    #[error("the given comment was not found")]
    CommentNotFound,

    #[error("the given template was not found")]
    TemplateNotFound,
}

impl Error {
    pub fn fixed_name(&self) -> &'static str {
        use self::Error::*;

        match *self {
            StaticMsg(_) => "custom",
            Io(_) => "io",
            Database(_) => "database",
            DatabaseConnection(_) => "database-connection",
            Migration(_) => "migration",
            InvalidSlug(_) => "invalid-slug",
            InvalidRole(_) => "invalid-role",
            InvalidTheme(_) => "invalid-theme",
            PermissionDenied(_) => "permission-denied",
            UserNotFound => "user-not-found",
            UserEmailExists => "user-email-exists",
            SpaceNotFound => "space-not-found",
            SpaceExists => "space-exists",
            PageNotFound => "page-not-found",
            PageExists => "page-exists",
            TeamNotFound => "team-not-found",
            TeamExists => "team-exists",
            NotTeamMember => "not-team-member",
            MemberNotFound => "member-not-found",
            MemberExists => "member-exists",
            InviteeNotFound => "invitee-not-found",
            CannotModifySelf => "cannot-modify-self",
            LastOwner => "last-owner",
            WorkspaceNotFound => "workspace-not-found",
            WorkspaceExists => "workspace-exists",
            CollectionNotFound => "collection-not-found",
            CollectionExists => "collection-exists",
            DocumentNotFound => "document-not-found",
            DocumentExists => "document-exists",
            VersionNotFound => "version-not-found",
            VersionConflict { .. } => "version-conflict",
            EmptyComment => "empty-comment",
            CommentNotFound => "comment-not-found",
            TemplateNotFound => "template-not-found",
        }
    }

    /// Replaces a unique constraint violation with the friendlier error given.
    /// Any other database error is passed through unchanged.
    pub fn on_conflict(error: DieselError, conflict: Error) -> Error {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
                debug!("Unique constraint violated: {}", info.message());

                conflict
            }
            _ => Error::Database(error),
        }
    }

    #[inline]
    pub fn to_sendable(&self) -> SendableError {
        SendableError {
            name: self.fixed_name(),
            message: self.to_string(),
        }
    }
}

/// Serializable form of an error, for front ends.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SendableError {
    pub name: &'static str,
    pub message: String,
}

impl From<Error> for SendableError {
    #[inline]
    fn from(error: Error) -> Self {
        error.to_sendable()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use diesel::result::DatabaseErrorInformation;

    #[derive(Debug)]
    struct UniqueInfo;

    impl DatabaseErrorInformation for UniqueInfo {
        fn message(&self) -> &str {
            "UNIQUE constraint failed: workspaces.slug"
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("workspaces")
        }

        fn column_name(&self) -> Option<&str> {
            Some("slug")
        }

        fn constraint_name(&self) -> Option<&str> {
            None
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(UniqueInfo));
        let error = Error::on_conflict(error, Error::WorkspaceExists);

        assert_eq!(error.fixed_name(), "workspace-exists");
        assert_eq!(error.to_string(), "A workspace with this slug already exists");
    }

    #[test]
    fn other_errors_pass_through() {
        let error = Error::on_conflict(DieselError::NotFound, Error::WorkspaceExists);

        match error {
            Error::Database(DieselError::NotFound) => (),
            _ => panic!("Error was replaced: {:?}", error),
        }
    }

    #[test]
    fn sendable() {
        let sendable = SendableError::from(Error::VersionConflict {
            expected: 3,
            actual: 4,
        });

        assert_eq!(sendable.name, "version-conflict");
        assert!(sendable.message.contains("expected version 3"));
    }
}
