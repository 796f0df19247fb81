/*
 * roles.rs
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

use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use diesel::sql_types::Text;

/// Membership role within a team.
///
/// Variants are declared lowest first, so the derived ordering gives
/// `Owner > Admin > Editor > Viewer`.
#[derive(
    Serialize,
    Deserialize,
    AsExpression,
    FromSqlRow,
    Debug,
    Copy,
    Clone,
    Hash,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Editor,
    Admin,
    Owner,
}

make_text_enum!(role_impl, Role, InvalidRole, {
    Viewer => "viewer",
    Editor => "editor",
    Admin => "admin",
    Owner => "owner",
});

/// Something a team member may attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Permission {
    ViewContent,
    Comment,
    EditContent,
    ManageContent,
    ManageMembers,
    ManageOwners,
}

impl Permission {
    pub fn minimum_role(self) -> Role {
        match self {
            Permission::ViewContent | Permission::Comment => Role::Viewer,
            Permission::EditContent => Role::Editor,
            Permission::ManageContent | Permission::ManageMembers => Role::Admin,
            Permission::ManageOwners => Role::Owner,
        }
    }

    pub fn denied_message(self) -> &'static str {
        match self {
            Permission::ViewContent => "You do not have permission to view this content",
            Permission::Comment => "You do not have permission to comment",
            Permission::EditContent => "You do not have permission to edit documents",
            Permission::ManageContent => "You do not have permission to manage this workspace",
            Permission::ManageMembers => "You do not have permission to manage members",
            Permission::ManageOwners => "Only an owner can grant or revoke ownership",
        }
    }
}

impl Role {
    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
            Role::Owner => "Owner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Viewer => "Can view content",
            Role::Editor => "Can edit content",
            Role::Admin => "Can manage team",
            Role::Owner => "Full control",
        }
    }

    #[inline]
    pub fn permits(self, permission: Permission) -> bool {
        self >= permission.minimum_role()
    }

    /// Roles this role may hand out to other members.
    pub fn assignable_roles(self) -> &'static [Role] {
        const ADMIN: &[Role] = &[Role::Viewer, Role::Editor, Role::Admin];

        match self {
            Role::Owner => Role::ALL,
            Role::Admin => ADMIN,
            Role::Editor | Role::Viewer => &[],
        }
    }

    /// Whether this role may change or remove a member holding `target`.
    pub fn can_manage(self, target: Role) -> bool {
        if !self.permits(Permission::ManageMembers) {
            return false;
        }

        target != Role::Owner || self.permits(Permission::ManageOwners)
    }

    /// Whether this role may move another member from `from` to `to`.
    pub fn can_reassign(self, from: Role, to: Role) -> bool {
        self.can_manage(from) && self.can_manage(to)
    }
}

/// Which membership controls to render for a given viewer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MemberControls {
    pub invite: bool,
    pub change_role: bool,
    pub remove: bool,
    pub assignable: &'static [Role],
}

impl MemberControls {
    pub const NONE: MemberControls = MemberControls {
        invite: false,
        change_role: false,
        remove: false,
        assignable: &[],
    };

    /// Controls shown to a viewer with `actor` role on the row for a member
    /// holding `target`. `is_self` is true when the row is the viewer's own membership.
    pub fn for_member(actor: Option<Role>, target: Role, is_self: bool) -> Self {
        let actor = match actor {
            Some(role) if role.permits(Permission::ManageMembers) => role,
            _ => return MemberControls::NONE,
        };

        let manageable = !is_self && actor.can_manage(target);

        MemberControls {
            invite: true,
            change_role: manageable,
            remove: manageable,
            assignable: actor.assignable_roles(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Role::Owner > Role::Admin);
        assert!(Role::Admin > Role::Editor);
        assert!(Role::Editor > Role::Viewer);
    }

    #[test]
    fn parse() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" EDITOR ".parse::<Role>().unwrap(), Role::Editor);

        let error = "superuser".parse::<Role>().expect_err("Parsed invalid role");
        assert_eq!(error.fixed_name(), "invalid-role");
    }

    #[test]
    fn permissions() {
        assert!(Role::Viewer.permits(Permission::Comment));
        assert!(!Role::Viewer.permits(Permission::EditContent));
        assert!(Role::Editor.permits(Permission::EditContent));
        assert!(!Role::Editor.permits(Permission::ManageMembers));
        assert!(Role::Admin.permits(Permission::ManageMembers));
        assert!(!Role::Admin.permits(Permission::ManageOwners));
        assert!(Role::Owner.permits(Permission::ManageOwners));
    }

    #[test]
    fn reassign() {
        assert!(Role::Admin.can_reassign(Role::Viewer, Role::Admin));
        assert!(!Role::Admin.can_reassign(Role::Editor, Role::Owner));
        assert!(!Role::Admin.can_reassign(Role::Owner, Role::Editor));
        assert!(Role::Owner.can_reassign(Role::Owner, Role::Admin));
        assert!(!Role::Editor.can_reassign(Role::Viewer, Role::Editor));

        assert!(Role::Admin.can_manage(Role::Admin));
        assert!(!Role::Admin.can_manage(Role::Owner));
        assert!(Role::Owner.can_manage(Role::Owner));
        assert!(!Role::Viewer.can_manage(Role::Viewer));
    }

    #[test]
    fn viewer_controls() {
        assert_eq!(
            MemberControls::for_member(Some(Role::Viewer), Role::Editor, false),
            MemberControls::NONE,
        );
        assert_eq!(
            MemberControls::for_member(Some(Role::Editor), Role::Viewer, false),
            MemberControls::NONE,
        );
        assert_eq!(MemberControls::for_member(None, Role::Viewer, false), MemberControls::NONE);
    }

    #[test]
    fn admin_controls() {
        let controls = MemberControls::for_member(Some(Role::Admin), Role::Editor, false);
        assert!(controls.invite && controls.change_role && controls.remove);
        assert!(!controls.assignable.contains(&Role::Owner));

        let owner_row = MemberControls::for_member(Some(Role::Admin), Role::Owner, false);
        assert!(owner_row.invite);
        assert!(!owner_row.change_role);
        assert!(!owner_row.remove);

        let owner_row = MemberControls::for_member(Some(Role::Owner), Role::Owner, false);
        assert!(owner_row.change_role && owner_row.remove);

        let own_row = MemberControls::for_member(Some(Role::Owner), Role::Owner, true);
        assert!(own_row.invite);
        assert!(!own_row.change_role);
        assert!(!own_row.remove);
        assert!(own_row.assignable.contains(&Role::Owner));
    }
}
