/*
 * command.rs
 *
 * docwell-cli - Command-line client for the documentation workspace service
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

use crate::Result;
use docwell::prelude::*;
use either::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Register a user supplied by the authentication service.
    AddUser { email: String, name: String },

    /// Print the slug generated for some text.
    Slugify { text: String },

    /// Create a space owned by the acting user.
    CreateSpace {
        name: String,
        #[structopt(long)]
        slug: Option<String>,
        #[structopt(long)]
        description: Option<String>,
        #[structopt(long)]
        public: bool,
    },

    /// List the acting user's spaces.
    ListSpaces,

    /// Add a page to a space.
    CreatePage {
        space: String,
        title: String,
        #[structopt(long)]
        slug: Option<String>,
        /// Slug of the parent page.
        #[structopt(long)]
        parent: Option<String>,
        /// Read the Markdown content from this file.
        #[structopt(long, parse(from_os_str))]
        file: Option<PathBuf>,
        #[structopt(long)]
        draft: bool,
    },

    /// Replace a page's content, title or published state.
    EditPage {
        space: String,
        page: String,
        #[structopt(long)]
        title: Option<String>,
        #[structopt(long, parse(from_os_str))]
        file: Option<PathBuf>,
        #[structopt(long)]
        publish: bool,
        #[structopt(long, conflicts_with = "publish")]
        unpublish: bool,
    },

    DeletePage { space: String, page: String },

    /// List a space's pages in order.
    ListPages { space: String },

    /// Render a published page of a public space to HTML.
    RenderPage { space: String, page: String },

    /// Create a team owned by the acting user.
    CreateTeam {
        name: String,
        #[structopt(long)]
        slug: Option<String>,
    },

    /// List the acting user's teams and roles.
    ListTeams,

    Members { team: String },

    /// Invite an existing user into a team.
    Invite {
        team: String,
        email: String,
        #[structopt(default_value = "viewer")]
        role: Role,
    },

    SetRole { team: String, email: String, role: Role },

    RemoveMember { team: String, email: String },

    CreateWorkspace {
        team: String,
        name: String,
        #[structopt(long)]
        slug: Option<String>,
        #[structopt(long)]
        description: Option<String>,
        #[structopt(long)]
        public: bool,
        #[structopt(long, default_value = "default")]
        theme: Theme,
    },

    /// Show a workspace's collections and top-level documents.
    Overview { workspace: String },

    CreateCollection {
        workspace: String,
        name: String,
        #[structopt(long)]
        slug: Option<String>,
        #[structopt(long)]
        description: Option<String>,
    },

    CreateTemplate {
        workspace: String,
        name: String,
        #[structopt(long, parse(from_os_str))]
        file: Option<PathBuf>,
        #[structopt(long)]
        default: bool,
    },

    ListTemplates { workspace: String },

    CreateDocument {
        workspace: String,
        collection: String,
        title: String,
        #[structopt(long)]
        slug: Option<String>,
        #[structopt(long, parse(from_os_str))]
        file: Option<PathBuf>,
        #[structopt(long)]
        template: Option<i64>,
    },

    /// Save new content for a document, based on the version that was read.
    EditDocument {
        workspace: String,
        document: String,
        /// The version the new content is based on.
        #[structopt(long)]
        version: i32,
        #[structopt(long)]
        title: Option<String>,
        #[structopt(long, parse(from_os_str))]
        file: PathBuf,
    },

    Publish {
        workspace: String,
        document: String,
        #[structopt(long)]
        undo: bool,
    },

    /// List a document's versions, newest first.
    History { workspace: String, document: String },

    /// Bring back an earlier version's content as a new version.
    Restore {
        workspace: String,
        document: String,
        /// The document's current version.
        #[structopt(long)]
        version: i32,
        /// The version to restore.
        #[structopt(long)]
        from: i32,
    },

    Comment {
        workspace: String,
        document: String,
        text: String,
    },

    Comments { workspace: String, document: String },

    Resolve {
        comment: i64,
        #[structopt(long)]
        reopen: bool,
    },

    /// Render a published document of a public workspace, counting a view.
    RenderDocument { workspace: String, document: String },

    /// Show view statistics for a document.
    Views { workspace: String, document: String },
}

#[derive(Debug)]
pub struct Context<'a> {
    pub server: &'a Server,
    pub user: Option<&'a str>,
    pub visitor_file: &'a Path,
}

impl Context<'_> {
    fn actor(&self) -> Result<User> {
        match self.user {
            Some(email) => self.server.get_user_by_email(email),
            None => Err(Error::StaticMsg(
                "no acting user, pass --user or set DOCWELL_USER",
            )),
        }
    }

    /// The acting user if one was given, for commands anonymous readers may also run.
    fn reader(&self) -> Result<Option<UserId>> {
        match self.user {
            Some(_) => self.actor().map(|user| Some(user.id())),
            None => Ok(None),
        }
    }

    fn document(&self, workspace: &str, slug: &str) -> Result<Document> {
        self.server.get_document(self.reader()?, Right((workspace, slug)))
    }

    fn member(&self, actor: &User, team: &Team, email: &str) -> Result<TeamMember> {
        let email = email.trim().to_ascii_lowercase();

        self.server
            .list_members(actor.id(), team.id())?
            .into_iter()
            .find(|member| member.email == email)
            .map(|member| member.member)
            .ok_or(Error::MemberNotFound)
    }
}

fn json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|error| {
        error!("Unable to serialize output: {}", error);

        Error::StaticMsg("unable to serialize output")
    })
}

fn read_file(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading content from {}", path.display());

            Ok(fs::read_to_string(path)?)
        }
        None => Ok(String::new()),
    }
}

pub fn run(context: &Context, command: Command) -> Result<String> {
    let server = context.server;

    info!("Running command {:?}", command);

    match command {
        Command::AddUser { email, name } => json(&server.create_user(&email, &name)?),
        Command::Slugify { text } => Ok(slugify(&text)),
        Command::CreateSpace {
            name,
            slug,
            description,
            public,
        } => {
            let actor = context.actor()?;
            let input = NewSpaceInput {
                name: &name,
                slug: slug.as_deref(),
                description: description.as_deref(),
                is_public: public,
            };

            json(&server.create_space(actor.id(), input)?)
        }
        Command::ListSpaces => {
            let actor = context.actor()?;

            json(&server.list_spaces(actor.id())?)
        }
        Command::CreatePage {
            space,
            title,
            slug,
            parent,
            file,
            draft,
        } => {
            let actor = context.actor()?;
            let parent_id = match parent {
                Some(parent) => Some(server.get_page(&space, &parent)?.id()),
                None => None,
            };

            let content = read_file(file.as_deref())?;
            let input = NewPageInput {
                title: &title,
                slug: slug.as_deref(),
                content: &content,
                parent_id,
                is_published: !draft,
            };

            json(&server.create_page(actor.id(), &space, input)?)
        }
        Command::EditPage {
            space,
            page,
            title,
            file,
            publish,
            unpublish,
        } => {
            let actor = context.actor()?;
            let page = server.get_page(&space, &page)?;
            let content = match file {
                Some(path) => Some(read_file(Some(path.as_path()))?),
                None => None,
            };

            let is_published = match (publish, unpublish) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            let changes = PageChanges {
                title: title.as_deref(),
                content: content.as_deref(),
                is_published,
            };

            json(&server.edit_page(actor.id(), page.id(), changes)?)
        }
        Command::DeletePage { space, page } => {
            let actor = context.actor()?;
            let page = server.get_page(&space, &page)?;
            server.delete_page(actor.id(), page.id())?;

            json(&page)
        }
        Command::ListPages { space } => {
            let space = server.get_space(&space)?;

            json(&server.list_pages(space.id())?)
        }
        Command::RenderPage { space, page } => server.render_published_page(&space, &page),
        Command::CreateTeam { name, slug } => {
            let actor = context.actor()?;

            json(&server.create_team(actor.id(), &name, slug.as_deref())?)
        }
        Command::ListTeams => {
            let actor = context.actor()?;

            json(&server.list_teams(actor.id())?)
        }
        Command::Members { team } => {
            let actor = context.actor()?;
            let team = server.get_team(&team)?;

            json(&server.list_members(actor.id(), team.id())?)
        }
        Command::Invite { team, email, role } => {
            let actor = context.actor()?;
            let team = server.get_team(&team)?;

            json(&server.invite_member(actor.id(), team.id(), &email, role)?)
        }
        Command::SetRole { team, email, role } => {
            let actor = context.actor()?;
            let team = server.get_team(&team)?;
            let member = context.member(&actor, &team, &email)?;

            json(&server.change_member_role(actor.id(), member.id(), role)?)
        }
        Command::RemoveMember { team, email } => {
            let actor = context.actor()?;
            let team = server.get_team(&team)?;
            let member = context.member(&actor, &team, &email)?;
            server.remove_member(actor.id(), member.id())?;

            json(&member)
        }
        Command::CreateWorkspace {
            team,
            name,
            slug,
            description,
            public,
            theme,
        } => {
            let actor = context.actor()?;
            let input = NewWorkspaceInput {
                name: &name,
                slug: slug.as_deref(),
                description: description.as_deref(),
                icon: None,
                is_public: public,
                theme,
            };

            json(&server.create_workspace(actor.id(), &team, input)?)
        }
        Command::Overview { workspace } => {
            json(&server.workspace_overview(context.reader()?, &workspace)?)
        }
        Command::CreateCollection {
            workspace,
            name,
            slug,
            description,
        } => {
            let actor = context.actor()?;
            let input = NewCollectionInput {
                name: &name,
                slug: slug.as_deref(),
                description: description.as_deref(),
                icon: None,
            };

            json(&server.create_collection(actor.id(), &workspace, input)?)
        }
        Command::CreateTemplate {
            workspace,
            name,
            file,
            default,
        } => {
            let actor = context.actor()?;
            let content = read_file(file.as_deref())?;
            let input = NewTemplateInput {
                name: &name,
                description: None,
                content: &content,
                icon: None,
                is_default: default,
            };

            json(&server.create_template(actor.id(), &workspace, input)?)
        }
        Command::ListTemplates { workspace } => {
            let workspace = server.get_workspace(&workspace)?;

            json(&server.list_templates(workspace.id())?)
        }
        Command::CreateDocument {
            workspace,
            collection,
            title,
            slug,
            file,
            template,
        } => {
            let actor = context.actor()?;
            let content = read_file(file.as_deref())?;
            let input = NewDocumentInput {
                title: &title,
                slug: slug.as_deref(),
                content: &content,
                template_id: template.map(TemplateId::from_raw),
                ..Default::default()
            };

            json(&server.create_document(actor.id(), &workspace, &collection, input)?)
        }
        Command::EditDocument {
            workspace,
            document,
            version,
            title,
            file,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;
            let content = read_file(Some(file.as_path()))?;
            let edit = DocumentEdit {
                expected_version: version,
                title: title.as_deref().unwrap_or_else(|| document.title()),
                content: &content,
                excerpt: None,
            };

            json(&server.save_document(actor.id(), document.id(), edit)?)
        }
        Command::Publish {
            workspace,
            document,
            undo,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;

            json(&server.set_document_published(actor.id(), document.id(), !undo)?)
        }
        Command::History {
            workspace,
            document,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;

            json(&server.list_versions(actor.id(), document.id())?)
        }
        Command::Restore {
            workspace,
            document,
            version,
            from,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;

            json(&server.restore_version(actor.id(), document.id(), version, from)?)
        }
        Command::Comment {
            workspace,
            document,
            text,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;

            json(&server.add_comment(actor.id(), document.id(), &text)?)
        }
        Command::Comments {
            workspace,
            document,
        } => {
            let actor = context.actor()?;
            let document = context.document(&workspace, &document)?;

            json(&server.list_comments(actor.id(), document.id())?)
        }
        Command::Resolve { comment, reopen } => {
            let actor = context.actor()?;
            let id = CommentId::from_raw(comment);

            json(&server.resolve_comment(actor.id(), id, !reopen)?)
        }
        Command::RenderDocument {
            workspace,
            document,
        } => {
            let html = server.render_document(&workspace, &document)?;
            let document = server.get_public_document(&workspace, &document)?;
            let visitor = VisitorId::load_or_create(context.visitor_file)?;
            let user = context.actor().ok().map(|user| user.id());

            server.record_view(document.id(), visitor, user)?;
            Ok(html)
        }
        Command::Views {
            workspace,
            document,
        } => {
            let document = context.document(&workspace, &document)?;

            #[derive(Serialize, Debug)]
            struct Views {
                views: i64,
                visitors: i64,
            }

            json(&Views {
                views: server.view_count(document.id())?,
                visitors: server.visitor_count(document.id())?,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    fn execute(server: &Server, user: Option<&str>, command: Command) -> Result<Value> {
        let context = Context {
            server,
            user,
            visitor_file: Path::new(".docwell/visitor-id"),
        };

        let output = run(&context, command)?;
        Ok(serde_json::from_str(&output).expect("Output is not JSON"))
    }

    fn create_server() -> Server {
        Server::new(Config {
            database_url: ":memory:",
        })
        .expect("Unable to create server")
    }

    #[test]
    fn slugify_text() {
        let server = create_server();
        let context = Context {
            server: &server,
            user: None,
            visitor_file: Path::new(".docwell/visitor-id"),
        };

        let output = run(
            &context,
            Command::Slugify {
                text: str!("Hello, World!"),
            },
        )
        .expect("Unable to slugify");

        assert_eq!(output, "hello-world");
    }

    #[test]
    fn acting_user() {
        let server = create_server();

        let error = execute(&server, None, Command::ListSpaces).expect_err("Ran without a user");
        assert_eq!(error.fixed_name(), "custom");

        let error = execute(&server, Some("nobody@example.com"), Command::ListSpaces)
            .expect_err("Ran as unknown user");
        assert_eq!(error.fixed_name(), "user-not-found");
    }

    #[test]
    fn team_documents() {
        let server = create_server();
        let owner = Some("olivia@example.com");

        execute(
            &server,
            None,
            Command::AddUser {
                email: str!("olivia@example.com"),
                name: str!("Olivia"),
            },
        )
        .expect("Unable to add user");

        let team = execute(
            &server,
            owner,
            Command::CreateTeam {
                name: str!("Acme Docs"),
                slug: None,
            },
        )
        .expect("Unable to create team");
        assert_eq!(team["slug"], "acme-docs");

        execute(
            &server,
            owner,
            Command::CreateWorkspace {
                team: str!("acme-docs"),
                name: str!("Handbook"),
                slug: None,
                description: None,
                public: false,
                theme: Theme::Minimal,
            },
        )
        .expect("Unable to create workspace");

        execute(
            &server,
            owner,
            Command::CreateCollection {
                workspace: str!("handbook"),
                name: str!("Onboarding"),
                slug: None,
                description: None,
            },
        )
        .expect("Unable to create collection");

        let document = execute(
            &server,
            owner,
            Command::CreateDocument {
                workspace: str!("handbook"),
                collection: str!("onboarding"),
                title: str!("First Day"),
                slug: None,
                file: None,
                template: None,
            },
        )
        .expect("Unable to create document");
        assert_eq!(document["slug"], "first-day");
        assert_eq!(document["version"], 1);

        let document = execute(
            &server,
            owner,
            Command::Publish {
                workspace: str!("handbook"),
                document: str!("first-day"),
                undo: false,
            },
        )
        .expect("Unable to publish document");
        assert_eq!(document["is_published"], true);

        let history = execute(
            &server,
            owner,
            Command::History {
                workspace: str!("handbook"),
                document: str!("first-day"),
            },
        )
        .expect("Unable to get history");
        assert_eq!(history.as_array().map(Vec::len), Some(1));

        let error = execute(
            &server,
            None,
            Command::Overview {
                workspace: str!("handbook"),
            },
        )
        .expect_err("Private overview shown without a user");
        assert_eq!(error.fixed_name(), "workspace-not-found");

        let overview = execute(
            &server,
            owner,
            Command::Overview {
                workspace: str!("handbook"),
            },
        )
        .expect("Unable to get overview");
        assert_eq!(overview[0]["collection"]["slug"], "onboarding");
        assert_eq!(overview[0]["documents"][0]["title"], "First Day");

        let members = execute(
            &server,
            owner,
            Command::Members {
                team: str!("acme-docs"),
            },
        )
        .expect("Unable to list members");
        assert_eq!(members[0]["email"], "olivia@example.com");
        assert_eq!(members[0]["role"], "owner");
    }
}
