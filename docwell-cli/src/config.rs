/*
 * config.rs
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

use crate::command::Command;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use structopt::StructOpt;

const DEFAULT_DATABASE_URL: &str = "docwell.sqlite3";
const DEFAULT_VISITOR_FILE: &str = ".docwell/visitor-id";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "docwell-cli",
    about = "Manage documentation spaces, team workspaces and versioned documents"
)]
struct Options {
    /// TOML configuration file. Command-line flags take precedence over it.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Path to the SQLite database.
    #[structopt(short, long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Email of the user performing the command.
    #[structopt(short, long, env = "DOCWELL_USER")]
    user: Option<String>,

    /// Log level: off, error, warn, info, debug or trace.
    #[structopt(short, long)]
    log_level: Option<LevelFilter>,

    /// Where this client's anonymous visitor ID is kept.
    #[structopt(long, parse(from_os_str))]
    visitor_file: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    database_url: Option<String>,
    user: Option<String>,
    log_level: Option<String>,
    visitor_file: Option<PathBuf>,
}

impl ConfigFile {
    fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Unable to read config file {}: {}", path.display(), error);
                process::exit(2);
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Invalid config file {}: {}", path.display(), error);
                process::exit(2);
            }
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub log_level: LevelFilter,
    pub database_url: String,
    pub user: Option<String>,
    pub visitor_file: PathBuf,
    pub command: Command,
}

impl Config {
    pub fn parse_args() -> Self {
        let options = Options::from_args();
        let file = match options.config {
            Some(ref path) => ConfigFile::load(path),
            None => ConfigFile::default(),
        };

        let log_level = match (options.log_level, file.log_level) {
            (Some(level), _) => level,
            (None, Some(level)) => match level.parse() {
                Ok(level) => level,
                Err(_) => {
                    eprintln!("Invalid log level in config file: '{}'", level);
                    process::exit(2);
                }
            },
            (None, None) => DEFAULT_LOG_LEVEL,
        };

        Config {
            log_level,
            database_url: options
                .database_url
                .or(file.database_url)
                .unwrap_or_else(|| str!(DEFAULT_DATABASE_URL)),
            user: options.user.or(file.user),
            visitor_file: options
                .visitor_file
                .or(file.visitor_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VISITOR_FILE)),
            command: options.command,
        }
    }
}
