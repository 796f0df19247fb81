/*
 * main.rs
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

//! Command-line front end for docwell.

#![deny(missing_debug_implementations)]

extern crate color_backtrace;
extern crate docwell;
extern crate either;

#[macro_use]
extern crate log;
extern crate pretty_env_logger;
extern crate ref_map;

#[macro_use]
extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate str_macro;
extern crate structopt;
extern crate toml;

mod command;
mod config;

use self::config::Config;
use docwell::{Config as DocwellConfig, Server};
use ref_map::*;
use std::process;

pub type StdResult<T, E> = std::result::Result<T, E>;
pub type Result<T> = StdResult<T, docwell::Error>;

fn main() {
    color_backtrace::install();

    let Config {
        log_level,
        database_url,
        user,
        visitor_file,
        command,
    } = Config::parse_args();

    pretty_env_logger::formatted_builder()
        .filter_level(log_level)
        .init();

    debug!("Building docwell server configuration");
    let config = DocwellConfig {
        database_url: &database_url,
    };

    let result = Server::new(config).and_then(|server| {
        let context = command::Context {
            server: &server,
            user: user.ref_map(|s| s.as_str()),
            visitor_file: &visitor_file,
        };

        command::run(&context, command)
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(error) => {
            let error = error.to_sendable();

            match serde_json::to_string(&error) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}: {}", error.name, error.message),
            }

            process::exit(1);
        }
    }
}
