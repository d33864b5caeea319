// git-rules - Commit message rules for Git repositories.
// Copyright (C) 2025 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

mod helpers;
mod init;
mod show;

use clap::Parser;
use eyre::Result;
use inquire::InquireError;
use itertools::Itertools as _;

use self::{
    helpers::NotInGitWorktree,
    init::{Init, InitError},
    show::Show,
};
use crate::{
    config::{LoadError, ResolveError},
    error, hint, preset,
};

/// Commit message rules for Git repositories.
#[derive(Debug, Parser)]
#[command(author, version = env!("VERSION_WITH_GIT"))]
pub enum GitRules {
    /// Initialises the configuration.
    Init(Init),
    /// Shows the resolved rule set.
    Show(Show),
}

trait Command {
    /// Runs the command.
    fn run(&self) -> Result<()>;
}

impl GitRules {
    /// Runs git-rules.
    pub fn run() -> Result<()> {
        let result = match Self::parse() {
            Self::Init(init) => init.run(),
            Self::Show(show) => show.run(),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<NotInGitWorktree>() {
        match e {
            NotInGitWorktree::CannotRunGit(os_error) => {
                error!("{e}.");
                hint!("The OS reports: {os_error}.");
            }
            NotInGitWorktree::NotInRepo => {
                error!("{e}.");
                hint!(
                    "You can initialise a Git repository by running \
                    `git init`."
                );
            }
            NotInGitWorktree::NotInWorktree => {
                error!("{e}.");
                hint!(
                    "You seem to be inside a Git repository, but not in a \
                    worktree."
                );
            }
        }
        std::process::exit(exitcode::USAGE);
    } else if let Some(inquire_error) = e.downcast_ref::<InquireError>() {
        match inquire_error {
            InquireError::OperationCanceled => {
                std::process::exit(exitcode::OK);
            }
            InquireError::OperationInterrupted => {
                // Mimic the exit status of a program killed by SIGINT.
                std::process::exit(130);
            }
            _ => Err(e),
        }
    } else if let Some(e) = e.downcast_ref::<InitError>() {
        match e {
            InitError::ExistingConfig => {
                error!("{e}.");
                hint!(
                    "You can force the command by running `git rules init -f`."
                );
            }
        }
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<ResolveError>() {
        match e {
            ResolveError::UnknownPreset(_) => {
                error!("{e}.");
                hint!(
                    "Valid presets are: {}.",
                    preset::NAMES.iter().join(", ")
                );
            }
        }
        std::process::exit(exitcode::CONFIG);
    } else if let Some(e) = e.downcast_ref::<LoadError>() {
        match e {
            LoadError::ConfigFileError(source) => {
                error!("{e}.");
                hint!("{source}.");
            }
            LoadError::ReadError(os_error) => {
                error!("{e}.");
                hint!("The OS reports: {os_error}.");
            }
            LoadError::InvalidConfig(source) => {
                error!("{e}.");
                hint!("{source}");
            }
        }
        std::process::exit(exitcode::CONFIG);
    } else {
        Err(e)
    }
}
