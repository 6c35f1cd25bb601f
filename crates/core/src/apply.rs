// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::registry::ScheduleRegistry;
use ref_alloc_domain::{Fixture, Official, OfficialId};
use tracing::warn;

/// The result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An official was registered under this identifier.
    OfficialRegistered(OfficialId),
    /// An official was removed.
    OfficialRemoved(Official),
    /// An official's details were replaced.
    OfficialEdited(OfficialId),
    /// A fixture was created and staffed.
    MatchScheduled(Fixture),
    /// A fixture was removed and its officials released.
    MatchUnscheduled(Fixture),
}

/// Applies a command to the registry.
///
/// Commands are atomic: they either succeed completely or fail without side
/// effects.
///
/// # Arguments
///
/// * `registry` - The registry to update
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Outcome)` describing the change
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates a domain rule.
pub fn apply(registry: &mut ScheduleRegistry, command: Command) -> Result<Outcome, CoreError> {
    let name: &'static str = command.name();

    let result: Result<Outcome, CoreError> = match command {
        Command::RegisterOfficial { official } => {
            let id: OfficialId = official.id().clone();
            registry
                .register_official(official)
                .map(|()| Outcome::OfficialRegistered(id))
        }
        Command::RemoveOfficial { id } => {
            registry.remove_official(&id).map(Outcome::OfficialRemoved)
        }
        Command::EditOfficial {
            id,
            qualification,
            home,
            availability,
        } => registry
            .edit_official(&id, qualification, home, availability)
            .map(|()| Outcome::OfficialEdited(id)),
        Command::ScheduleMatch { venue, level, week } => registry
            .schedule_match(venue, level, week)
            .map(Outcome::MatchScheduled),
        Command::UnscheduleMatch { week } => {
            registry.unschedule_match(week).map(Outcome::MatchUnscheduled)
        }
    };

    if let Err(err) = &result {
        warn!(command = name, error = %err, "Command rejected");
    }
    result
}
