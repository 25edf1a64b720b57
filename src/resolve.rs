use itertools::Itertools;

use crate::bridge::Bridge;
use crate::command::{Command, Target};
use crate::error::ApiResult;

/// Apply a command to the lights it names.
///
/// Bridge state is fetched once. Targets are then resolved and applied one
/// at a time, lights before rooms, and the first target that fails to
/// resolve ends the run. Lights already updated by an earlier target stay
/// updated.
pub async fn apply(bridge: &impl Bridge, command: &Command) -> ApiResult<()> {
    let snapshot = bridge.get_state().await?;
    let action = command.action();

    for target in command.targets() {
        let ids = snapshot.resolve(&target)?;

        let names = ids
            .iter()
            .filter_map(|id| snapshot.light_name(*id))
            .join(", ");

        match &target {
            Target::All => log::info!("Setting all lights to {}: {names}", command.state),
            Target::Lights(_) => log::info!("Setting lights to {}: {names}", command.state),
            Target::Rooms(rooms) => log::info!(
                "Setting rooms {} to {}: {names}",
                rooms.iter().join(", "),
                command.state
            ),
        }

        bridge.set_light_state(&ids, &action).await?;
    }

    Ok(())
}
