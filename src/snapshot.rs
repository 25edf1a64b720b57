use std::collections::{BTreeMap, BTreeSet};

use hue::legacy_api::{ApiGroupType, ApiUserConfig};

use crate::command::Target;
use crate::error::{ApiError, ApiResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub group_type: ApiGroupType,
    pub lights: Vec<u32>,
}

impl Group {
    #[must_use]
    pub fn is_room(&self) -> bool {
        self.group_type == ApiGroupType::Room
    }
}

/// Lights and groups as reported by the bridge, read once per run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BridgeSnapshot {
    lights: BTreeMap<u32, String>,
    groups: BTreeMap<u32, Group>,
}

impl BridgeSnapshot {
    #[must_use]
    pub const fn new(lights: BTreeMap<u32, String>, groups: BTreeMap<u32, Group>) -> Self {
        Self { lights, groups }
    }

    #[must_use]
    pub fn light_name(&self, id: u32) -> Option<&str> {
        self.lights.get(&id).map(String::as_str)
    }

    /// Lowest light id with the given name
    #[must_use]
    pub fn light_id(&self, name: &str) -> Option<u32> {
        self.lights
            .iter()
            .find_map(|(id, light)| (light == name).then_some(*id))
    }

    #[must_use]
    pub fn all_lights(&self) -> BTreeSet<&str> {
        self.lights.values().map(String::as_str).collect()
    }

    /// Groups of type `Room`, by name. If two rooms share a name, the one
    /// with the highest id wins.
    #[must_use]
    pub fn rooms(&self) -> BTreeMap<&str, &Group> {
        self.groups
            .values()
            .filter(|group| group.is_room())
            .map(|group| (group.name.as_str(), group))
            .collect()
    }

    /// Resolve a target to the light ids the action is sent to.
    ///
    /// Fails if any requested light or room name is unknown, in which case
    /// nothing from this target should be applied.
    pub fn resolve(&self, target: &Target) -> ApiResult<Vec<u32>> {
        match target {
            Target::All => Ok(self.lights.keys().copied().collect()),
            Target::Lights(names) => self.resolve_lights(names),
            Target::Rooms(names) => self.resolve_rooms(names),
        }
    }

    fn resolve_lights(&self, names: &BTreeSet<String>) -> ApiResult<Vec<u32>> {
        let all_lights = self.all_lights();

        let invalid = invalid_names(names, &all_lights);
        if !invalid.is_empty() {
            return Err(ApiError::InvalidLights {
                invalid,
                valid: all_lights.iter().map(ToString::to_string).collect(),
            });
        }

        Ok(names.iter().filter_map(|name| self.light_id(name)).collect())
    }

    /// Lights are collected room by room, without removing duplicates: a
    /// light in two of the named rooms is listed twice.
    fn resolve_rooms(&self, names: &BTreeSet<String>) -> ApiResult<Vec<u32>> {
        let all_rooms = self.rooms();

        let valid: BTreeSet<&str> = all_rooms.keys().copied().collect();
        let invalid = invalid_names(names, &valid);
        if !invalid.is_empty() {
            return Err(ApiError::InvalidRooms {
                invalid,
                valid: valid.iter().map(ToString::to_string).collect(),
            });
        }

        let mut ids = vec![];
        for room in names.iter().filter_map(|name| all_rooms.get(name.as_str())) {
            for &id in &room.lights {
                if !self.lights.contains_key(&id) {
                    return Err(ApiError::UnknownLightId {
                        room: room.name.clone(),
                        id,
                    });
                }
                ids.push(id);
            }
        }

        Ok(ids)
    }
}

fn invalid_names(names: &BTreeSet<String>, valid: &BTreeSet<&str>) -> Vec<String> {
    names
        .iter()
        .filter(|name| !valid.contains(name.as_str()))
        .cloned()
        .collect()
}

impl TryFrom<ApiUserConfig> for BridgeSnapshot {
    type Error = ApiError;

    fn try_from(value: ApiUserConfig) -> ApiResult<Self> {
        let lights = value
            .lights
            .into_iter()
            .map(|(id, light)| (id, light.name))
            .collect();

        let groups = value
            .groups
            .into_iter()
            .map(|(id, group)| -> ApiResult<(u32, Group)> {
                let lights = group.light_ids()?;
                Ok((
                    id,
                    Group {
                        name: group.name,
                        group_type: group.group_type,
                        lights,
                    },
                ))
            })
            .collect::<ApiResult<_>>()?;

        Ok(Self { lights, groups })
    }
}

#[cfg(test)]
pub mod tests {
    use std::collections::BTreeSet;

    use maplit::{btreemap, btreeset};
    use serde_json::json;

    use hue::legacy_api::{ApiGroupType, ApiUserConfig};

    use crate::command::Target;
    use crate::error::ApiError;
    use crate::snapshot::{BridgeSnapshot, Group};

    fn room(name: &str, lights: &[u32]) -> Group {
        Group {
            name: name.to_string(),
            group_type: ApiGroupType::Room,
            lights: lights.to_vec(),
        }
    }

    /// Two rooms sharing the "Hallway" light, and a zone that must never be
    /// addressable as a room
    pub fn house() -> BridgeSnapshot {
        BridgeSnapshot::new(
            btreemap! {
                1 => "Desk".to_string(),
                2 => "Ceiling".to_string(),
                3 => "Hallway".to_string(),
                4 => "Stove".to_string(),
                5 => "Porch".to_string(),
            },
            btreemap! {
                1 => room("Office", &[1, 2, 3]),
                2 => room("Kitchen", &[4, 3]),
                3 => Group {
                    name: "Downstairs".to_string(),
                    group_type: ApiGroupType::Zone,
                    lights: vec![3, 4],
                },
            },
        )
    }

    fn names(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn lookup() {
        let snap = house();
        assert_eq!(snap.light_id("Stove"), Some(4));
        assert_eq!(snap.light_id("Nope"), None);
        assert_eq!(snap.light_name(2), Some("Ceiling"));
        assert_eq!(snap.light_name(9), None);
        assert_eq!(
            snap.all_lights(),
            btreeset! {"Ceiling", "Desk", "Hallway", "Porch", "Stove"}
        );
    }

    #[test]
    fn duplicate_light_name_resolves_to_lowest_id() {
        let snap = BridgeSnapshot::new(
            btreemap! { 7 => "Lamp".to_string(), 3 => "Lamp".to_string() },
            btreemap! {},
        );
        assert_eq!(snap.light_id("Lamp"), Some(3));
    }

    #[test]
    fn group_is_room() {
        assert!(room("Office", &[1]).is_room());

        let zone = Group {
            group_type: ApiGroupType::Zone,
            ..room("Downstairs", &[1])
        };
        assert!(!zone.is_room());

        let other = Group {
            group_type: ApiGroupType::Other,
            ..room("Future", &[])
        };
        assert!(!other.is_room());
    }

    #[test]
    fn rooms_exclude_other_group_types() {
        let snap = house();
        let rooms = snap.rooms();
        assert_eq!(rooms.keys().copied().collect::<Vec<_>>(), ["Kitchen", "Office"]);
    }

    #[test]
    fn resolve_all() {
        assert_eq!(house().resolve(&Target::All).unwrap(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn resolve_lights() {
        let snap = house();
        let target = Target::Lights(names(&["Porch", "Desk"]));
        assert_eq!(snap.resolve(&target).unwrap(), [1, 5]);
    }

    #[test]
    fn resolve_invalid_lights() {
        let snap = house();
        let target = Target::Lights(names(&["Desk", "Garage", "Attic"]));

        let Err(ApiError::InvalidLights { invalid, valid }) = snap.resolve(&target) else {
            panic!("expected invalid lights");
        };
        assert_eq!(invalid, ["Attic", "Garage"]);
        assert_eq!(valid, ["Ceiling", "Desk", "Hallway", "Porch", "Stove"]);
    }

    #[test]
    fn resolve_rooms() {
        let snap = house();
        let target = Target::Rooms(names(&["Kitchen"]));
        assert_eq!(snap.resolve(&target).unwrap(), [4, 3]);
    }

    #[test]
    fn resolve_overlapping_rooms_keeps_duplicates() {
        let snap = house();
        let target = Target::Rooms(names(&["Office", "Kitchen"]));
        assert_eq!(snap.resolve(&target).unwrap(), [4, 3, 1, 2, 3]);
    }

    #[test]
    fn resolve_invalid_rooms() {
        let snap = house();
        let target = Target::Rooms(names(&["Office", "Downstairs"]));

        let Err(ApiError::InvalidRooms { invalid, valid }) = snap.resolve(&target) else {
            panic!("expected invalid rooms");
        };
        assert_eq!(invalid, ["Downstairs"]);
        assert_eq!(valid, ["Kitchen", "Office"]);
    }

    #[test]
    fn resolve_room_with_unknown_light() {
        let snap = BridgeSnapshot::new(btreemap! {}, btreemap! { 1 => room("Attic", &[9]) });
        let target = Target::Rooms(names(&["Attic"]));

        assert!(matches!(
            snap.resolve(&target),
            Err(ApiError::UnknownLightId { room, id: 9 }) if room == "Attic"
        ));
    }

    #[test]
    fn from_user_config() {
        let conf: ApiUserConfig = serde_json::from_value(json!({
            "lights": {
                "1": { "name": "Desk", "type": "Dimmable light", "state": { "on": false } },
                "2": { "name": "Ceiling", "type": "Dimmable light", "state": { "on": true } }
            },
            "groups": {
                "1": { "name": "Office", "lights": ["2", "1"], "type": "Room" }
            }
        }))
        .unwrap();

        let snap = BridgeSnapshot::try_from(conf).unwrap();
        assert_eq!(
            snap,
            BridgeSnapshot::new(
                btreemap! { 1 => "Desk".to_string(), 2 => "Ceiling".to_string() },
                btreemap! { 1 => room("Office", &[2, 1]) },
            )
        );
    }

    #[test]
    fn invalid_error_message() {
        let err = house()
            .resolve(&Target::Lights(names(&["Garage"])))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"["Garage"] are invalid. Valid lights: ["Ceiling", "Desk", "Hallway", "Porch", "Stove"]."#
        );
    }
}
