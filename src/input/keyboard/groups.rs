//! Registry of named key groups.

use ::std::collections::HashMap;
use ::tracing::debug;

use super::{Key, KeyCode, GK_ALT, GK_CTRL, GK_ENTER, GK_SHIFT};
use crate::errors::{Error, Result};

/// Maps group names to their flattened, ordered member key codes.
///
/// Groups may be defined in terms of other groups, but the referenced group's
/// members are copied in at registration time. Redefining a referenced group
/// later does not affect groups which were built from it.
#[derive(Clone, Debug, Default)]
pub struct GroupRegistry {
    groups: HashMap<String, Vec<KeyCode>>,
}

impl GroupRegistry {
    /// Constructs an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a registry pre-populated with the default modifier and
    /// enter groups: [`GK_CTRL`], [`GK_ALT`], [`GK_SHIFT`] and [`GK_ENTER`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, members) in [
            (GK_CTRL, [KeyCode::LCTRL, KeyCode::RCTRL]),
            (GK_ALT, [KeyCode::LALT, KeyCode::RALT]),
            (GK_SHIFT, [KeyCode::LSHIFT, KeyCode::RSHIFT]),
            (GK_ENTER, [KeyCode::RETURN, KeyCode::KP_ENTER]),
        ] {
            registry.groups.insert(name.to_owned(), members.to_vec());
        }
        registry
    }

    /// Registers (or replaces) the group `name`.
    ///
    /// Raw members are appended as-is. Group members are replaced by their
    /// current flattened members. Fails with [`Error::UnknownGroupReference`]
    /// if a member group is not registered, in which case the registry is left
    /// unchanged.
    pub fn define<I, K>(&mut self, name: &str, members: I) -> Result<&[KeyCode]>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut flattened = Vec::new();
        for member in members {
            match member.into() {
                Key::Raw(key_code) => flattened.push(key_code),
                Key::Group(member) => match self.groups.get(&member) {
                    Some(keys) => flattened.extend_from_slice(keys),
                    None => {
                        return Err(Error::UnknownGroupReference {
                            group: name.to_owned(),
                            member,
                        })
                    }
                },
            }
        }

        debug!(group = %name, members = ?flattened, "Defining key group");
        let slot = self.groups.entry(name.to_owned()).or_default();
        *slot = flattened;
        Ok(slot.as_slice())
    }

    /// Returns the flattened members of the group `name`.
    pub fn members(&self, name: &str) -> Result<&[KeyCode]> {
        self.groups
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownGroupQuery(name.to_owned()))
    }

    /// Returns `true` if a group called `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterates over the registered group names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    const K1: KeyCode = KeyCode::from_ascii(b'a');
    const K2: KeyCode = KeyCode::from_ascii(b'b');
    const K3: KeyCode = KeyCode::from_ascii(b'c');

    #[test]
    fn test_default_groups() {
        let registry = GroupRegistry::with_defaults();

        assert_eq!(
            registry.members(GK_CTRL).unwrap(),
            &[KeyCode::LCTRL, KeyCode::RCTRL]
        );
        assert_eq!(
            registry.members(GK_ALT).unwrap(),
            &[KeyCode::LALT, KeyCode::RALT]
        );
        assert_eq!(
            registry.members(GK_SHIFT).unwrap(),
            &[KeyCode::LSHIFT, KeyCode::RSHIFT]
        );
        assert_eq!(
            registry.members(GK_ENTER).unwrap(),
            &[KeyCode::RETURN, KeyCode::KP_ENTER]
        );

        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["ALT", "CTRL", "ENTER", "SHIFT"]);
        assert!(GroupRegistry::new().names().next().is_none());
    }

    /// Group references are flattened at definition time.
    #[test]
    fn test_define_flattens_transitively() {
        let mut registry = GroupRegistry::new();
        registry.define("A", [K1]).unwrap();
        registry
            .define("B", [Key::from("A"), Key::from(K2)])
            .unwrap();

        assert_eq!(registry.members("B").unwrap(), &[K1, K2]);
    }

    /// Redefining a referenced group does not propagate to groups which were
    /// already built from it.
    #[test]
    fn test_redefinition_does_not_propagate() {
        let mut registry = GroupRegistry::new();
        registry.define("A", [K1]).unwrap();
        registry.define("B", ["A"]).unwrap();
        registry.define("A", [K3]).unwrap();

        assert_eq!(registry.members("A").unwrap(), &[K3]);
        assert_eq!(registry.members("B").unwrap(), &[K1]);
    }

    #[test]
    fn test_unknown_reference_leaves_registry_untouched() {
        let mut registry = GroupRegistry::new();
        registry.define("A", [K1]).unwrap();

        let err = registry
            .define("A", [Key::from(K2), Key::from("MISSING")])
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownGroupReference {
                group: "A".to_owned(),
                member: "MISSING".to_owned(),
            }
        );
        assert_eq!(registry.members("A").unwrap(), &[K1]);
        assert!(!registry.contains("MISSING"));
    }

    #[test]
    fn test_unknown_query() {
        let registry = GroupRegistry::new();
        assert_eq!(
            registry.members("JUMP").unwrap_err(),
            Error::UnknownGroupQuery("JUMP".to_owned())
        );
    }

    #[test]
    fn test_empty_group() {
        let mut registry = GroupRegistry::new();
        let members = registry.define("NONE", Vec::<Key>::new()).unwrap();
        assert!(members.is_empty());
        assert!(registry.contains("NONE"));
    }
}
