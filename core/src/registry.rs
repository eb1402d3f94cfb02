//! The option registry.
//!
//! [`Options`] owns every [`OptionDef`] in an arena addressed by
//! [`OptionId`], maps short and long keys to those handles, and records which
//! options belong to which mutual-exclusion group. The registry is read-only
//! while parsing, so one instance can serve any number of parses.

use std::collections::HashMap;

use crate::types::strip_dashes;
use crate::validate::{validate_group, validate_option};
use crate::{GroupDef, GroupId, OptionDef, OptionGroup, OptionId, Requirement, ValidationError};

/// Registry of recognized options and groups.
///
/// # Examples
///
/// ```
/// use optline_core::*;
///
/// let mut options = Options::new();
/// let verbose = options.add(OptionDef::flag("v").long("verbose")).unwrap();
/// options
///     .add_group(
///         OptionGroup::new()
///             .with_option(OptionDef::flag("a"))
///             .with_option(OptionDef::flag("b"))
///             .required(),
///     )
///     .unwrap();
///
/// assert!(options.has_option("--verbose"));
/// assert_eq!(options.resolve("-v"), Some(verbose));
/// assert!(options.group_of(verbose).is_none());
/// assert_eq!(options.required_options().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    defs: Vec<OptionDef>,
    membership: Vec<Option<GroupId>>,
    groups: Vec<GroupDef>,
    index: HashMap<String, OptionId>,
}

impl Options {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option outside of any group.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the definition is malformed or one of
    /// its keys is already taken.
    pub fn add(&mut self, option: OptionDef) -> Result<OptionId, ValidationError> {
        validate_option(&option)?;
        self.insert(option, None)
    }

    /// Registers a group together with all of its member options.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the group is empty, a member is
    /// malformed, or a member key is already taken. Nothing is registered
    /// when an error is returned.
    pub fn add_group(&mut self, group: OptionGroup) -> Result<GroupId, ValidationError> {
        validate_group(&group)?;

        let mut keys: Vec<&str> = Vec::new();
        for option in &group.options {
            for key in option_keys(option) {
                if self.index.contains_key(key) || keys.contains(&key) {
                    return Err(ValidationError::DuplicateOption(key.to_string()));
                }
                keys.push(key);
            }
        }

        let group_id = GroupId::new(self.groups.len());
        let mut members = Vec::with_capacity(group.options.len());
        for option in group.options {
            members.push(self.insert(option, Some(group_id))?);
        }
        self.groups.push(GroupDef {
            members,
            required: group.required,
        });

        Ok(group_id)
    }

    fn insert(
        &mut self,
        option: OptionDef,
        group: Option<GroupId>,
    ) -> Result<OptionId, ValidationError> {
        for key in option_keys(&option) {
            if self.index.contains_key(key) {
                return Err(ValidationError::DuplicateOption(key.to_string()));
            }
        }

        let id = OptionId::new(self.defs.len());
        for key in option_keys(&option) {
            self.index.insert(key.to_string(), id);
        }
        self.defs.push(option);
        self.membership.push(group);
        Ok(id)
    }

    /// Returns `true` if `name` designates a registered option.
    ///
    /// Leading dashes are ignored, so `-v`, `--verbose` and `verbose` are all
    /// accepted.
    pub fn has_option(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns `true` if `token` is dash-prefixed and designates a registered
    /// option.
    ///
    /// This is the test applied to raw argument tokens, where a bare word is
    /// always data even when it happens to spell an option key.
    pub fn is_option_token(&self, token: &str) -> bool {
        token.starts_with('-') && self.has_option(token)
    }

    /// Resolves a short or long name to its handle.
    pub fn resolve(&self, name: &str) -> Option<OptionId> {
        let bare = strip_dashes(name);
        if bare.is_empty() {
            return None;
        }
        self.index.get(bare).copied()
    }

    /// Looks up an option definition by short or long name.
    pub fn get(&self, name: &str) -> Option<&OptionDef> {
        self.resolve(name).map(|id| self.option(id))
    }

    /// Returns the definition behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn option(&self, id: OptionId) -> &OptionDef {
        &self.defs[id.index()]
    }

    /// Returns the group record behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn group(&self, id: GroupId) -> &GroupDef {
        &self.groups[id.index()]
    }

    /// Returns the group an option belongs to, if any.
    pub fn group_of(&self, id: OptionId) -> Option<GroupId> {
        self.membership.get(id.index()).copied().flatten()
    }

    /// Builds a fresh required-options working set.
    ///
    /// Contains every required option followed by every required group, in
    /// registration order.
    pub fn required_options(&self) -> Vec<Requirement> {
        let options = self
            .iter()
            .filter(|(_, option)| option.required)
            .map(|(id, _)| Requirement::Option(id));
        let groups = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.required)
            .map(|(index, _)| Requirement::Group(GroupId::new(index)));
        options.chain(groups).collect()
    }

    /// Human-readable name of a requirement.
    ///
    /// Options render as their dash-prefixed short key (`-r`), groups as the
    /// bracketed list of their members (`[-a, -b]`).
    pub fn requirement_name(&self, requirement: Requirement) -> String {
        match requirement {
            Requirement::Option(id) => self.option(id).key(),
            Requirement::Group(id) => self.group_name(id),
        }
    }

    /// Renders a group as the bracketed list of its member keys.
    pub fn group_name(&self, id: GroupId) -> String {
        let members: Vec<String> = self
            .group(id)
            .members()
            .iter()
            .map(|member| self.option(*member).key())
            .collect();
        format!("[{}]", members.join(", "))
    }

    /// Iterates over all options with their handles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &OptionDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(index, option)| (OptionId::new(index), option))
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if no option is registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Number of registered groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

fn option_keys(option: &OptionDef) -> impl Iterator<Item = &str> {
    let short = option.short.as_str();
    std::iter::once(short).chain(option.long.as_deref().filter(move |long| *long != short))
}
