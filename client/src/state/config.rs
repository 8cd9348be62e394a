//! Base configuration and project-resolution bookkeeping.
//!
//! DESIGN
//! ======
//! The user-editable credentials live together with the resolution state
//! derived from them so renaming the project atomically invalidates the
//! previously resolved identifier.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::config::DefaultConfig;

/// Records fetched per request.
pub const FETCH_LIMIT: u32 = 50;

/// Which form field changed; the update path applies per-field
/// invalidation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    InstanceUrl,
    OrgName,
    ProjectName,
    ApiKey,
}

/// Inputs for one log fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchParams {
    pub project_id: String,
    pub limit: u32,
    pub days_back: u32,
}

/// User-supplied configuration plus the project id resolved from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigState {
    pub instance_url: String,
    pub org_name: String,
    pub project_name: String,
    pub api_key: String,
    pub days_back: u32,
    /// Identifier resolved from (org, project name); empty until a lookup
    /// succeeds.
    pub project_id: String,
    /// Last project name an automatic lookup was attempted for.
    pub last_resolved_name: String,
    pub resolving: bool,
    /// Whether the user has interacted with the fetch flow; gates
    /// informational statuses from the silent auto-resolution path.
    pub has_attempted_fetch: bool,
}

impl ConfigState {
    #[must_use]
    pub fn from_defaults(defaults: &DefaultConfig) -> Self {
        Self {
            instance_url: defaults.instance_url.clone(),
            org_name: defaults.org_name.clone(),
            project_name: defaults.project_name.clone(),
            api_key: defaults.api_key.clone(),
            days_back: defaults.days_back,
            ..Self::default()
        }
    }

    /// Apply a form edit. Changing the project name resets the resolved id
    /// and the last-attempted name so resolution re-runs.
    pub fn set_field(&mut self, field: ConfigField, value: String) {
        if field == ConfigField::ProjectName && value != self.project_name {
            self.project_id.clear();
            self.last_resolved_name.clear();
            self.has_attempted_fetch = true;
        }
        match field {
            ConfigField::InstanceUrl => self.instance_url = value,
            ConfigField::OrgName => self.org_name = value,
            ConfigField::ProjectName => self.project_name = value,
            ConfigField::ApiKey => self.api_key = value,
        }
    }

    /// Clamp the lookback window to the supported 1..=365 day range.
    pub fn set_days_back(&mut self, days: u32) {
        self.days_back = days.clamp(1, records::query::MAX_DAYS_BACK);
    }

    #[must_use]
    pub fn project_slug(&self) -> String {
        embed::slugify(&self.project_name)
    }

    /// Organization name with any configured percent-encoding undone.
    #[must_use]
    pub fn decoded_org(&self) -> String {
        embed::percent_decode(&self.org_name)
    }

    #[must_use]
    pub fn base_fields_complete(&self) -> bool {
        !self.instance_url.is_empty()
            && !self.org_name.is_empty()
            && !self.project_name.is_empty()
            && !self.api_key.is_empty()
    }

    /// Whether the automatic project resolution should run now.
    #[must_use]
    pub fn wants_resolution(&self) -> bool {
        self.base_fields_complete()
            && !self.resolving
            && self.last_resolved_name != self.project_name
    }

    /// Message blocking an explicit fetch, when any.
    #[must_use]
    pub fn validation_message(&self) -> Option<String> {
        if !self.base_fields_complete() {
            return Some("Please fill in all base configuration fields".to_owned());
        }
        if self.project_id.is_empty() {
            return Some(format!(
                "Could not find project \"{}\" in org \"{}\". Please check your credentials.",
                self.project_name,
                self.decoded_org()
            ));
        }
        None
    }

    /// Parameters for a log fetch, when the configuration allows one.
    #[must_use]
    pub fn fetch_params(&self) -> Option<FetchParams> {
        if self.instance_url.is_empty() || self.api_key.is_empty() || self.project_id.is_empty() {
            return None;
        }
        Some(FetchParams {
            project_id: self.project_id.clone(),
            limit: FETCH_LIMIT,
            days_back: self.days_back,
        })
    }
}
