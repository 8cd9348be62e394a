//! The embed URL contract between the host page and the hosted viewer.

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

use serde::{Deserialize, Serialize};

use crate::message::RetargetMessage;
use crate::slug::percent_encode;

/// Object scope used when none is specified: the project's log stream.
pub const DEFAULT_OBJECT_TYPE: &str = "project_logs";

/// Everything needed to address one trace inside the hosted viewer.
///
/// Constructible only from a resolved project id plus a selected record.
/// The API key rides on the URL because the embedded viewer authenticates
/// through its own navigation; that exposure is part of the documented
/// embed contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceTarget {
    pub instance_url: String,
    pub org_name: String,
    pub project_slug: String,
    pub api_key: String,
    pub object_type: String,
    pub object_id: String,
    pub root_span_id: String,
    pub selected_span_id: Option<String>,
}

impl TraceTarget {
    /// Build a target scoped to a project's log stream.
    #[must_use]
    pub fn new(
        instance_url: impl Into<String>,
        org_name: impl Into<String>,
        project_slug: impl Into<String>,
        api_key: impl Into<String>,
        project_id: impl Into<String>,
        root_span_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_url: instance_url.into(),
            org_name: org_name.into(),
            project_slug: project_slug.into(),
            api_key: api_key.into(),
            object_type: DEFAULT_OBJECT_TYPE.to_owned(),
            object_id: project_id.into(),
            root_span_id: root_span_id.into(),
            selected_span_id: None,
        }
    }

    /// The viewer URL for this target:
    /// `{instance}/app/{org}/p/{slug}/trace?api_key=..&object_type=..&object_id=..&r=..[&s=..]`.
    #[must_use]
    pub fn trace_url(&self) -> String {
        let base = self.instance_url.trim_end_matches('/');
        let mut url = format!(
            "{base}/app/{org}/p/{slug}/trace?api_key={api_key}&object_type={object_type}&object_id={object_id}&r={root}",
            org = percent_encode(&self.org_name),
            slug = percent_encode(&self.project_slug),
            api_key = percent_encode(&self.api_key),
            object_type = percent_encode(&self.object_type),
            object_id = percent_encode(&self.object_id),
            root = percent_encode(&self.root_span_id),
        );
        if let Some(selected) = &self.selected_span_id {
            url.push_str("&s=");
            url.push_str(&percent_encode(selected));
        }
        url
    }

    /// True when everything except the span selection matches; decides
    /// whether the viewer can be repointed in place.
    #[must_use]
    pub fn same_base(&self, other: &Self) -> bool {
        self.instance_url == other.instance_url
            && self.org_name == other.org_name
            && self.project_slug == other.project_slug
            && self.api_key == other.api_key
            && self.object_type == other.object_type
            && self.object_id == other.object_id
    }

    /// The message that moves an already-open viewer to this target.
    #[must_use]
    pub fn retarget_message(&self) -> RetargetMessage {
        RetargetMessage {
            r: self.root_span_id.clone(),
            s: self.selected_span_id.clone(),
        }
    }
}
