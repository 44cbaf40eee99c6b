//! Jira remote link request types.
//!
//! These types are the raw JSON bodies sent to
//! `POST /rest/api/3/issue/{key}/remotelink`. They are built from the unified
//! [`RemoteLink`] type.

use remote_link_core::RemoteLink;
use serde::Serialize;

/// Body of a create-or-update remote link request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLinkPayload {
    /// Upsert key: a link with the same global id is updated in place
    pub global_id: String,
    pub application: Application,
    /// The linked object
    #[serde(rename = "jira-token")]
    pub object: RemoteObject,
    pub relationship: String,
}

/// Application the link points into.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub name: String,
}

/// The linked object.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteObject {
    pub url: String,
    pub title: String,
    pub icon: Icon,
    pub status: RemoteStatus,
}

/// 16x16 icon with a tooltip title.
#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub title: String,
    #[serde(rename = "url16x16")]
    pub url: String,
}

/// Status of the linked object.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteStatus {
    pub icon: Icon,
    pub resolved: bool,
}

impl From<&RemoteLink> for RemoteLinkPayload {
    fn from(link: &RemoteLink) -> Self {
        let icon = Icon {
            title: link.status.title.clone(),
            url: link.status.icon_url.clone(),
        };

        Self {
            global_id: link.global_id.clone(),
            application: Application {
                name: link.application.clone(),
            },
            object: RemoteObject {
                url: link.url.clone(),
                title: link.title.clone(),
                icon: icon.clone(),
                status: RemoteStatus {
                    icon,
                    resolved: link.status.resolved,
                },
            },
            relationship: link.relationship.clone(),
        }
    }
}
