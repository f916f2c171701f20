//! In-memory view routing.
//!
//! The site has no URL routes: one view tag decides what is rendered. The
//! detail view additionally carries the project id and the view it was
//! opened from, which decides where "back" returns to.

use std::{fmt, str::FromStr, time::Duration};

use serde::Deserialize;

/// Anchor of the featured-projects section on the home view.
pub const FEATURED_PROJECTS_ANCHOR: &str = "#featured-projects";

/// Delay before scrolling to an anchor, giving the view time to render.
pub const ANCHOR_SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Projects,
    ProjectDetail,
    Photography,
    Calligraphy,
    Blog,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view `{0}`")]
pub struct UnknownView(pub String);

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Projects,
        View::ProjectDetail,
        View::Photography,
        View::Calligraphy,
        View::Blog,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Projects => "projects",
            View::ProjectDetail => "project-detail",
            View::Photography => "photography",
            View::Calligraphy => "calligraphy",
            View::Blog => "blog",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == raw)
            .ok_or_else(|| UnknownView(raw.to_string()))
    }
}

/// The view a detail page was opened from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    Home,
    #[default]
    Projects,
}

impl Origin {
    /// `home` maps to [`Origin::Home`]; anything else to the projects listing.
    pub fn parse(raw: &str) -> Self {
        if raw == "home" {
            Origin::Home
        } else {
            Origin::Projects
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Home => "home",
            Origin::Projects => "projects",
        }
    }
}

/// What the shell has to do with the viewport after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollEffect {
    Top,
    Anchor { target: String, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTarget {
    pub project_id: String,
    pub origin: Origin,
}

/// Single source of truth for the displayed view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    view: View,
    detail: Option<DetailTarget>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn detail(&self) -> Option<&DetailTarget> {
        self.detail.as_ref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.detail.as_ref().map(|detail| detail.project_id.as_str())
    }

    /// Switches to `view`. The detail view cannot be reached without a
    /// subject, so asking for it here lands on the projects listing.
    pub fn navigate(&mut self, view: View, scroll_target: Option<&str>) -> ScrollEffect {
        let view = if view == View::ProjectDetail { View::Projects } else { view };
        self.view = view;
        self.detail = None;

        match scroll_target.map(str::trim).filter(|target| !target.is_empty()) {
            Some(target) if view == View::Home => ScrollEffect::Anchor {
                target: target.to_string(),
                delay: ANCHOR_SCROLL_DELAY,
            },
            _ => ScrollEffect::Top,
        }
    }

    pub fn navigate_to_detail(&mut self, project_id: &str, origin: Origin) -> ScrollEffect {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return self.navigate(View::Projects, None);
        }
        self.view = View::ProjectDetail;
        self.detail = Some(DetailTarget {
            project_id: project_id.to_string(),
            origin,
        });
        ScrollEffect::Top
    }

    /// Leaves the detail view for the place it was opened from. A no-op on
    /// every other view.
    pub fn back(&mut self) -> Option<ScrollEffect> {
        let origin = self.detail.as_ref()?.origin;
        Some(match origin {
            Origin::Home => self.navigate(View::Home, Some(FEATURED_PROJECTS_ANCHOR)),
            Origin::Projects => self.navigate(View::Projects, None),
        })
    }

    pub fn apply(&mut self, command: &NavCommand) -> ScrollEffect {
        match command {
            NavCommand::Go {
                view,
                hash,
            } => self.navigate(*view, hash.as_deref()),
            NavCommand::Detail {
                project_id,
                origin,
            } => self.navigate_to_detail(project_id, *origin),
        }
    }

    /// Applies a cross-component signal. Returns `None` when the signal is
    /// dropped and the state is left untouched.
    pub fn handle_signal(&mut self, signal: &NavSignal) -> Option<ScrollEffect> {
        let Some(command) = signal.command() else {
            tracing::debug!(?signal, "dropping navigation signal");
            return None;
        };
        Some(self.apply(&command))
    }
}

/// A navigation request published by a component that holds no router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NavSignal {
    Bare(String),
    Structured(NavPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPayload {
    pub view: String,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

/// A validated navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Go { view: View, hash: Option<String> },
    Detail { project_id: String, origin: Origin },
}

impl NavSignal {
    pub fn view(view: View) -> Self {
        NavSignal::Bare(view.as_str().to_string())
    }

    pub fn home_anchor(hash: &str) -> Self {
        NavSignal::Structured(NavPayload {
            view: View::Home.as_str().to_string(),
            hash: Some(hash.to_string()),
            ..NavPayload::default()
        })
    }

    pub fn project_detail(project_id: &str, origin: Origin) -> Self {
        NavSignal::Structured(NavPayload {
            view: View::ProjectDetail.as_str().to_string(),
            project_id: Some(project_id.to_string()),
            from: Some(origin.as_str().to_string()),
            ..NavPayload::default()
        })
    }

    /// Reads a signal from loosely shaped JSON; any other shape is `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(_) | serde_json::Value::Object(_) => {
                NavSignal::deserialize(value).ok()
            },
            _ => None,
        }
    }

    /// Validates the view tag against the closed set. A detail request
    /// without a project id becomes a request for the projects listing.
    pub fn command(&self) -> Option<NavCommand> {
        let (tag, hash, project_id, from) = match self {
            NavSignal::Bare(tag) => (tag.as_str(), None, None, None),
            NavSignal::Structured(payload) => (
                payload.view.as_str(),
                payload.hash.clone(),
                payload.project_id.as_deref(),
                payload.from.as_deref(),
            ),
        };

        let view = tag.parse::<View>().ok()?;
        if view != View::ProjectDetail {
            return Some(NavCommand::Go {
                view,
                hash,
            });
        }

        match project_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(project_id) => Some(NavCommand::Detail {
                project_id: project_id.to_string(),
                origin: from.map(Origin::parse).unwrap_or_default(),
            }),
            None => Some(NavCommand::Go {
                view: View::Projects,
                hash: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn starts_on_home_without_detail() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), View::Home);
        assert!(router.detail().is_none());
    }

    #[test]
    fn back_from_detail_opened_on_home_scrolls_to_featured_projects() {
        let mut router = ViewRouter::new();
        assert_eq!(router.navigate_to_detail("5", Origin::Home), ScrollEffect::Top);
        assert_eq!(router.project_id(), Some("5"));

        let effect = router.back().expect("back from detail");
        assert_eq!(router.view(), View::Home);
        assert_eq!(effect, ScrollEffect::Anchor {
            target: FEATURED_PROJECTS_ANCHOR.to_string(),
            delay: ANCHOR_SCROLL_DELAY,
        });
    }

    #[test]
    fn back_from_detail_opened_on_listing_returns_to_listing() {
        let mut router = ViewRouter::new();
        router.navigate_to_detail("2", Origin::Projects);
        assert_eq!(router.back(), Some(ScrollEffect::Top));
        assert_eq!(router.view(), View::Projects);
        assert!(router.back().is_none());
    }

    #[test]
    fn leaving_detail_clears_the_subject() {
        let mut router = ViewRouter::new();
        router.navigate_to_detail("3", Origin::Projects);
        router.navigate(View::Projects, None);
        router.navigate(View::Home, None);
        assert!(router.project_id().is_none());
    }

    #[test]
    fn anchor_scroll_only_applies_to_home() {
        let mut router = ViewRouter::new();
        assert_eq!(router.navigate(View::Blog, Some("#featured-projects")), ScrollEffect::Top);
        assert_eq!(router.navigate(View::Home, Some("  ")), ScrollEffect::Top);
        assert!(matches!(
            router.navigate(View::Home, Some("#contact")),
            ScrollEffect::Anchor { ref target, .. } if target == "#contact"
        ));
    }

    #[test]
    fn detail_without_subject_falls_back_to_listing() {
        let mut router = ViewRouter::new();
        router.navigate(View::ProjectDetail, None);
        assert_eq!(router.view(), View::Projects);

        router.navigate_to_detail("   ", Origin::Home);
        assert_eq!(router.view(), View::Projects);
        assert!(router.detail().is_none());
    }

    #[test]
    fn structured_detail_signal_without_id_lands_on_projects() {
        let mut router = ViewRouter::new();
        let signal = NavSignal::from_json(&json!({"view": "project-detail"})).expect("shape");
        assert!(router.handle_signal(&signal).is_some());
        assert_eq!(router.view(), View::Projects);
    }

    #[test]
    fn unknown_view_tag_leaves_state_unchanged() {
        let mut router = ViewRouter::new();
        router.navigate(View::Photography, None);
        let before = router.clone();

        assert!(router.handle_signal(&NavSignal::Bare("settings".to_string())).is_none());
        let structured = NavSignal::from_json(&json!({"view": "settings", "projectId": "1"}))
            .expect("shape");
        assert!(router.handle_signal(&structured).is_none());
        assert_eq!(router, before);
    }

    #[test]
    fn malformed_json_is_not_a_signal() {
        assert!(NavSignal::from_json(&json!(42)).is_none());
        assert!(NavSignal::from_json(&json!({"hash": "#x"})).is_none());
        assert!(NavSignal::from_json(&json!(["projects"])).is_none());
    }

    #[test]
    fn structured_signal_carries_id_and_origin() {
        let mut router = ViewRouter::new();
        let signal = NavSignal::from_json(&json!({
            "view": "project-detail",
            "projectId": "4",
            "from": "home"
        }))
        .expect("shape");
        router.handle_signal(&signal);
        assert_eq!(router.detail(), Some(&DetailTarget {
            project_id: "4".to_string(),
            origin: Origin::Home,
        }));

        let unknown_origin = NavSignal::from_json(&json!({
            "view": "project-detail",
            "projectId": "4",
            "from": "blog"
        }))
        .expect("shape");
        router.handle_signal(&unknown_origin);
        assert_eq!(router.detail().map(|d| d.origin), Some(Origin::Projects));
    }

    #[test]
    fn bare_signal_and_constructors_agree() {
        assert_eq!(NavSignal::from_json(&json!("blog")), Some(NavSignal::view(View::Blog)));
        assert_eq!(
            NavSignal::project_detail("1", Origin::Home).command(),
            Some(NavCommand::Detail {
                project_id: "1".to_string(),
                origin: Origin::Home
            })
        );
        assert_eq!(
            NavSignal::home_anchor("#featured-projects").command(),
            Some(NavCommand::Go {
                view: View::Home,
                hash: Some("#featured-projects".to_string())
            })
        );
    }
}
