//! Active project list with a focused entry

/// Projects reported active by the transport, one of them focused
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRoster {
    projects: Vec<String>,
    focused: usize,
}

impl ProjectRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list, keeping focus on the same project when it survives
    pub fn update(&mut self, projects: Vec<String>) {
        let focused = self.focused().map(str::to_string);
        self.projects = projects;
        self.focused = focused
            .and_then(|name| self.projects.iter().position(|p| *p == name))
            .unwrap_or_else(|| self.focused.min(self.projects.len().saturating_sub(1)));
    }

    /// Focus a project by name; unknown names leave focus unchanged
    pub fn focus(&mut self, name: &str) -> bool {
        match self.projects.iter().position(|p| p == name) {
            Some(index) => {
                self.focused = index;
                true
            }
            None => false,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.projects.get(self.focused).map(String::as_str)
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Short name for the focused project, or "No project"
    pub fn display_name(&self) -> String {
        match self.focused() {
            Some(slug) => Self::short_name(slug).to_string(),
            None => "No project".to_string(),
        }
    }

    /// Last dash-separated segment of a path slug such as `-home-me-claudy`
    pub fn short_name(slug: &str) -> &str {
        let trimmed = slug.strip_prefix('-').unwrap_or(slug);
        match trimmed.rsplit('-').next() {
            Some(last) if !last.is_empty() => last,
            _ => slug,
        }
    }

    /// Display name followed by the indicator when there is one
    pub fn label(&self) -> String {
        let indicator = self.indicator();
        if indicator.is_empty() {
            self.display_name()
        } else {
            format!("{} {}", self.display_name(), indicator)
        }
    }

    /// `[1] 2 3` style markers, empty with fewer than two projects
    pub fn indicator(&self) -> String {
        if self.projects.len() < 2 {
            return String::new();
        }
        (0..self.projects.len())
            .map(|i| {
                if i == self.focused {
                    format!("[{}]", i + 1)
                } else {
                    (i + 1).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_roster() {
        let roster = ProjectRoster::new();
        assert_eq!(roster.focused(), None);
        assert_eq!(roster.display_name(), "No project");
        assert_eq!(roster.indicator(), "");
    }

    #[test]
    fn test_indicator_follows_focus() {
        let mut roster = ProjectRoster::new();
        roster.update(names(&["-home-me-alpha", "-home-me-beta", "-home-me-gamma"]));
        assert_eq!(roster.display_name(), "alpha");
        assert_eq!(roster.indicator(), "[1] 2 3");

        assert!(roster.focus("-home-me-beta"));
        assert_eq!(roster.label(), "beta 1 [2] 3");

        roster.update(names(&["-home-me-beta"]));
        assert_eq!(roster.label(), "beta");
    }

    #[test]
    fn test_update_keeps_focus_on_surviving_project() {
        let mut roster = ProjectRoster::new();
        roster.update(names(&["a", "b", "c"]));
        assert!(roster.focus("c"));
        roster.update(names(&["c", "d"]));
        assert_eq!(roster.focused(), Some("c"));

        roster.update(names(&["x"]));
        assert_eq!(roster.focused(), Some("x"));
        assert!(!roster.focus("nope"));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(ProjectRoster::short_name("-Users-me-code-claudy"), "claudy");
        assert_eq!(ProjectRoster::short_name("plain"), "plain");
        assert_eq!(ProjectRoster::short_name("-trailing-"), "-trailing-");
    }
}
